//! Single-field rules
//!
//! Evaluation order, short-circuiting per value:
//! 1. absence (required -> "Field is required", optional -> valid)
//! 2. type check (mismatch is terminal; no predicate sees a wrong-typed value)
//! 3. predicates, in declaration order, each one independent of the others

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::predicate::{Predicate, PredicateError};
use super::types::{value_type_name, FieldType};

/// Message reported for an absent required field.
pub const REQUIRED_MESSAGE: &str = "Field is required";

/// Validation rules for one named attribute of a record.
///
/// Built once with the consuming builder methods, then read-only.
#[derive(Debug, Clone)]
pub struct Field {
    field_type: FieldType,
    required: bool,
    predicates: Vec<Predicate>,
    default: Option<Value>,
}

impl Field {
    /// Creates a required field of the given type with no predicates.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            predicates: Vec::new(),
            default: None,
        }
    }

    /// Required string field
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Required int field
    pub fn int() -> Self {
        Self::new(FieldType::Int)
    }

    /// Required float field
    pub fn float() -> Self {
        Self::new(FieldType::Float)
    }

    /// Required bool field
    pub fn bool() -> Self {
        Self::new(FieldType::Bool)
    }

    /// Required array field
    pub fn array() -> Self {
        Self::new(FieldType::Array)
    }

    /// Required object field
    pub fn object() -> Self {
        Self::new(FieldType::Object)
    }

    /// Marks the field optional.
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Sets whether the field must be present.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Appends a predicate.
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Appends several predicates, keeping their order.
    pub fn with_predicates(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Sets the value used by `Schema::apply_defaults`.
    ///
    /// A `null` default is treated as no default.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns the default, ignoring an explicit `null`.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref().filter(|v| !v.is_null())
    }

    /// Classifies one value, `None` meaning absent.
    ///
    /// Returns the ordered list of error messages; empty means valid.
    ///
    /// # Errors
    ///
    /// Returns `DATAVAL_PREDICATE_DEFECT` when a predicate reports
    /// `PredicateError::Defect`. Remaining predicates are not run.
    pub fn evaluate(&self, value: Option<&Value>) -> SchemaResult<Vec<String>> {
        let value = match value {
            Some(value) => value,
            None if self.required => return Ok(vec![REQUIRED_MESSAGE.to_string()]),
            None => return Ok(Vec::new()),
        };

        if !self.field_type.accepts(value) {
            return Ok(vec![format!(
                "Expected type {}, got {}",
                self.field_type,
                value_type_name(value)
            )]);
        }

        let mut errors = Vec::new();
        for predicate in &self.predicates {
            match predicate.check(value) {
                Ok(true) => {}
                Ok(false) => {
                    errors.push(format!("Failed validation with {}", predicate.name()))
                }
                Err(PredicateError::Invalid(message)) => {
                    errors.push(format!("Validation error: {}", message))
                }
                Err(PredicateError::Defect(reason)) => {
                    return Err(SchemaError::predicate_defect("", predicate.name(), reason));
                }
            }
        }

        Ok(errors)
    }
}
