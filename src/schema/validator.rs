//! Whole-record validation
//!
//! Validation semantics:
//! - Every declared field is evaluated, present or not
//! - Undeclared record keys are ignored
//! - All failures are collected; nothing stops at the first bad field
//! - Validation never mutates the record and is deterministic
//!
//! Forbidden behaviors:
//! - Implicit type coercion
//! - Defaults influencing validation
//! - Unknown-field errors

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use super::field::Field;
use super::report::ValidationReport;
use super::types::Record;

/// Immutable, ordered mapping from field name to `Field`.
///
/// Safe to share across threads and reuse for any number of records.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(String, Field)>,
}

impl Schema {
    /// Creates a schema from `(name, field)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// - `DATAVAL_INVALID_FIELD_NAME` if a name is empty
    /// - `DATAVAL_DUPLICATE_FIELD` if a name appears twice
    pub fn new<I, N>(fields: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (N, Field)>,
        N: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut declared = Vec::new();

        for (name, field) in fields {
            let name = name.into();
            if name.is_empty() {
                return Err(SchemaError::invalid_field_name());
            }
            if !seen.insert(name.clone()) {
                return Err(SchemaError::duplicate_field(name));
            }
            declared.push((name, field));
        }

        Ok(Self { fields: declared })
    }

    /// Starts an incremental schema definition.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the field declared under `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, field)| field)
    }

    /// Declared fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a record against every declared field.
    ///
    /// # Errors
    ///
    /// Only a defective predicate produces an error
    /// (`DATAVAL_PREDICATE_DEFECT`). Invalid data is reported in the
    /// returned `ValidationReport`.
    pub fn validate(&self, record: &Record) -> SchemaResult<ValidationReport> {
        let mut report = ValidationReport::new();

        for (name, field) in &self.fields {
            let errors = field
                .evaluate(record.get(name))
                .map_err(|e| e.for_field(name))?;
            report.record(name, errors);
        }

        Ok(report)
    }

    /// True iff `validate` yields an empty report.
    pub fn is_valid(&self, record: &Record) -> SchemaResult<bool> {
        Ok(self.validate(record)?.is_empty())
    }

    /// Returns a copy of `record` with defaults filled in.
    ///
    /// Only declared fields absent from `record` with a non-null default are
    /// touched. Present values, including `null`, are kept. Nothing is
    /// validated.
    pub fn apply_defaults(&self, record: &Record) -> Record {
        let mut result = record.clone();

        for (name, field) in &self.fields {
            if result.contains_key(name) {
                continue;
            }
            if let Some(default) = field.default_value() {
                result.insert(name.clone(), default.clone());
            }
        }

        result
    }
}

/// Incremental builder for `Schema`.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, Field)>,
}

impl SchemaBuilder {
    /// Declares a field. Order of calls is the schema order.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Finishes the schema. Same checks as `Schema::new`.
    pub fn build(self) -> SchemaResult<Schema> {
        Schema::new(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Predicate, PredicateError, SchemaErrorCode, REQUIRED_MESSAGE};
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn sample_schema() -> Schema {
        Schema::builder()
            .field(
                "name",
                Field::string().with_predicate(Predicate::on_str("non_empty", |s| !s.is_empty())),
            )
            .field(
                "age",
                Field::int().with_predicate(Predicate::on_i64("adult", |n| n >= 18)),
            )
            .field("email", Field::string().optional())
            .field("active", Field::bool().optional().with_default(json!(true)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_record_passes() {
        let schema = sample_schema();
        let data = record(json!({"name": "John", "age": 25}));

        assert!(schema.validate(&data).unwrap().is_empty());
        assert!(schema.is_valid(&data).unwrap());
    }

    #[test]
    fn test_invalid_record_collects_all_fields() {
        let schema = sample_schema();
        let data = record(json!({"name": "", "age": 15}));

        let report = schema.validate(&data).unwrap();
        assert_eq!(report.get("name").unwrap(), ["Failed validation with non_empty"]);
        assert_eq!(report.get("age").unwrap(), ["Failed validation with adult"]);
        assert!(!report.contains("email"));
        assert!(!schema.is_valid(&data).unwrap());
    }

    #[test]
    fn test_missing_required_field() {
        let schema = sample_schema();
        let data = record(json!({"age": 30}));

        let report = schema.validate(&data).unwrap();
        assert_eq!(report.get("name").unwrap(), [REQUIRED_MESSAGE]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_undeclared_fields_ignored() {
        let schema = sample_schema();
        let data = record(json!({"name": "Ann", "age": 40, "nickname": 7}));
        assert!(schema.is_valid(&data).unwrap());
    }

    #[test]
    fn test_report_follows_declaration_order() {
        let schema = sample_schema();
        let data = record(json!({"active": "yes", "age": "old"}));

        let fields: Vec<_> = schema.validate(&data).unwrap().fields().map(String::from).collect();
        assert_eq!(fields, vec!["name", "age", "active"]);
    }

    #[test]
    fn test_defect_names_field() {
        let schema = Schema::new(vec![(
            "code",
            Field::string().with_predicate(Predicate::new("lookup", |_| {
                Err(PredicateError::defect("registry unavailable"))
            })),
        )])
        .unwrap();

        let err = schema.validate(&record(json!({"code": "A1"}))).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::PredicateDefect);
        assert_eq!(err.field(), Some("code"));
        assert!(schema.is_valid(&record(json!({"code": "A1"}))).is_err());

        // Absent values never reach the predicate.
        assert!(schema.validate(&Record::new()).unwrap().contains("code"));
    }

    #[test]
    fn test_apply_defaults() {
        let schema = sample_schema();
        let data = record(json!({"name": "John"}));

        let filled = schema.apply_defaults(&data);
        assert_eq!(filled.get("active"), Some(&json!(true)));
        assert!(!filled.contains_key("email"));
        assert!(!filled.contains_key("age"));
        assert!(!data.contains_key("active"));
    }

    #[test]
    fn test_apply_defaults_keeps_present_values() {
        let schema = sample_schema();
        let data = record(json!({"active": false, "extra": 1}));

        let filled = schema.apply_defaults(&data);
        assert_eq!(filled, data);

        let data = record(json!({"active": null}));
        assert_eq!(schema.apply_defaults(&data).get("active"), Some(&Value::Null));
    }

    #[test]
    fn test_rejects_empty_field_name() {
        let err = Schema::new(vec![("", Field::string())]).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::InvalidFieldName);
    }

    #[test]
    fn test_rejects_duplicate_field_name() {
        let err = Schema::builder()
            .field("id", Field::string())
            .field("id", Field::int())
            .build()
            .unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DuplicateField);
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn test_lookup_accessors() {
        let schema = sample_schema();
        assert_eq!(schema.len(), 4);
        assert!(!schema.is_empty());
        assert!(schema.field("email").is_some());
        assert!(schema.field("missing").is_none());
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, vec!["name", "age", "email", "active"]);
        assert_eq!(schema.fields().count(), 4);
    }
}
