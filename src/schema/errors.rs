//! Schema error types
//!
//! Error codes:
//! - DATAVAL_INVALID_FIELD_NAME (REJECT)
//! - DATAVAL_DUPLICATE_FIELD (REJECT)
//! - DATAVAL_PREDICATE_DEFECT (DEFECT)
//!
//! Invalid data is never an error here: it is reported through
//! `ValidationReport`. `SchemaError` covers broken schemas and broken
//! predicates only.

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Schema construction rejected
    Reject,
    /// A predicate is broken; the validator itself is at fault
    Defect,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Defect => write!(f, "DEFECT"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Field name is empty
    InvalidFieldName,
    /// Field name declared twice
    DuplicateField,
    /// Predicate failed for a reason unrelated to the input's validity
    PredicateDefect,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::InvalidFieldName => "DATAVAL_INVALID_FIELD_NAME",
            SchemaErrorCode::DuplicateField => "DATAVAL_DUPLICATE_FIELD",
            SchemaErrorCode::PredicateDefect => "DATAVAL_PREDICATE_DEFECT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::PredicateDefect => Severity::Defect,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Field name if applicable
    field: Option<String>,
    /// Predicate name if applicable
    predicate: Option<String>,
    /// Underlying defect description if applicable
    reason: Option<String>,
}

impl SchemaError {
    /// Create an invalid (empty) field name error
    pub fn invalid_field_name() -> Self {
        Self {
            code: SchemaErrorCode::InvalidFieldName,
            message: "Field names must be non-empty".into(),
            field: None,
            predicate: None,
            reason: None,
        }
    }

    /// Create a duplicate field error
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: SchemaErrorCode::DuplicateField,
            message: format!("Field '{}' is declared more than once", field),
            field: Some(field),
            predicate: None,
            reason: None,
        }
    }

    /// Create a predicate defect error.
    ///
    /// `field` may be empty when a `Field` is evaluated outside a `Schema`.
    pub fn predicate_defect(
        field: impl Into<String>,
        predicate: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let predicate = predicate.into();
        let reason = reason.into();
        let message = if field.is_empty() {
            format!("Predicate '{}' is defective: {}", predicate, reason)
        } else {
            format!(
                "Predicate '{}' on field '{}' is defective: {}",
                predicate, field, reason
            )
        };
        Self {
            code: SchemaErrorCode::PredicateDefect,
            message,
            field: if field.is_empty() { None } else { Some(field) },
            predicate: Some(predicate),
            reason: Some(reason),
        }
    }

    /// Attaches the field name to an error raised below the schema level.
    pub(crate) fn for_field(self, field: &str) -> Self {
        match self.code {
            SchemaErrorCode::PredicateDefect if self.field.is_none() => {
                Self::predicate_defect(
                    field,
                    self.predicate.unwrap_or_default(),
                    self.reason.unwrap_or_default(),
                )
            }
            _ => self,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field name if applicable
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the predicate name if applicable
    pub fn predicate(&self) -> Option<&str> {
        self.predicate.as_deref()
    }

    /// Returns whether this error means the validator itself is broken
    pub fn is_defect(&self) -> bool {
        self.severity() == Severity::Defect
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
