//! CLI-specific error types
//!
//! An invalid record is not a CLI error; it is a normal validation outcome.

use std::fmt;
use std::io;

use crate::schema::SchemaError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Input is not a JSON object
    InvalidInput,
    /// Schema construction or predicate defect
    SchemaError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DATAVAL_CLI_CONFIG_ERROR",
            Self::IoError => "DATAVAL_CLI_IO_ERROR",
            Self::InvalidInput => "DATAVAL_CLI_INVALID_INPUT",
            Self::SchemaError => "DATAVAL_CLI_SCHEMA_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_code() {
        let err = CliError::config_error("bad output mode");
        assert_eq!(err.to_string(), "DATAVAL_CLI_CONFIG_ERROR: bad output mode");
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_from_schema_error() {
        let err: CliError = SchemaError::duplicate_field("age").into();
        assert_eq!(err.code_str(), "DATAVAL_CLI_SCHEMA_ERROR");
        assert!(err.message().contains("DATAVAL_DUPLICATE_FIELD"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert_eq!(err.code(), &CliErrorCode::InvalidInput);
    }
}
