//! Configuration file
//!
//! JSON, every key optional:
//!
//! ```json
//! { "log_level": "info", "output": "text", "date_format": "%Y-%m-%d", "min_age": 18 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::observability::Severity;
use crate::predicates::DEFAULT_DATE_FORMAT;

use super::errors::{CliError, CliResult};

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `field: errors` lines
    Text,
    /// One JSON object per command
    Json,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format (default text)
    #[serde(default = "default_output")]
    pub output: OutputFormat,

    /// chrono format for date checks (default "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Minimum age accepted by the user schema (default 18)
    #[serde(default = "default_min_age")]
    pub min_age: i64,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_output() -> OutputFormat {
    OutputFormat::Text
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_min_age() -> i64 {
    18
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: default_output(),
            date_format: default_date_format(),
            min_age: default_min_age(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.severity()?;

        if self.date_format.trim().is_empty() {
            return Err(CliError::config_error("date_format must not be empty"));
        }

        if self.min_age < 0 {
            return Err(CliError::config_error("min_age must be >= 0"));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(|e: String| {
            CliError::config_error(format!("Invalid log_level: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.severity().unwrap(), Severity::Info);
        assert_eq!(config.min_age, 18);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config(r#"{"output": "json", "min_age": 21}"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.min_age, 21);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let file = write_config(r#"{"log_level": "loud"}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message().contains("log_level"));
    }

    #[test]
    fn test_rejects_negative_min_age() {
        let file = write_config(r#"{"min_age": -1}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let file = write_config(r#"{"colour": "red"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dataval.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
