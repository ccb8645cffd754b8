//! CLI command implementations
//!
//! Commands are thin: load config, build the user schema, call the engine,
//! render. Invalid records are reported, not treated as failures.

use std::path::Path;

use serde_json::{json, Value};

use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::predicates;
use crate::schema::{Field, Record, Schema, SchemaResult, ValidationReport};

use super::args::{CheckKind, Command};
use super::config::{Config, OutputFormat};
use super::errors::CliResult;
use super::io::{read_record, write_response, write_text};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check { kind, data, config } => check(kind, &data, config.as_deref()),
        Command::Validate {
            config,
            apply_defaults,
        } => validate(config.as_deref(), apply_defaults),
        Command::Demo { config } => demo(config.as_deref()),
    }
}

/// Check a single value with a built-in validator
pub fn check(kind: CheckKind, data: &str, config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let valid = check_value(kind, data, &config);

    match config.output {
        OutputFormat::Text => write_text(&format!("Is valid {}: {}", kind, valid)),
        OutputFormat::Json => write_response(json!({
            "kind": kind.label(),
            "data": data,
            "valid": valid,
        })),
    }
}

/// Validate one record from stdin against the user schema
pub fn validate(config_path: Option<&Path>, apply_defaults: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    let schema = user_schema(&config)?;
    let record = read_record()?;

    let outcome = validate_record(&schema, &record, apply_defaults)?;

    match config.output {
        OutputFormat::Text => write_text(&outcome.render_text()),
        OutputFormat::Json => write_response(outcome.to_json()),
    }
}

/// Run the basic-validator and user-schema demonstration
pub fn demo(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let schema = user_schema(&config)?;

    let checks = basic_checks(&config);
    let valid = validate_record(&schema, &demo_valid_user(), false)?;
    let invalid = validate_record(&schema, &demo_invalid_user(), false)?;

    match config.output {
        OutputFormat::Text => {
            let mut lines = vec!["Basic Validators:".to_string()];
            lines.extend(checks.iter().map(|(kind, sample, ok)| {
                format!("Is '{}' a valid {}? {}", sample, kind, ok)
            }));
            lines.push(String::new());
            lines.push("Schema Validation Demo".to_string());
            lines.push(format!("Valid user schema check: {}", valid.is_valid()));
            lines.push("Invalid user validation errors:".to_string());
            lines.extend(invalid.report.to_string().lines().map(|l| format!("  {}", l)));
            write_text(&lines.join("\n"))
        }
        OutputFormat::Json => {
            let basic: serde_json::Map<String, Value> = checks
                .iter()
                .map(|(_, sample, ok)| (sample.to_string(), Value::Bool(*ok)))
                .collect();
            write_response(json!({
                "basic_validators": basic,
                "valid_user": valid.is_valid(),
                "invalid_user_errors": serde_json::to_value(&invalid.report)?,
            }))
        }
    }
}

/// Built-in checks on the demo sample values
fn basic_checks(config: &Config) -> Vec<(CheckKind, &'static str, bool)> {
    [
        (CheckKind::Email, "user@example.com"),
        (CheckKind::Url, "https://www.example.com"),
        (CheckKind::Date, "2023-05-15"),
    ]
    .into_iter()
    .map(|(kind, sample)| (kind, sample, check_value(kind, sample, config)))
    .collect()
}

/// Result of validating one record from the command line
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub report: ValidationReport,
    /// Input record, with defaults applied when requested
    pub record: Record,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.report.is_empty()
    }

    /// `Valid`, or one `field: errors` line per failing field
    pub fn render_text(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            self.report.to_string()
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "valid": self.is_valid(),
            "errors": &self.report,
            "record": Value::Object(self.record.clone()),
        })
    }
}

/// Validates `record`, logging the outcome. Defaults are applied after
/// validation and never influence the report.
pub fn validate_record(
    schema: &Schema,
    record: &Record,
    apply_defaults: bool,
) -> CliResult<ValidationOutcome> {
    let field_count = record.len().to_string();
    Logger::trace(Event::ValidationBegin.as_str(), &[("fields", field_count.as_str())]);

    let report = match schema.validate(record) {
        Ok(report) => report,
        Err(e) => {
            log_event_with_fields(
                Event::PredicateDefect,
                &[
                    ("field", e.field().unwrap_or("")),
                    ("predicate", e.predicate().unwrap_or("")),
                ],
            );
            return Err(e.into());
        }
    };

    if report.is_empty() {
        log_event(Event::ValidationPassed);
    } else {
        let failed: Vec<&str> = report.fields().collect();
        let failed = failed.join(",");
        let count = report.error_count().to_string();
        log_event_with_fields(
            Event::ValidationRejected,
            &[("fields", failed.as_str()), ("errors", count.as_str())],
        );
    }

    let record = if apply_defaults {
        let filled = schema.apply_defaults(record);
        let added = (filled.len() - record.len()).to_string();
        log_event_with_fields(Event::DefaultsApplied, &[("added", added.as_str())]);
        filled
    } else {
        record.clone()
    };

    Ok(ValidationOutcome { report, record })
}

/// Runs one built-in validator on a raw string
pub fn check_value(kind: CheckKind, data: &str, config: &Config) -> bool {
    match kind {
        CheckKind::Email => predicates::is_email(data),
        CheckKind::Url => predicates::is_url(data),
        CheckKind::Date => predicates::is_date(data, &config.date_format),
        CheckKind::CreditCard => predicates::is_credit_card(data),
    }
}

/// The user record shape used by `validate` and `demo`.
///
/// - username: string, at least 3 characters
/// - email: string, email-shaped
/// - age: int, at least `min_age`
/// - website: optional string, URL-shaped
/// - joined: optional string, date in `date_format`
/// - newsletter: optional bool, defaults to false
pub fn user_schema(config: &Config) -> SchemaResult<Schema> {
    let schema = Schema::builder()
        .field(
            "username",
            Field::string().with_predicate(predicates::min_length(3)),
        )
        .field("email", Field::string().with_predicate(predicates::email()))
        .field(
            "age",
            Field::int().with_predicate(predicates::min_value(config.min_age as f64)),
        )
        .field(
            "website",
            Field::string().optional().with_predicate(predicates::url()),
        )
        .field(
            "joined",
            Field::string()
                .optional()
                .with_predicate(predicates::date(config.date_format.clone())),
        )
        .field(
            "newsletter",
            Field::bool().optional().with_default(Value::Bool(false)),
        )
        .build()?;

    let count = schema.len().to_string();
    log_event_with_fields(Event::SchemaBuilt, &[("name", "user"), ("fields", count.as_str())]);

    Ok(schema)
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(path)?;
    Logger::set_min_severity(config.severity()?);

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("path", source.as_str())]);

    Ok(config)
}

fn demo_valid_user() -> Record {
    object(json!({
        "username": "johndoe",
        "email": "john@example.com",
        "age": 25,
        "website": "https://example.com",
    }))
}

fn demo_invalid_user() -> Record {
    object(json!({
        "username": "jd",
        "email": "not-an-email",
        "age": 16,
    }))
}

fn object(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}
