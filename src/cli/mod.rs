//! CLI module for dataval
//!
//! Provides command-line interface for:
//! - check: run one built-in validator on a value
//! - validate: validate a JSON record from stdin against the user schema
//! - demo: show schema validation on a valid and an invalid user

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{CheckKind, Cli, Command};
pub use commands::{
    check, check_value, demo, run, run_command, user_schema, validate, validate_record,
    ValidationOutcome,
};
pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_record, read_record_from, write_response, write_response_to, write_text};
