//! CLI argument definitions using clap
//!
//! Commands:
//! - dataval check <kind> <data>
//! - dataval validate [--config <path>] [--apply-defaults]
//! - dataval demo [--config <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// dataval - declarative record validation
#[derive(Parser, Debug)]
#[command(name = "dataval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one value with a built-in validator
    Check {
        /// Validator to run
        #[arg(value_enum)]
        kind: CheckKind,

        /// Value to check
        data: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a JSON record read from stdin against the user schema
    Validate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fill in defaults for absent fields before printing the record
        #[arg(long)]
        apply_defaults: bool,
    },

    /// Run the schema validation demonstration
    Demo {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Built-in single-value validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Email,
    Url,
    Date,
    CreditCard,
}

impl CheckKind {
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Email => "email",
            CheckKind::Url => "URL",
            CheckKind::Date => "date",
            CheckKind::CreditCard => "credit card",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["dataval", "check", "credit-card", "4111 1111 1111 1111"])
            .unwrap();
        match cli.command {
            Command::Check { kind, data, config } => {
                assert_eq!(kind, CheckKind::CreditCard);
                assert_eq!(data, "4111 1111 1111 1111");
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate_flags() {
        let cli = Cli::try_parse_from([
            "dataval",
            "validate",
            "--config",
            "dataval.json",
            "--apply-defaults",
        ])
        .unwrap();
        match cli.command {
            Command::Validate {
                config,
                apply_defaults,
            } => {
                assert_eq!(config, Some(PathBuf::from("dataval.json")));
                assert!(apply_defaults);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_check_kind_rejected() {
        assert!(Cli::try_parse_from(["dataval", "check", "phone", "555"]).is_err());
    }
}
