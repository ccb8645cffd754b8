//! Built-in predicates
//!
//! Each check exists twice: as a plain function over a primitive, and as a
//! named `Predicate` ready to attach to a `Field`. The predicate name is what
//! appears in "Failed validation with <name>" messages.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::schema::{Predicate, PredicateError};

/// Date format used when none is given
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const URL_PATTERN: &str = r"^(https?|ftp)://[^\s/$.?#].[^\s]*$";

// Patterns are constants; compiling them cannot fail at runtime.
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("url pattern compiles"))
}

/// Checks that a string looks like an email address.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Checks that a string looks like an http(s) or ftp URL.
pub fn is_url(value: &str) -> bool {
    url_regex().is_match(value)
}

/// Checks a card number with the Luhn algorithm.
///
/// Spaces and hyphens are ignored. The remaining characters must be 13 to 19
/// ASCII digits.
pub fn is_credit_card(value: &str) -> bool {
    let digits: Vec<u32> = value
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if !(13..=19).contains(&digits.len()) {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}

/// Checks that a string parses as a calendar date in `format`.
pub fn is_date(value: &str, format: &str) -> bool {
    NaiveDate::parse_from_str(value, format).is_ok()
}

/// Inclusive range check; a missing bound is unbounded.
pub fn is_number_in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// `is_email` as a predicate.
pub fn email() -> Predicate {
    Predicate::on_str("is_email", is_email)
}

/// `is_url` as a predicate.
pub fn url() -> Predicate {
    Predicate::on_str("is_url", is_url)
}

/// `is_credit_card` as a predicate.
pub fn credit_card() -> Predicate {
    Predicate::on_str("is_credit_card", is_credit_card)
}

/// Date predicate. Unparseable input is reported as a validation error
/// carrying the parser's explanation, not as a plain failed check.
pub fn date(format: impl Into<String>) -> Predicate {
    let format = format.into();
    Predicate::new("is_date", move |value| {
        let text = value
            .as_str()
            .ok_or_else(|| PredicateError::defect("is_date expects string input"))?;
        NaiveDate::parse_from_str(text, &format)
            .map(|_| true)
            .map_err(|e| {
                PredicateError::invalid(format!(
                    "'{}' is not a date in format '{}': {}",
                    text, format, e
                ))
            })
    })
}

/// Inclusive numeric range as a predicate.
pub fn range(min: Option<f64>, max: Option<f64>) -> Predicate {
    let name = format!("in_range({}, {})", bound(min), bound(max));
    Predicate::on_f64(name, move |n| is_number_in_range(n, min, max))
}

/// Lower bound as a predicate.
pub fn min_value(min: f64) -> Predicate {
    Predicate::on_f64(format!("min_value({})", min), move |n| n >= min)
}

/// Minimum length in characters.
pub fn min_length(min: usize) -> Predicate {
    Predicate::on_str(format!("min_length({})", min), move |s| s.chars().count() >= min)
}

/// Maximum length in characters.
pub fn max_length(max: usize) -> Predicate {
    Predicate::on_str(format!("max_length({})", max), move |s| s.chars().count() <= max)
}

fn bound(value: Option<f64>) -> String {
    value.map_or_else(|| "_".to_string(), |v| v.to_string())
}
