//! Named predicate capability
//!
//! A predicate is a pure check over a value whose type has already been
//! confirmed by the owning `Field`. It answers `Ok(true)` / `Ok(false)`, or
//! fails with a `PredicateError`:
//! - `Invalid`: the input is malformed in a way the predicate can describe
//!   (reported, validation continues)
//! - `Defect`: the predicate itself is broken or misconfigured
//!   (propagated to the caller)

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by a predicate instead of a boolean answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The value could not be evaluated because it is malformed.
    #[error("{0}")]
    Invalid(String),

    /// The predicate is broken; not a statement about the value.
    #[error("predicate defect: {0}")]
    Defect(String),
}

impl PredicateError {
    /// Shorthand for a validation-specific failure
    pub fn invalid(message: impl Into<String>) -> Self {
        PredicateError::Invalid(message.into())
    }

    /// Shorthand for a programmer defect
    pub fn defect(message: impl Into<String>) -> Self {
        PredicateError::Defect(message.into())
    }
}

/// Result type returned by predicate checks
pub type PredicateResult = Result<bool, PredicateError>;

type CheckFn = dyn Fn(&Value) -> PredicateResult + Send + Sync;

/// A named check. Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Predicate {
    name: Arc<str>,
    check: Arc<CheckFn>,
}

impl Predicate {
    /// Creates a predicate from a fallible check.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> PredicateResult + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            check: Arc::new(check),
        }
    }

    /// Creates a predicate from an infallible boolean check over any value.
    pub fn from_fn<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| Ok(check(value)))
    }

    /// Creates a predicate over string values.
    pub fn on_str<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| match value.as_str() {
            Some(s) => Ok(check(s)),
            None => Err(kind_defect("string", value)),
        })
    }

    /// Creates a predicate over integer values.
    ///
    /// Integers above `i64::MAX` are valid `int` data the closure cannot
    /// see; they fail with `PredicateError::Invalid`.
    pub fn on_i64<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(i64) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| match value.as_i64() {
            Some(n) => Ok(check(n)),
            None if value.is_u64() => Err(PredicateError::invalid(format!(
                "{} is outside the signed 64-bit range",
                value
            ))),
            None => Err(kind_defect("int", value)),
        })
    }

    /// Creates a predicate over numeric values (integers widen to `f64`).
    pub fn on_f64<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| match value.as_f64() {
            Some(n) => Ok(check(n)),
            None => Err(kind_defect("number", value)),
        })
    }

    /// Returns the identifier used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the check.
    pub fn check(&self, value: &Value) -> PredicateResult {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

fn kind_defect(expected: &str, value: &Value) -> PredicateError {
    PredicateError::defect(format!(
        "expected {} input, got {}",
        expected,
        super::types::value_type_name(value)
    ))
}
