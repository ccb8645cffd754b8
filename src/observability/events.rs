//! Observable events
//!
//! Events are explicit and typed. The validation engine itself emits
//! nothing; front-ends log these around engine calls.

use std::fmt;

/// Observable events in dataval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Schema constructed
    SchemaBuilt,
    /// A record is about to be validated
    ValidationBegin,
    /// Record passed every field
    ValidationPassed,
    /// Record failed at least one field
    ValidationRejected,
    /// Defaults filled into a record
    DefaultsApplied,
    /// A predicate reported a defect (validator is broken)
    PredicateDefect,
}

impl Event {
    /// Returns the event name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaBuilt => "SCHEMA_BUILT",
            Event::ValidationBegin => "VALIDATION_BEGIN",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::DefaultsApplied => "DEFAULTS_APPLIED",
            Event::PredicateDefect => "PREDICATE_DEFECT",
        }
    }

    /// Returns true if this event means the process cannot trust its validator
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::PredicateDefect)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
