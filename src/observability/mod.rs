//! Observability for dataval
//!
//! Structured JSON-lines logging with typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use dataval::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::ValidationRejected, &[("fields", "email,age")]);
//! Logger::trace(Event::ValidationBegin.as_str(), &[("fields", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}
