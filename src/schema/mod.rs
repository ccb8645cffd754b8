//! Declarative schema validation
//!
//! A `Schema` is an ordered set of named `Field`s. Each `Field` carries a
//! type tag, a required flag, ordered `Predicate`s and an optional default.
//!
//! # Design Principles
//!
//! - Per-field reports, never fail-fast on bad data
//! - Type mismatch is terminal for a field; predicates only see typed values
//! - Defective predicates surface as `SchemaError`, not as report entries
//! - No coercion; defaults are applied only on request
//! - Schemas are immutable and deterministic

mod errors;
mod field;
mod predicate;
mod report;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use field::{Field, REQUIRED_MESSAGE};
pub use predicate::{Predicate, PredicateError, PredicateResult};
pub use report::ValidationReport;
pub use types::{value_type_name, FieldType, Record};
pub use validator::{Schema, SchemaBuilder};
