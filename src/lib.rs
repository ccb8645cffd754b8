//! dataval - declarative schema validation for records
//!
//! Describe a record shape once as a [`schema::Schema`] of named
//! [`schema::Field`]s, then validate any number of records against it and
//! get per-field error reports back.
//!
//! ```
//! use dataval::predicates;
//! use dataval::schema::{Field, Record, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("email", Field::string().with_predicate(predicates::email()))
//!     .field("age", Field::int().with_predicate(predicates::min_value(18.0)))
//!     .build()
//!     .unwrap();
//!
//! let mut record = Record::new();
//! record.insert("email".into(), json!("not-an-email"));
//! record.insert("age".into(), json!(16));
//!
//! let report = schema.validate(&record).unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "email: Failed validation with is_email\nage: Failed validation with min_value(18)"
//! );
//! ```

pub mod cli;
pub mod observability;
pub mod predicates;
pub mod schema;
