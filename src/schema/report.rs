//! Per-field validation report
//!
//! Rendering convention: one line per failing field,
//! `<field>: <errors joined by ", ">`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Result of one validation call: field name to ordered error messages.
///
/// Entries follow schema declaration order. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records errors for a field. Empty error lists are dropped.
    pub(crate) fn record(&mut self, field: &str, errors: Vec<String>) {
        if !errors.is_empty() {
            self.entries.push((field.to_string(), errors));
        }
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Errors for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, errors)| errors.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Failing field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, errors)| (name.as_str(), errors.as_slice()))
    }

    /// Total number of messages across all fields
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, errors)| errors.len()).sum()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, errors)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, errors.join(", "))?;
        }
        Ok(())
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, errors) in &self.entries {
            map.serialize_entry(field, errors)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a [String])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
