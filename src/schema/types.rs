//! Field type tags and the record model
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit integer
//! - float: 64-bit floating point (integers are accepted)
//! - bool: Boolean
//! - array: any JSON array, contents unchecked
//! - object: any JSON object, contents unchecked

use serde_json::Value;
use std::fmt;

/// A candidate record: field name to value.
///
/// A key missing from the map is absent. A key mapped to `null` is present.
pub type Record = serde_json::Map<String, Value>;

/// Closed set of type tags a field may expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed or unsigned integer
    Int,
    /// 64-bit floating point; integral JSON numbers are `int`
    Float,
    /// Boolean
    Bool,
    /// Array of any values
    Array,
    /// Object of any values
    Object,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    /// Returns true if `value`'s runtime type satisfies this tag.
    ///
    /// No coercion: `"5"` is not an int and `5.0` is not an int.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_f64(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Object => value.is_object(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Returns the runtime type name of a value for error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::Float.type_name(), "float");
        assert_eq!(FieldType::Bool.type_name(), "bool");
        assert_eq!(FieldType::Array.type_name(), "array");
        assert_eq!(FieldType::Object.type_name(), "object");
    }

    #[test]
    fn test_int_rejects_float_and_string() {
        assert!(FieldType::Int.accepts(&json!(42)));
        assert!(FieldType::Int.accepts(&json!(u64::MAX)));
        assert!(!FieldType::Int.accepts(&json!(4.2)));
        assert!(!FieldType::Int.accepts(&json!("42")));
    }

    #[test]
    fn test_float_rejects_integers() {
        assert!(FieldType::Float.accepts(&json!(99.5)));
        assert!(FieldType::Float.accepts(&json!(100.0)));
        assert!(!FieldType::Float.accepts(&json!(100)));
        assert!(!FieldType::Float.accepts(&json!(u64::MAX)));
        assert!(!FieldType::Float.accepts(&json!(true)));
    }

    #[test]
    fn test_null_satisfies_nothing() {
        let null = Value::Null;
        for ty in [
            FieldType::String,
            FieldType::Int,
            FieldType::Float,
            FieldType::Bool,
            FieldType::Array,
            FieldType::Object,
        ] {
            assert!(!ty.accepts(&null), "{} accepted null", ty);
        }
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(1)), "int");
        assert_eq!(value_type_name(&json!(1.5)), "float");
        assert_eq!(value_type_name(&json!("x")), "string");
        assert_eq!(value_type_name(&json!([1])), "array");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
    }
}
