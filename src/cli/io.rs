//! JSON I/O handling for CLI
//!
//! - Input: one JSON object (the record) on stdin
//! - Output: text lines or one JSON object on stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::schema::Record;

/// Read a record from stdin
pub fn read_record() -> CliResult<Record> {
    read_record_from(&mut io::stdin().lock())
}

/// Read a record from any reader; the whole input must be one JSON object
pub fn read_record_from<R: Read>(reader: &mut R) -> CliResult<Record> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    match serde_json::from_str::<Value>(&input)? {
        Value::Object(record) => Ok(record),
        other => Err(CliError::invalid_input(format!(
            "Expected a JSON object, got {}",
            crate::schema::value_type_name(&other)
        ))),
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_value(writer, &response)
}

/// Write plain text lines to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn write_value<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_multiline_object() {
        let mut input = "{\n  \"username\": \"johndoe\",\n  \"age\": 25\n}\n".as_bytes();
        let record = read_record_from(&mut input).unwrap();
        assert_eq!(record.get("age"), Some(&json!(25)));
    }

    #[test]
    fn test_read_rejects_non_object() {
        let mut input = "[1, 2]".as_bytes();
        let err = read_record_from(&mut input).unwrap_err();
        assert!(err.message().contains("got array"));
    }

    #[test]
    fn test_read_rejects_empty() {
        let mut input = "  \n".as_bytes();
        assert!(read_record_from(&mut input).is_err());
    }

    #[test]
    fn test_response_shape() {
        let mut out = Vec::new();
        write_response_to(&mut out, json!({"valid": true})).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({"status": "ok", "data": {"valid": true}}));
    }
}
