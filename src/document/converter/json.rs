//! JSON line parser.
//!
//! Each line must hold one JSON object:
//! ```json
//! {"file": "src/main.rs", "line": 12, "tags": ["entry", "bin"]}
//! ```
//! Top-level keys become fields. Strings (and string elements of arrays)
//! are indexed; other values are kept for display.

use serde_json::Value;

use crate::document::field_value::{FieldValue, ParsedLine};
use crate::error::{PicklineError, Result};

use super::LineParser;

/// A line parser for JSON objects.
#[derive(Debug, Clone, Default)]
pub struct JsonParser {
    headers: Vec<String>,
}

impl JsonParser {
    /// Create a JSON parser with explicit display headers.
    pub fn new(headers: Vec<String>) -> Self {
        JsonParser { headers }
    }

    /// Create a JSON parser whose headers are the sorted keys of the first
    /// input line. An empty first line yields no headers.
    pub fn from_first_line(first_line: &str) -> Result<Self> {
        if first_line.trim().is_empty() {
            return Ok(Self::default());
        }

        let object = Self::parse_object(first_line).map_err(|e| {
            PicklineError::parse(format!("first line is not a JSON object: {e}"))
        })?;
        let mut headers: Vec<String> = object.keys().cloned().collect();
        headers.sort();
        Ok(Self::new(headers))
    }

    fn parse_object(line: &str) -> Result<serde_json::Map<String, Value>> {
        match serde_json::from_str::<Value>(line)? {
            Value::Object(map) => Ok(map),
            other => Err(PicklineError::parse(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl LineParser for JsonParser {
    fn parse(&self, line: &str) -> Result<ParsedLine> {
        let object = Self::parse_object(line)?;
        Ok(object
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from(value)))
            .collect())
    }

    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
