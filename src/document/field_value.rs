//! Field value types produced by line parsers.
//!
//! A parser turns a raw line into a [`ParsedLine`], a map from field name to
//! [`FieldValue`]. Only text (and the text elements of arrays) is tokenized
//! for the inverted index; numbers, booleans, null and nested objects are
//! kept for display only.
//!
//! ```
//! use pickline::document::field_value::FieldValue;
//!
//! let tags = FieldValue::Array(vec![
//!     FieldValue::Text("rust".to_string()),
//!     FieldValue::Integer(7),
//! ]);
//! assert_eq!(tags.indexable_texts(), vec!["rust"]);
//! assert_eq!(FieldValue::Integer(42).display_string(), "42");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed line: field name to value.
pub type ParsedLine = HashMap<String, FieldValue>;

/// Represents a value for a field of a parsed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of values; text elements are indexed one by one
    Array(Vec<FieldValue>),
    /// Nested object, kept as its JSON text
    Object(String),
    /// Null value
    Null,
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// String shown to the user and used for fuzzy matching.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Array(values) => {
                let items: Vec<String> = values.iter().map(FieldValue::display_string).collect();
                format!("[{}]", items.join(", "))
            }
            FieldValue::Object(json) => json.clone(),
            FieldValue::Null => String::new(),
        }
    }

    /// Values the inverted index tokenizes for this field.
    ///
    /// Text yields itself, arrays yield their text elements, everything
    /// else yields nothing.
    pub fn indexable_texts(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) => vec![s.as_str()],
            FieldValue::Array(values) => values.iter().filter_map(FieldValue::as_text).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Text(n.to_string())
                }
            }
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Array(values) => {
                FieldValue::Array(values.into_iter().map(FieldValue::from).collect())
            }
            Value::Object(_) => FieldValue::Object(value.to_string()),
            Value::Null => FieldValue::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}
