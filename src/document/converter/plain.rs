//! Plain text line parser.

use crate::document::document::WHOLE_LINE_FIELD;
use crate::document::field_value::{FieldValue, ParsedLine};
use crate::error::Result;

use super::LineParser;

/// Treats each line as a single value under the whole-line field.
#[derive(Debug, Clone)]
pub struct PlainParser {
    headers: Vec<String>,
}

impl Default for PlainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainParser {
    /// Create a plain parser.
    pub fn new() -> Self {
        PlainParser {
            headers: vec![WHOLE_LINE_FIELD.to_string()],
        }
    }
}

impl LineParser for PlainParser {
    fn parse(&self, line: &str) -> Result<ParsedLine> {
        let mut parsed = ParsedLine::with_capacity(1);
        parsed.insert(WHOLE_LINE_FIELD.to_string(), FieldValue::from(line));
        Ok(parsed)
    }

    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
