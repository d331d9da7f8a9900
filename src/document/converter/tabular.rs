//! Delimiter-separated column parser.

use log::warn;

use crate::document::field_value::{FieldValue, ParsedLine};
use crate::error::Result;

use super::LineParser;

/// Split on a delimiter, dropping empty pieces so runs of delimiters
/// count as one separator.
fn split_columns(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).filter(|c| !c.is_empty()).collect()
}

/// A line parser for delimiter-separated columns.
///
/// Column `i` is stored under header `i`. The last header takes the rest
/// of the line, re-joined with the delimiter, so free text in the final
/// column survives. Values are trimmed. Missing trailing columns are simply
/// absent from the parsed line.
#[derive(Debug, Clone)]
pub struct TabularParser {
    headers: Vec<String>,
    delimiter: char,
}

impl TabularParser {
    /// Create a tabular parser with explicit headers.
    pub fn new(headers: Vec<String>, delimiter: char) -> Self {
        TabularParser { headers, delimiter }
    }

    /// Create a tabular parser whose headers are the columns of a header line.
    pub fn from_header_line(header_line: &str, delimiter: char) -> Self {
        let headers: Vec<String> = split_columns(header_line, delimiter)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() {
            warn!("tabular header line is empty, lines will have no columns");
        }
        Self::new(headers, delimiter)
    }

    /// The column delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl LineParser for TabularParser {
    fn parse(&self, line: &str) -> Result<ParsedLine> {
        let columns = split_columns(line, self.delimiter);
        let mut parsed = ParsedLine::with_capacity(self.headers.len());
        let last = self.headers.len().saturating_sub(1);
        let separator = self.delimiter.to_string();

        for (i, (header, column)) in self.headers.iter().zip(&columns).enumerate() {
            let value = if i == last {
                columns[i..].join(&separator)
            } else {
                (*column).to_string()
            };
            parsed.insert(header.clone(), FieldValue::Text(value.trim().to_string()));
        }

        Ok(parsed)
    }

    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn consumes_first_line(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "tabular"
    }
}
