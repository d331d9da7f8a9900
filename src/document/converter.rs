//! Line parsers: turn raw input lines into documents.
//!
//! A [`LineParser`] maps one raw line to a [`ParsedLine`] and reports the
//! ordered header list used by the presentation layer. Three formats are
//! supported:
//!
//! - [`plain::PlainParser`] - the whole line is the only field
//! - [`tabular::TabularParser`] - delimiter-separated columns named by a header line
//! - [`json::JsonParser`] - one JSON object per line
//!
//! # Example
//!
//! ```
//! use pickline::document::converter::{LineFormat, LineParserFactory, parse_line};
//!
//! let parser = LineParserFactory::create(LineFormat::Tabular, "name  age", &[], ' ').unwrap();
//! assert_eq!(parser.headers(), ["name", "age"]);
//!
//! let doc = parse_line(parser.as_ref(), "ada 36").unwrap();
//! assert_eq!(doc.field("name"), Some("ada"));
//! assert_eq!(doc.field("$"), Some("ada 36"));
//! ```

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::document::document::Document;
use crate::document::field_value::ParsedLine;
use crate::error::Result;

pub mod json;
pub mod plain;
pub mod tabular;

use json::JsonParser;
use plain::PlainParser;
use tabular::TabularParser;

/// A trait for parsing raw lines into field maps.
pub trait LineParser: Send + Sync + std::fmt::Debug {
    /// Parse one raw line.
    fn parse(&self, line: &str) -> Result<ParsedLine>;

    /// Ordered column names for display.
    fn headers(&self) -> &[String];

    /// Whether the first input line only describes the format (a header
    /// line) and must not be ingested as a document.
    fn consumes_first_line(&self) -> bool {
        false
    }

    /// Name of the format (for logging).
    fn name(&self) -> &'static str;
}

/// Supported input line formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// Each line is a single opaque value.
    #[default]
    Plain,
    /// Delimiter-separated columns; the first line holds the headers.
    Tabular,
    /// One JSON object per line.
    Json,
}

/// Factory for creating line parsers.
pub struct LineParserFactory;

impl LineParserFactory {
    /// Create the parser for a format.
    ///
    /// `first_line` is the first input line (empty when there is none); the
    /// tabular format takes its headers from it and the JSON format takes
    /// the sorted keys of its object. A non-empty `headers_override`
    /// replaces the display headers in every format.
    pub fn create(
        format: LineFormat,
        first_line: &str,
        headers_override: &[String],
        delimiter: char,
    ) -> Result<Box<dyn LineParser>> {
        let mut parser: Box<dyn LineParser> = match format {
            LineFormat::Plain => Box::new(PlainParser::new()),
            LineFormat::Tabular => Box::new(TabularParser::from_header_line(first_line, delimiter)),
            LineFormat::Json => Box::new(JsonParser::from_first_line(first_line)?),
        };

        if !headers_override.is_empty() {
            parser = Box::new(WithHeaders {
                inner: parser,
                headers: headers_override.to_vec(),
            });
        }

        info!(
            "using {} line parser with headers {:?}",
            parser.name(),
            parser.headers()
        );
        Ok(parser)
    }
}

/// Parse a raw line into a document (id not yet assigned).
pub fn parse_line(parser: &dyn LineParser, line: &str) -> Result<Document> {
    let parsed = parser.parse(line)?;
    Ok(Document::from_parsed(line, parsed))
}

/// Replaces the display headers of another parser.
#[derive(Debug)]
struct WithHeaders {
    inner: Box<dyn LineParser>,
    headers: Vec<String>,
}

impl LineParser for WithHeaders {
    fn parse(&self, line: &str) -> Result<ParsedLine> {
        self.inner.parse(line)
    }

    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn consumes_first_line(&self) -> bool {
        self.inner.consumes_first_line()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
