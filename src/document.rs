//! Document model for ingested lines.
//!
//! Every input line becomes one immutable [`document::Document`]. A document
//! keeps the raw line, a display copy of every parsed field, a case-folded
//! copy used only for matching, and the list of values the inverted index
//! tokenizes. The synthetic field [`document::WHOLE_LINE_FIELD`] (`"$"`)
//! always holds the whole raw line.
//!
//! # Core Components
//!
//! - [`document::Document`] - The immutable record handed to searchers
//! - [`document::DocumentBuilder`] - Fluent construction, mostly for tests
//! - [`field_value::FieldValue`] - Values produced by the line parsers
//! - [`converter::LineParser`] - Plain, tabular and JSON line parsers
//!
//! # Examples
//!
//! ```
//! use pickline::document::document::Document;
//!
//! let doc = Document::builder("src/main.rs")
//!     .add_text("path", "src/main.rs")
//!     .build();
//!
//! assert_eq!(doc.field("path"), Some("src/main.rs"));
//! assert_eq!(doc.field("$"), Some("src/main.rs"));
//! ```

pub mod converter;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

pub use document::{DocId, Document, DocumentBuilder, IndexableValue, WHOLE_LINE_FIELD};
pub use converter::{LineFormat, LineParser, LineParserFactory, parse_line};
pub use field_value::{FieldValue, ParsedLine};
