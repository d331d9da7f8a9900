//! Rendering of the selected entry.

use std::io::Write;

use log::debug;
use regex::Regex;

use crate::config::FinderConfig;
use crate::document::{Document, WHOLE_LINE_FIELD};
use crate::error::{PicklineError, Result};

/// `{{field}}` or `{{.field}}`, with optional inner whitespace.
const PLACEHOLDER: &str = r"\{\{\s*\.?([^{}\s]+)\s*\}\}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field(String),
}

/// A parsed output template.
///
/// ```
/// use pickline::cli::output::OutputTemplate;
/// use pickline::document::Document;
///
/// let template = OutputTemplate::parse("{{file}}:{{ .line }}").unwrap();
/// let doc = Document::builder("raw")
///     .add_text("file", "src/main.rs")
///     .add_text("line", "12")
///     .build();
/// assert_eq!(template.render(&doc), "src/main.rs:12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    pieces: Vec<Piece>,
}

impl OutputTemplate {
    /// Parse a template. A `{{` that does not open a valid placeholder is
    /// an error.
    pub fn parse(template: &str) -> Result<Self> {
        let placeholder = Regex::new(PLACEHOLDER)?;
        let mut pieces = Vec::new();
        let mut last = 0;

        for captures in placeholder.captures_iter(template) {
            let (Some(whole), Some(field)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            Self::push_literal(&mut pieces, &template[last..whole.start()])?;
            pieces.push(Piece::Field(field.as_str().to_string()));
            last = whole.end();
        }
        Self::push_literal(&mut pieces, &template[last..])?;

        Ok(OutputTemplate { pieces })
    }

    fn push_literal(pieces: &mut Vec<Piece>, literal: &str) -> Result<()> {
        if literal.contains("{{") {
            return Err(PicklineError::config(format!(
                "malformed placeholder in output template near '{literal}'"
            )));
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal.to_string()));
        }
        Ok(())
    }

    /// Substitute the document's fields. Missing fields render as "".
    pub fn render(&self, document: &Document) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.as_str(),
                Piece::Field(name) => document.field(name).unwrap_or_default(),
            })
            .collect()
    }
}

/// Turns the selected document into the program's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRenderer {
    /// The value of one field.
    Column(String),
    /// A template over the fields.
    Template(OutputTemplate),
}

impl OutputRenderer {
    /// Choose the renderer for a configuration.
    ///
    /// A template is used only when one is given and the output column is
    /// the whole line; an explicit column always wins.
    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        match &config.output_template {
            Some(template) if config.output_column == WHOLE_LINE_FIELD => {
                Ok(OutputRenderer::Template(OutputTemplate::parse(template)?))
            }
            Some(_) => {
                debug!(
                    "output column {} given, ignoring the output template",
                    config.output_column
                );
                Ok(OutputRenderer::Column(config.output_column.clone()))
            }
            None => Ok(OutputRenderer::Column(config.output_column.clone())),
        }
    }

    /// Render a document.
    pub fn render(&self, document: &Document) -> String {
        match self {
            OutputRenderer::Column(column) => {
                document.field(column).unwrap_or_default().to_string()
            }
            OutputRenderer::Template(template) => template.render(document),
        }
    }

    /// Render a document as one output line.
    pub fn write_entry<W: Write>(&self, out: &mut W, document: &Document) -> Result<()> {
        writeln!(out, "{}", self.render(document))
            .and_then(|()| out.flush())
            .map_err(|e| PicklineError::output(format!("failed to write entry: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::builder("ada 36 london")
            .add_text("name", "ada")
            .add_text("age", "36")
            .build()
    }

    #[test]
    fn test_column_output() {
        let renderer = OutputRenderer::Column("name".to_string());
        assert_eq!(renderer.render(&document()), "ada");

        let whole = OutputRenderer::Column("$".to_string());
        assert_eq!(whole.render(&document()), "ada 36 london");

        let missing = OutputRenderer::Column("city".to_string());
        assert_eq!(missing.render(&document()), "");
    }

    #[test]
    fn test_template_output() {
        let template = OutputTemplate::parse("{{name}} is {{ .age }}{{city}}!").unwrap();
        assert_eq!(template.render(&document()), "ada is 36!");

        let literal = OutputTemplate::parse("no placeholders").unwrap();
        assert_eq!(literal.render(&document()), "no placeholders");
    }

    #[test]
    fn test_malformed_template() {
        assert!(OutputTemplate::parse("{{name").is_err());
        assert!(OutputTemplate::parse("{{}}").is_err());
    }

    #[test]
    fn test_column_wins_over_template() {
        let config = FinderConfig::default()
            .with_output_template("{{name}}")
            .with_output_column("age");
        let renderer = OutputRenderer::from_config(&config).unwrap();
        assert_eq!(renderer, OutputRenderer::Column("age".to_string()));

        let config = FinderConfig::default().with_output_template("{{name}}");
        let renderer = OutputRenderer::from_config(&config).unwrap();
        assert_eq!(renderer.render(&document()), "ada");
    }

    #[test]
    fn test_write_entry_appends_newline() {
        let renderer = OutputRenderer::Column("name".to_string());
        let mut out = Vec::new();
        renderer.write_entry(&mut out, &document()).unwrap();
        assert_eq!(out, b"ada\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_an_output_error() {
        let renderer = OutputRenderer::Column("name".to_string());
        let err = renderer.write_entry(&mut ClosedPipe, &document()).unwrap_err();
        assert!(matches!(err, PicklineError::Output(_)));
    }
}
