//! Document structure for ingested lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::{FieldValue, ParsedLine};

/// Identifier assigned by a searcher in insertion order (dense, starting at 0).
pub type DocId = usize;

/// Synthetic field holding the whole raw line. Unscoped sub-queries target it.
pub const WHOLE_LINE_FIELD: &str = "$";

/// A value the inverted index tokenizes, under its case-folded field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexableValue {
    /// Case-folded field name.
    pub field: String,
    /// Original text (the tokenizer output is case-folded by the index).
    pub text: String,
}

/// A document represents a single ingested line.
///
/// Documents are immutable once built. The id is `0` until a searcher
/// assigns the real one with [`Document::with_id`] on insertion.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Document {
    id: DocId,
    raw_text: String,
    /// Display values keyed by the original field name.
    fields: HashMap<String, String>,
    /// Case-folded values keyed by the case-folded field name.
    lowered_fields: HashMap<String, String>,
    indexable: Vec<IndexableValue>,
}

impl Document {
    /// Build a document from a raw line and the fields a parser extracted.
    ///
    /// The whole line is always stored under [`WHOLE_LINE_FIELD`], even if
    /// the parser produced a field with that name.
    pub fn from_parsed(raw_text: &str, parsed: ParsedLine) -> Self {
        let mut fields = HashMap::with_capacity(parsed.len() + 1);
        let mut lowered_fields = HashMap::with_capacity(parsed.len() + 1);
        let mut indexable = Vec::new();

        for (name, value) in parsed {
            let lowered_name = name.to_lowercase();
            for text in value.indexable_texts() {
                indexable.push(IndexableValue {
                    field: lowered_name.clone(),
                    text: text.to_string(),
                });
            }
            let display = value.display_string();
            lowered_fields.insert(lowered_name, display.to_lowercase());
            fields.insert(name, display);
        }

        fields.insert(WHOLE_LINE_FIELD.to_string(), raw_text.to_string());
        lowered_fields.insert(WHOLE_LINE_FIELD.to_string(), raw_text.to_lowercase());

        Document {
            id: 0,
            raw_text: raw_text.to_string(),
            fields,
            lowered_fields,
            indexable,
        }
    }

    /// Build a document whose only field is the whole line.
    pub fn plain(line: &str) -> Self {
        let mut parsed = ParsedLine::new();
        parsed.insert(WHOLE_LINE_FIELD.to_string(), FieldValue::from(line));
        Self::from_parsed(line, parsed)
    }

    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(raw_text: S) -> DocumentBuilder {
        DocumentBuilder::new(raw_text)
    }

    /// Return this document carrying the given id.
    pub fn with_id(mut self, id: DocId) -> Self {
        self.id = id;
        self
    }

    /// The searcher-assigned id.
    pub fn id(&self) -> DocId {
        self.id
    }

    /// The raw input line.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Display value of a field, by its original name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// All display values keyed by original field name.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Case-folded value of a field, by its case-folded name.
    pub fn lowered_field(&self, lowered_name: &str) -> Option<&str> {
        self.lowered_fields.get(lowered_name).map(String::as_str)
    }

    /// Values the inverted index should tokenize.
    pub fn indexable_values(&self) -> &[IndexableValue] {
        &self.indexable
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug)]
pub struct DocumentBuilder {
    raw_text: String,
    parsed: ParsedLine,
}

impl DocumentBuilder {
    /// Create a new document builder for the given raw line.
    pub fn new<S: Into<String>>(raw_text: S) -> Self {
        DocumentBuilder {
            raw_text: raw_text.into(),
            parsed: ParsedLine::new(),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.parsed
            .insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.parsed.insert(name.into(), value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        Document::from_parsed(&self.raw_text, self.parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_line_field_is_always_present() {
        let doc = Document::builder(r#"{"Name": "Ada"}"#)
            .add_text("Name", "Ada")
            .build();

        assert_eq!(doc.field("$"), Some(r#"{"Name": "Ada"}"#));
        assert_eq!(doc.lowered_field("$"), Some(r#"{"name": "ada"}"#));
        assert_eq!(doc.field("Name"), Some("Ada"));
        assert_eq!(doc.lowered_field("name"), Some("ada"));
        assert_eq!(doc.lowered_field("Name"), None);
    }

    #[test]
    fn test_indexable_values_skip_non_text() {
        let doc = Document::builder("line")
            .add_field("count", FieldValue::Integer(3))
            .add_field(
                "Tags",
                FieldValue::Array(vec!["a".into(), FieldValue::Null, "b".into()]),
            )
            .build();

        let mut values: Vec<(&str, &str)> = doc
            .indexable_values()
            .iter()
            .map(|v| (v.field.as_str(), v.text.as_str()))
            .collect();
        values.sort();
        assert_eq!(values, vec![("tags", "a"), ("tags", "b")]);
        assert_eq!(doc.field("count"), Some("3"));
    }

    #[test]
    fn test_plain_document() {
        let doc = Document::plain("Hello World").with_id(4);
        assert_eq!(doc.id(), 4);
        assert_eq!(doc.raw_text(), "Hello World");
        assert_eq!(doc.indexable_values().len(), 1);
        assert_eq!(doc.indexable_values()[0].field, "$");
        assert_eq!(doc.lowered_field("$"), Some("hello world"));
    }
}
