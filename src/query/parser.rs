//! Query parser for converting query strings to field-scoped sub-queries.

use serde::{Deserialize, Serialize};

use crate::document::WHOLE_LINE_FIELD;

/// One field-scoped term of a query. Both parts are case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubQuery {
    /// Case-folded field name; `"$"` targets the whole line and, for the
    /// indexed searcher, every field.
    pub field: String,
    /// Case-folded term, never empty.
    pub term: String,
}

impl SubQuery {
    /// Create a sub-query, case-folding both field and term.
    pub fn new<F: AsRef<str>, T: AsRef<str>>(field: F, term: T) -> Self {
        SubQuery {
            field: field.as_ref().to_lowercase(),
            term: term.as_ref().to_lowercase(),
        }
    }
}

/// A simple query parser supporting `term` and `field:term` tokens.
///
/// Tokens are separated by single spaces. The first `:` of a token splits
/// it into field and term; tokens without `:` (or with an empty field
/// before it) target the default field. Tokens whose term is empty impose
/// no constraint and are dropped, so consecutive spaces or a trailing
/// `field:` never narrow the result set.
#[derive(Debug, Clone)]
pub struct QueryParser {
    /// Field used when a token carries no field prefix.
    default_field: String,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryParser {
    /// Create a new query parser targeting the whole-line field by default.
    pub fn new() -> Self {
        QueryParser {
            default_field: WHOLE_LINE_FIELD.to_string(),
        }
    }

    /// Set the default field to search in when no field is specified.
    pub fn with_default_field<S: Into<String>>(mut self, field: S) -> Self {
        self.default_field = field.into();
        self
    }

    /// Get the default field.
    pub fn default_field(&self) -> &str {
        &self.default_field
    }

    /// Parse a query string into its sub-queries.
    pub fn parse(&self, query: &str) -> Vec<SubQuery> {
        query
            .split(' ')
            .filter_map(|token| self.parse_token(token))
            .collect()
    }

    fn parse_token(&self, token: &str) -> Option<SubQuery> {
        let (field, term) = match token.split_once(':') {
            Some((field, term)) if !field.is_empty() => (field, term),
            Some((_, term)) => (self.default_field.as_str(), term),
            None => (self.default_field.as_str(), token),
        };

        if term.is_empty() {
            return None;
        }

        Some(SubQuery::new(field, term))
    }
}

/// Parse a query string with the default parser.
pub fn parse_query(query: &str) -> Vec<SubQuery> {
    QueryParser::new().parse(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_terms() {
        let parsed = parse_query("Hello World");
        assert_eq!(
            parsed,
            vec![SubQuery::new("$", "hello"), SubQuery::new("$", "world")]
        );
    }

    #[test]
    fn test_field_scoped_term() {
        let parsed = parse_query("Company:ACME");
        assert_eq!(parsed, vec![SubQuery::new("company", "acme")]);
        assert_eq!(parsed[0].field, "company");
    }

    #[test]
    fn test_first_colon_splits() {
        let parsed = parse_query("url:http://x");
        assert_eq!(parsed, vec![SubQuery::new("url", "http://x")]);
    }

    #[test]
    fn test_empty_terms_are_dropped() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("   ").is_empty());
        assert!(parse_query("title:").is_empty());
        assert_eq!(parse_query("a  b").len(), 2);
    }

    #[test]
    fn test_empty_field_uses_default() {
        let parsed = parse_query(":term");
        assert_eq!(parsed, vec![SubQuery::new("$", "term")]);

        let parser = QueryParser::new().with_default_field("path");
        assert_eq!(parser.default_field(), "path");
        assert_eq!(parser.parse("x"), vec![SubQuery::new("path", "x")]);
    }
}
