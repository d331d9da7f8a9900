//! Inverted-index searcher.
//!
//! Every indexable field value is tokenized and each case-folded token is
//! posted under its own field and under the whole-line field `"$"`, so an
//! unscoped term matches a token of any field. Filtering intersects the
//! posting sets of the sub-queries; lookups are exact string matches on
//! case-folded tokens.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::delimiter::DelimiterTokenizer;
use crate::document::{DocId, Document, WHOLE_LINE_FIELD};
use crate::error::Result;
use crate::query::SubQuery;
use crate::search::searcher::Searcher;

/// Set of document ids sharing one (field, token) pair.
pub type PostingSet = AHashSet<DocId>;

/// Case-folded token to posting set, for one field.
pub type TermPostings = AHashMap<String, PostingSet>;

/// A searcher backed by a per-field inverted index.
pub struct IndexedSearcher {
    documents: Vec<Arc<Document>>,
    /// Case-folded field name to its term postings.
    postings: AHashMap<String, TermPostings>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for IndexedSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedSearcher")
            .field("documents", &self.documents.len())
            .field("fields", &self.postings.len())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for IndexedSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexedSearcher {
    /// Create an empty searcher using the default delimiter tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(DelimiterTokenizer::new()))
    }

    /// Create an empty searcher with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        IndexedSearcher {
            documents: Vec::new(),
            postings: AHashMap::new(),
            tokenizer,
        }
    }

    /// Posting set for a (field, term) pair, if the pair was ever indexed.
    pub fn postings(&self, field: &str, term: &str) -> Option<&PostingSet> {
        self.postings.get(field).and_then(|terms| terms.get(term))
    }

    /// Number of distinct tokens indexed under a field.
    pub fn term_count(&self, field: &str) -> usize {
        self.postings.get(field).map_or(0, |terms| terms.len())
    }

    fn post(&mut self, field: &str, token: &str, id: DocId) {
        self.postings
            .entry(field.to_string())
            .or_default()
            .entry(token.to_string())
            .or_default()
            .insert(id);
    }
}

impl Searcher for IndexedSearcher {
    fn add_document(&mut self, document: Document) -> Result<DocId> {
        let id = self.documents.len();
        let document = document.with_id(id);

        for value in document.indexable_values() {
            for token in self.tokenizer.tokenize(&value.text)? {
                let token = token.text.to_lowercase();
                self.post(&value.field, &token, id);
                if value.field != WHOLE_LINE_FIELD {
                    self.post(WHOLE_LINE_FIELD, &token, id);
                }
            }
        }

        self.documents.push(Arc::new(document));
        Ok(id)
    }

    fn filter_entries(&self, sub_queries: &[SubQuery]) -> Vec<DocId> {
        let Some((first, rest)) = sub_queries.split_first() else {
            return (0..self.documents.len()).collect();
        };

        let Some(initial) = self.postings(&first.field, &first.term) else {
            return Vec::new();
        };

        let mut results: PostingSet = initial.clone();
        for sub_query in rest {
            let Some(postings) = self.postings(&sub_query.field, &sub_query.term) else {
                debug!(
                    "no postings for {}:{}, filter is empty",
                    sub_query.field, sub_query.term
                );
                return Vec::new();
            };
            results.retain(|id| postings.contains(id));
            if results.is_empty() {
                break;
            }
        }

        results.into_iter().collect()
    }

    fn get_document(&self, id: DocId) -> Option<Arc<Document>> {
        self.documents.get(id).cloned()
    }

    fn count(&self) -> usize {
        self.documents.len()
    }

    fn name(&self) -> &'static str {
        "indexed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldValue;
    use crate::query::parse_query;

    fn sorted(mut ids: Vec<DocId>) -> Vec<DocId> {
        ids.sort_unstable();
        ids
    }

    fn searcher_with(lines: &[&str]) -> IndexedSearcher {
        let mut searcher = IndexedSearcher::new();
        for line in lines {
            searcher.add_document(Document::plain(line)).unwrap();
        }
        searcher
    }

    #[test]
    fn test_basic_query() {
        let searcher = searcher_with(&["hello world", "this is the best WOrld", "this won't match"]);
        assert_eq!(sorted(searcher.filter_entries(&parse_query("world"))), vec![0, 1]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let searcher = searcher_with(&["a", "b", "c"]);
        assert_eq!(sorted(searcher.filter_entries(&[])), vec![0, 1, 2]);
        assert_eq!(sorted(searcher.filter_entries(&parse_query("  "))), vec![0, 1, 2]);
    }

    #[test]
    fn test_and_semantics_and_fail_fast() {
        let searcher = searcher_with(&["src/main.rs", "src/lib.rs", "tests/main.rs"]);

        assert_eq!(sorted(searcher.filter_entries(&parse_query("src main"))), vec![0]);
        assert_eq!(sorted(searcher.filter_entries(&parse_query("rs"))), vec![0, 1, 2]);
        assert!(searcher.filter_entries(&parse_query("src missing")).is_empty());
        assert!(searcher.filter_entries(&parse_query("missing src")).is_empty());
    }

    #[test]
    fn test_exact_token_only() {
        let searcher = searcher_with(&["hello world"]);
        assert!(searcher.filter_entries(&parse_query("hell")).is_empty());
        assert!(searcher.filter_entries(&parse_query("hello world x")).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let searcher = searcher_with(&["Hello World", "hello there"]);
        let lower = sorted(searcher.filter_entries(&parse_query("hello")));
        let upper = sorted(searcher.filter_entries(&parse_query("HELLO")));
        assert_eq!(lower, upper);
        assert_eq!(lower, vec![0, 1]);
    }

    #[test]
    fn test_field_scoping() {
        let mut searcher = IndexedSearcher::new();
        searcher
            .add_document(
                Document::builder("ada lovelace")
                    .add_text("Name", "Ada")
                    .add_text("company", "Analytical")
                    .build(),
            )
            .unwrap();
        searcher
            .add_document(
                Document::builder("grace ada")
                    .add_text("name", "Grace")
                    .add_text("company", "Ada Corp")
                    .build(),
            )
            .unwrap();

        assert_eq!(sorted(searcher.filter_entries(&parse_query("name:ada"))), vec![0]);
        assert_eq!(sorted(searcher.filter_entries(&parse_query("company:ada"))), vec![1]);
        assert_eq!(sorted(searcher.filter_entries(&parse_query("ada"))), vec![0, 1]);
        assert!(searcher.filter_entries(&parse_query("nope:ada")).is_empty());
    }

    #[test]
    fn test_arrays_are_indexed_per_element() {
        let mut searcher = IndexedSearcher::new();
        searcher
            .add_document(
                Document::builder("{}")
                    .add_field(
                        "tags",
                        FieldValue::Array(vec!["Rust".into(), "cli".into(), FieldValue::Integer(3)]),
                    )
                    .add_field("stars", FieldValue::Integer(42))
                    .build(),
            )
            .unwrap();

        assert_eq!(searcher.filter_entries(&parse_query("tags:rust")), vec![0]);
        assert_eq!(searcher.filter_entries(&parse_query("cli")), vec![0]);
        assert!(searcher.filter_entries(&parse_query("42")).is_empty());
        assert!(searcher.filter_entries(&parse_query("3")).is_empty());
    }

    #[test]
    fn test_ids_are_dense_and_sequential() {
        let mut searcher = IndexedSearcher::new();
        for (expected, line) in ["x", "y", "z"].iter().enumerate() {
            let id = searcher.add_document(Document::plain(line)).unwrap();
            assert_eq!(id, expected);
            assert_eq!(searcher.get_document(id).unwrap().id(), expected);
        }
        assert_eq!(searcher.count(), 3);
        assert!(searcher.get_document(3).is_none());
        assert_eq!(searcher.term_count("$"), 3);
        assert!(searcher.postings("$", "x").is_some());
    }
}
