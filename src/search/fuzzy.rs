//! Fuzzy subsequence searcher.
//!
//! No index is kept: every filter scans the stored documents. A document
//! matches a sub-query when the characters of the term appear, in order but
//! not necessarily adjacent, in the case-folded value of the targeted field.

use std::sync::Arc;

use rayon::prelude::*;

use crate::document::{DocId, Document};
use crate::error::Result;
use crate::query::SubQuery;
use crate::search::searcher::Searcher;

/// Below this many documents the scan runs on the calling thread.
const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// Greedy ordered-subsequence test.
///
/// A single left-to-right pass over `text` advances a cursor into `term`
/// whenever the current characters are equal. An empty term always matches.
///
/// ```
/// use pickline::search::fuzzy::matches_fuzzy;
///
/// assert!(matches_fuzzy("abcd", "bc"));
/// assert!(matches_fuzzy("tttttbxxxxxc", "bc"));
/// assert!(!matches_fuzzy("aaaacbddddd", "bc"));
/// assert!(matches_fuzzy("anything", ""));
/// ```
pub fn matches_fuzzy(text: &str, term: &str) -> bool {
    let mut pending = term.chars().peekable();
    for c in text.chars() {
        match pending.peek() {
            None => break,
            Some(&wanted) if wanted == c => {
                pending.next();
            }
            Some(_) => {}
        }
    }
    pending.peek().is_none()
}

/// A searcher that scans documents for fuzzy subsequence matches.
#[derive(Debug, Default)]
pub struct FuzzySearcher {
    documents: Vec<Arc<Document>>,
}

impl FuzzySearcher {
    /// Create an empty fuzzy searcher.
    pub fn new() -> Self {
        FuzzySearcher {
            documents: Vec::new(),
        }
    }

    fn matches_all(document: &Document, sub_queries: &[SubQuery]) -> bool {
        sub_queries.iter().all(|sub_query| {
            document
                .lowered_field(&sub_query.field)
                .is_some_and(|value| matches_fuzzy(value, &sub_query.term))
        })
    }
}

impl Searcher for FuzzySearcher {
    fn add_document(&mut self, document: Document) -> Result<DocId> {
        let id = self.documents.len();
        self.documents.push(Arc::new(document.with_id(id)));
        Ok(id)
    }

    fn filter_entries(&self, sub_queries: &[SubQuery]) -> Vec<DocId> {
        if sub_queries.is_empty() {
            return (0..self.documents.len()).collect();
        }

        if self.documents.len() < PARALLEL_SCAN_THRESHOLD {
            self.documents
                .iter()
                .filter(|doc| Self::matches_all(doc, sub_queries))
                .map(|doc| doc.id())
                .collect()
        } else {
            self.documents
                .par_iter()
                .filter(|doc| Self::matches_all(doc, sub_queries))
                .map(|doc| doc.id())
                .collect()
        }
    }

    fn get_document(&self, id: DocId) -> Option<Arc<Document>> {
        self.documents.get(id).cloned()
    }

    fn count(&self) -> usize {
        self.documents.len()
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn searcher_with(lines: &[&str]) -> FuzzySearcher {
        let mut searcher = FuzzySearcher::new();
        for line in lines {
            searcher.add_document(Document::plain(line)).unwrap();
        }
        searcher
    }

    #[test]
    fn test_subsequence_order_matters() {
        let searcher = searcher_with(&["abcd", "aaaacbddddd", "tttttbxxxxxc"]);
        assert_eq!(searcher.filter_entries(&parse_query("bc")), vec![0, 2]);
    }

    #[test]
    fn test_upper_case_documents_and_queries() {
        let searcher = searcher_with(&["aBCd", "aaaacbddddd", "tttttbxxxxxc"]);
        assert_eq!(searcher.filter_entries(&parse_query("bc")), vec![0, 2]);
        assert_eq!(searcher.filter_entries(&parse_query("BC")), vec![0, 2]);
    }

    #[test]
    fn test_every_sub_query_must_match() {
        let searcher = searcher_with(&["src/main.rs", "src/lib.rs", "tests/main.rs"]);
        assert_eq!(searcher.filter_entries(&parse_query("sr mn")), vec![0]);
        assert_eq!(searcher.filter_entries(&parse_query("rs")), vec![0, 1, 2]);
        assert!(searcher.filter_entries(&parse_query("zz")).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let searcher = searcher_with(&["a", "b"]);
        assert_eq!(searcher.filter_entries(&[]), vec![0, 1]);
    }

    #[test]
    fn test_field_scoping() {
        let mut searcher = FuzzySearcher::new();
        searcher
            .add_document(Document::builder("x").add_text("Title", "Rust Book").build())
            .unwrap();
        searcher
            .add_document(Document::builder("rust").add_text("title", "Go").build())
            .unwrap();

        assert_eq!(searcher.filter_entries(&parse_query("title:rb")), vec![0]);
        assert_eq!(searcher.filter_entries(&parse_query("rust")), vec![1]);
        assert!(searcher.filter_entries(&parse_query("author:r")).is_empty());
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let mut searcher = FuzzySearcher::new();
        for i in 0..(PARALLEL_SCAN_THRESHOLD + 10) {
            let line = if i % 3 == 0 {
                format!("match-{i}")
            } else {
                format!("other-{i}")
            };
            searcher.add_document(Document::plain(&line)).unwrap();
        }

        let ids = searcher.filter_entries(&parse_query("mch"));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|id| id % 3 == 0));
        assert_eq!(ids.len(), (PARALLEL_SCAN_THRESHOLD + 10).div_ceil(3));
    }

    #[test]
    fn test_matches_fuzzy_edge_cases() {
        assert!(matches_fuzzy("aab", "ab"));
        assert!(!matches_fuzzy("", "a"));
        assert!(!matches_fuzzy("ba", "ab"));
        assert!(matches_fuzzy("ünïcödé", "ncd"));
    }
}
