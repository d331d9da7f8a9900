//! Ordering of matching documents.
//!
//! Both orders are total: no two distinct documents compare equal, so the
//! same id set always sorts to the same sequence.

use std::cmp::Ordering;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::document::{DocId, Document};
use crate::search::searcher::Searcher;

/// How filtered documents are ordered before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Shorter raw text first, ties broken by ascending id.
    #[default]
    Default,
    /// Most recently ingested first (descending id).
    Index,
}

impl SortOrder {
    /// Compare two documents under this order.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        match self {
            SortOrder::Default => a
                .raw_text()
                .len()
                .cmp(&b.raw_text().len())
                .then_with(|| a.id().cmp(&b.id())),
            SortOrder::Index => b.id().cmp(&a.id()),
        }
    }
}

/// Resolve ids against a searcher and sort the documents.
///
/// Ids the searcher does not know are dropped.
pub fn sort_documents(
    ids: Vec<DocId>,
    searcher: &dyn Searcher,
    order: SortOrder,
) -> Vec<Arc<Document>> {
    let mut documents: Vec<Arc<Document>> = ids
        .into_iter()
        .filter_map(|id| searcher.get_document(id))
        .collect();
    documents.sort_unstable_by(|a, b| order.compare(a, b));
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fuzzy::FuzzySearcher;

    fn searcher_with(lines: &[&str]) -> FuzzySearcher {
        let mut searcher = FuzzySearcher::new();
        for line in lines {
            searcher.add_document(Document::plain(line)).unwrap();
        }
        searcher
    }

    fn texts(documents: &[Arc<Document>]) -> Vec<&str> {
        documents.iter().map(|d| d.raw_text()).collect()
    }

    #[test]
    fn test_default_order_shortest_first_then_id() {
        let searcher = searcher_with(&["ccc", "a", "bb", "dd", "e"]);
        let sorted = sort_documents(vec![0, 1, 2, 3, 4], &searcher, SortOrder::Default);
        assert_eq!(texts(&sorted), vec!["a", "e", "bb", "dd", "ccc"]);
    }

    #[test]
    fn test_default_order_is_deterministic() {
        let searcher = searcher_with(&["xx", "yy", "z", "ww"]);
        let first = sort_documents(vec![3, 0, 2, 1], &searcher, SortOrder::Default);
        let second = sort_documents(vec![1, 2, 0, 3], &searcher, SortOrder::Default);
        assert_eq!(texts(&first), texts(&second));
        assert!(
            first
                .windows(2)
                .all(|w| w[0].raw_text().len() <= w[1].raw_text().len())
        );
    }

    #[test]
    fn test_index_order_newest_first() {
        let searcher = searcher_with(&["first", "2", "third line"]);
        let sorted = sort_documents(vec![0, 2, 1], &searcher, SortOrder::Index);
        assert_eq!(texts(&sorted), vec!["third line", "2", "first"]);
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let searcher = searcher_with(&["only"]);
        let sorted = sort_documents(vec![0, 7], &searcher, SortOrder::Default);
        assert_eq!(texts(&sorted), vec!["only"]);
    }

    #[test]
    fn test_distinct_documents_never_compare_equal() {
        let a = Document::plain("same").with_id(0);
        let b = Document::plain("same").with_id(1);
        for order in [SortOrder::Default, SortOrder::Index] {
            assert_ne!(order.compare(&a, &b), Ordering::Equal);
            assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
        }
    }
}
