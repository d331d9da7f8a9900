//! Search state snapshots.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::query::{SubQuery, parse_query};
use crate::search::{SharedSearcher, SortOrder};

/// The current query and the index of the highlighted result.
///
/// Snapshots are values: every accepted transition produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub selected: usize,
}

impl SearchState {
    /// Create a state.
    pub fn new<S: Into<String>>(query: S, selected: usize) -> Self {
        SearchState {
            query: query.into(),
            selected,
        }
    }

    /// The parsed query.
    pub fn sub_queries(&self) -> Vec<SubQuery> {
        parse_query(&self.query)
    }

    /// Number of documents matching the query.
    pub fn filtered_count(&self, searcher: &SharedSearcher) -> usize {
        searcher.filter_entries(&self.sub_queries()).len()
    }

    /// Matching documents, ranked.
    pub fn filtered(&self, searcher: &SharedSearcher, order: SortOrder) -> Vec<Arc<Document>> {
        searcher.search(&self.sub_queries(), order)
    }

    /// The highlighted document, if the selection is in range.
    ///
    /// An out-of-range selection means nothing is selected.
    pub fn entry(&self, searcher: &SharedSearcher, order: SortOrder) -> Option<Arc<Document>> {
        self.filtered(searcher, order).into_iter().nth(self.selected)
    }

    /// This state with the selection reset to 0 when it is not below
    /// `filtered_len`.
    pub fn clamped(mut self, filtered_len: usize) -> Self {
        if self.selected >= filtered_len {
            self.selected = 0;
        }
        self
    }
}
