//! The searcher capability set and its thread-safe handle.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::document::{DocId, Document};
use crate::error::Result;
use crate::query::SubQuery;
use crate::search::ranking::{SortOrder, sort_documents};

/// Trait implemented by every search strategy.
///
/// Documents are only ever added; ids are dense and assigned in insertion
/// order starting at 0.
pub trait Searcher: Send + Sync + Debug {
    /// Store a document, assigning it the next sequential id.
    fn add_document(&mut self, document: Document) -> Result<DocId>;

    /// Ids of the documents matching every sub-query, in no particular
    /// order and without duplicates. No sub-queries match every document.
    fn filter_entries(&self, sub_queries: &[SubQuery]) -> Vec<DocId>;

    /// Look up a document by id.
    fn get_document(&self, id: DocId) -> Option<Arc<Document>>;

    /// Number of stored documents.
    fn count(&self) -> usize;

    /// Name of the strategy (for logging).
    fn name(&self) -> &'static str;
}

/// A searcher shared between the ingestion and interaction threads.
///
/// Every operation takes the lock for its whole duration, so a filter never
/// observes a half-indexed document. Cloning the handle is cheap.
#[derive(Clone, Debug)]
pub struct SharedSearcher {
    inner: Arc<RwLock<Box<dyn Searcher>>>,
}

impl SharedSearcher {
    /// Wrap a searcher for shared use.
    pub fn new(searcher: Box<dyn Searcher>) -> Self {
        SharedSearcher {
            inner: Arc::new(RwLock::new(searcher)),
        }
    }

    /// Add a document under the write lock.
    pub fn add_document(&self, document: Document) -> Result<DocId> {
        self.inner.write().add_document(document)
    }

    /// Filter under the read lock.
    pub fn filter_entries(&self, sub_queries: &[SubQuery]) -> Vec<DocId> {
        self.inner.read().filter_entries(sub_queries)
    }

    /// Look up a document by id.
    pub fn get_document(&self, id: DocId) -> Option<Arc<Document>> {
        self.inner.read().get_document(id)
    }

    /// Number of stored documents.
    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// Name of the wrapped strategy.
    pub fn name(&self) -> &'static str {
        self.inner.read().name()
    }

    /// Filter and rank in one read-locked pass.
    pub fn search(&self, sub_queries: &[SubQuery], order: SortOrder) -> Vec<Arc<Document>> {
        let guard = self.inner.read();
        let ids = guard.filter_entries(sub_queries);
        sort_documents(ids, &**guard, order)
    }

    /// Matching document count and total document count, taken atomically.
    pub fn counts(&self, sub_queries: &[SubQuery]) -> (usize, usize) {
        let guard = self.inner.read();
        (guard.filter_entries(sub_queries).len(), guard.count())
    }
}
