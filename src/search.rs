//! Searchers: the owners of ingested documents.
//!
//! Two strategies implement the [`searcher::Searcher`] trait:
//!
//! - [`indexed::IndexedSearcher`] - inverted index, exact case-folded token match
//! - [`fuzzy::FuzzySearcher`] - linear scan, ordered-subsequence match
//!
//! Both are chosen at startup through [`factory::SearcherFactory`] and
//! shared between the ingestion and interaction threads behind a
//! [`searcher::SharedSearcher`]. Matching ids are ordered by
//! [`ranking::SortOrder`].
//!
//! # Examples
//!
//! ```
//! use pickline::document::Document;
//! use pickline::query::parse_query;
//! use pickline::search::factory::{SearcherConfig, SearcherFactory};
//! use pickline::search::ranking::SortOrder;
//!
//! let searcher = SearcherFactory::create_shared(SearcherConfig::default());
//! for line in ["hello world", "this is the best WOrld", "this won't match"] {
//!     searcher.add_document(Document::plain(line)).unwrap();
//! }
//!
//! let hits = searcher.search(&parse_query("world"), SortOrder::Default);
//! let texts: Vec<&str> = hits.iter().map(|d| d.raw_text()).collect();
//! assert_eq!(texts, vec!["hello world", "this is the best WOrld"]);
//! ```

pub mod factory;
pub mod fuzzy;
pub mod indexed;
pub mod ranking;
pub mod searcher;

pub use factory::{SearcherConfig, SearcherFactory, SearcherKind};
pub use ranking::{SortOrder, sort_documents};
pub use searcher::{Searcher, SharedSearcher};
