//! Factory for creating searcher instances.

use std::sync::Arc;

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::delimiter::{DEFAULT_DELIMITERS, DelimiterTokenizer};
use crate::search::fuzzy::FuzzySearcher;
use crate::search::indexed::IndexedSearcher;
use crate::search::searcher::{Searcher, SharedSearcher};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearcherKind {
    /// Inverted index with exact token matches.
    #[default]
    Indexed,
    /// Linear scan with ordered-subsequence matches.
    Fuzzy,
}

/// Settings for the indexed searcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedSearcherConfig {
    /// Characters that separate tokens.
    pub token_delimiters: Vec<char>,
}

impl Default for IndexedSearcherConfig {
    fn default() -> Self {
        IndexedSearcherConfig {
            token_delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

/// Searcher configuration, one variant per strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearcherConfig {
    /// Inverted-index searcher.
    Indexed(IndexedSearcherConfig),
    /// Fuzzy subsequence searcher.
    Fuzzy,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        SearcherConfig::Indexed(IndexedSearcherConfig::default())
    }
}

impl SearcherConfig {
    /// The strategy this configuration selects.
    pub fn kind(&self) -> SearcherKind {
        match self {
            SearcherConfig::Indexed(_) => SearcherKind::Indexed,
            SearcherConfig::Fuzzy => SearcherKind::Fuzzy,
        }
    }
}

/// Factory for creating searchers.
///
/// Callers only see the [`Searcher`] capability set; the concrete strategy
/// is decided here from the configuration.
///
/// ```
/// use pickline::search::factory::{SearcherConfig, SearcherFactory, SearcherKind};
///
/// let searcher = SearcherFactory::create(SearcherConfig::Fuzzy);
/// assert_eq!(searcher.name(), "fuzzy");
/// assert_eq!(SearcherConfig::default().kind(), SearcherKind::Indexed);
/// ```
pub struct SearcherFactory;

impl SearcherFactory {
    /// Create a new, empty searcher.
    pub fn create(config: SearcherConfig) -> Box<dyn Searcher> {
        match config {
            SearcherConfig::Indexed(indexed) => {
                let tokenizer = DelimiterTokenizer::with_delimiters(indexed.token_delimiters);
                info!(
                    "creating indexed searcher (delimiters: {:?})",
                    tokenizer.delimiters()
                );
                Box::new(IndexedSearcher::with_tokenizer(Arc::new(tokenizer)))
            }
            SearcherConfig::Fuzzy => {
                info!("creating fuzzy searcher");
                Box::new(FuzzySearcher::new())
            }
        }
    }

    /// Create a new, empty searcher wrapped for shared use.
    pub fn create_shared(config: SearcherConfig) -> SharedSearcher {
        SharedSearcher::new(Self::create(config))
    }
}
