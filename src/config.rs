//! Finder configuration.
//!
//! A single [`FinderConfig`] is built from the command line and handed to
//! the searcher factory, the line-parser factory, the event loop and the
//! output renderer.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::delimiter::DEFAULT_DELIMITERS;
use crate::document::WHOLE_LINE_FIELD;
use crate::document::converter::LineFormat;
use crate::search::factory::{IndexedSearcherConfig, SearcherConfig, SearcherKind};
use crate::search::ranking::SortOrder;

/// Default redraw and clamp interval.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// What to do with a line the configured parser rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Stop ingesting and report the error when the session ends.
    Abort,
    /// Log a warning and drop the line.
    #[default]
    Skip,
}

/// Configuration for one finder session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Format of the input lines.
    pub line_format: LineFormat,
    /// Search strategy.
    pub searcher: SearcherKind,
    /// Ordering of filtered entries.
    pub sort_order: SortOrder,
    /// Display headers replacing the ones the parser derives.
    pub headers: Vec<String>,
    /// Column delimiter for the tabular format.
    pub delimiter: char,
    /// Field printed on selection.
    pub output_column: String,
    /// Template printed on selection when no specific column is requested.
    pub output_template: Option<String>,
    /// Interval of the redraw and clamp tick.
    pub tick_interval: Duration,
    /// Handling of lines that fail to parse.
    pub parse_error_policy: ParseErrorPolicy,
    /// Token delimiters of the indexed searcher.
    pub token_delimiters: Vec<char>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            line_format: LineFormat::default(),
            searcher: SearcherKind::default(),
            sort_order: SortOrder::default(),
            headers: Vec::new(),
            delimiter: ' ',
            output_column: WHOLE_LINE_FIELD.to_string(),
            output_template: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            parse_error_policy: ParseErrorPolicy::default(),
            token_delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

impl FinderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line format.
    pub fn with_line_format(mut self, line_format: LineFormat) -> Self {
        self.line_format = line_format;
        self
    }

    /// Set the search strategy.
    pub fn with_searcher(mut self, searcher: SearcherKind) -> Self {
        self.searcher = searcher;
        self
    }

    /// Set the sort order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Override the display headers.
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the tabular column delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the field printed on selection.
    pub fn with_output_column<S: Into<String>>(mut self, column: S) -> Self {
        self.output_column = column.into();
        self
    }

    /// Set the output template.
    pub fn with_output_template<S: Into<String>>(mut self, template: S) -> Self {
        self.output_template = Some(template.into());
        self
    }

    /// Set the tick interval.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Set the parse error policy.
    pub fn with_parse_error_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.parse_error_policy = policy;
        self
    }

    /// Set the token delimiters of the indexed searcher.
    pub fn with_token_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.token_delimiters = delimiters;
        self
    }

    /// Searcher factory configuration derived from this one.
    pub fn searcher_config(&self) -> SearcherConfig {
        match self.searcher {
            SearcherKind::Indexed => SearcherConfig::Indexed(IndexedSearcherConfig {
                token_delimiters: self.token_delimiters.clone(),
            }),
            SearcherKind::Fuzzy => SearcherConfig::Fuzzy,
        }
    }
}
