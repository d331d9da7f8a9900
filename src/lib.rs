//! # Pickline
//!
//! An interactive line finder: ingest lines from a pipe or a file listing,
//! filter them with an incremental query, and print the one you pick.
//!
//! ## Features
//!
//! - Plain, tabular and JSON line formats with per-field queries (`field:term`)
//! - Inverted-index search with exact token matches
//! - Fuzzy subsequence search
//! - Ingestion keeps running while you type
//! - Column or template output of the selected entry

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod events;
pub mod query;
pub mod screen;
pub mod search;
pub mod source;

pub mod prelude {
    pub use crate::config::{FinderConfig, ParseErrorPolicy};
    pub use crate::document::{Document, LineFormat};
    pub use crate::error::{PicklineError, Result};
    pub use crate::events::{EventLoop, InputEvent, Notification, SearchState, StateMachine};
    pub use crate::query::parse_query;
    pub use crate::search::{SearcherFactory, SearcherKind, SharedSearcher, SortOrder};
    pub use crate::source::{Ingestor, LineSource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
