//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`delimiter::DelimiterTokenizer`] - Splits on a fixed set of delimiter
//!   characters (space, `/` and `.` by default), which suits file paths and
//!   command lines.
//!
//! # Examples
//!
//! ```
//! use pickline::analysis::tokenizer::Tokenizer;
//! use pickline::analysis::tokenizer::delimiter::DelimiterTokenizer;
//!
//! let tokenizer = DelimiterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("src/lib.rs").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` because the searcher holding a
/// tokenizer is shared between the ingestion and interaction threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Tokens keep the original case; the index folds case itself.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod delimiter;
