//! Text analysis for the inverted index.
//!
//! Field values are split into [`token::Token`]s by a
//! [`tokenizer::Tokenizer`] before they are case-folded and inserted into
//! the posting lists of the indexed searcher.

pub mod token;
pub mod tokenizer;
