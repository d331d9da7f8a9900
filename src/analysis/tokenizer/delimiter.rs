//! Delimiter tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Characters that separate tokens by default.
pub const DEFAULT_DELIMITERS: [char; 3] = [' ', '/', '.'];

/// A tokenizer that splits text on a fixed set of delimiter characters.
///
/// Runs of delimiters never produce empty tokens.
#[derive(Clone, Debug)]
pub struct DelimiterTokenizer {
    delimiters: Vec<char>,
}

impl Default for DelimiterTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterTokenizer {
    /// Create a tokenizer splitting on space, `/` and `.`.
    pub fn new() -> Self {
        DelimiterTokenizer {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }

    /// Create a tokenizer with a custom delimiter set.
    pub fn with_delimiters<I: IntoIterator<Item = char>>(delimiters: I) -> Self {
        DelimiterTokenizer {
            delimiters: delimiters.into_iter().collect(),
        }
    }

    /// The configured delimiters.
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            if self.is_delimiter(c) {
                if let Some(begin) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[begin..offset],
                        tokens.len(),
                        begin,
                        offset,
                    ));
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(begin) = start {
            tokens.push(Token::with_offsets(
                &text[begin..],
                tokens.len(),
                begin,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "delimiter"
    }
}
