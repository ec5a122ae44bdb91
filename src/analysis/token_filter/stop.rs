//! Stop filter implementation.
//!
//! This module provides a filter that removes tokens equal to one of a list of
//! stop words. The list keeps insertion order and never holds duplicates added
//! through [`StopFilter::add_word`].
//!
//! # Examples
//!
//! ```
//! use zhseg::analysis::token::Token;
//! use zhseg::analysis::token_filter::Filter;
//! use zhseg::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["的", "了"]);
//! let tokens = vec![Token::new("我们"), Token::new("的"), Token::new("设备")];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "我们");
//! assert_eq!(result[1].text, "设备");
//! ```

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Membership is exact string equality, checked after any lowercasing done
/// earlier in the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopFilter {
    /// Stop words in insertion order
    stop_words: Vec<String>,
}

impl StopFilter {
    /// Create a new stop filter with no stop words.
    pub fn new() -> Self {
        StopFilter::default()
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// The list is taken as given, duplicates included.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a stop word unless it is already present.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        if !self.is_stop_word(&word) {
            self.stop_words.push(word);
        }
    }

    /// Replace the whole stop word list.
    pub fn set_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }

    /// The stop words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.stop_words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        if self.is_empty() {
            return Ok(tokens);
        }

        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
