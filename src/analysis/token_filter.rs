//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a segmenter and return a new stream.
//! They never reorder tokens; they either rewrite or drop them.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphabetic::AlphabeticFilter`] - Drops blank and, optionally, non-alphabetic tokens
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! ```
//! use zhseg::analysis::token::Token;
//! use zhseg::analysis::token_filter::Filter;
//! use zhseg::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Python"), Token::new("程序员")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "python");
//! assert_eq!(filtered[1].text, "程序员");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod lowercase;
pub mod stop;
