//! Shape filter for segmented tokens.
//!
//! Removes tokens that are empty or made only of whitespace and, when
//! `alphas_only` is set, tokens containing any non-alphabetic character.
//!
//! "Alphabetic" is the Unicode `Alphabetic` property, which covers Latin
//! letters as well as CJK ideographs. Digits and punctuation are not
//! alphabetic.
//!
//! # Examples
//!
//! ```
//! use zhseg::analysis::token::Token;
//! use zhseg::analysis::token_filter::Filter;
//! use zhseg::analysis::token_filter::alphabetic::AlphabeticFilter;
//!
//! let filter = AlphabeticFilter::new(true);
//! let tokens = vec![Token::new("学习"), Token::new("2024"), Token::new("python")];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "学习");
//! assert_eq!(result[1].text, "python");
//! ```

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Returns `true` if `text` is non-empty and every character is alphabetic.
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Returns `true` if `text` is non-empty and made only of whitespace.
pub fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

/// A filter dropping blank tokens and, optionally, non-alphabetic ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphabeticFilter {
    alphas_only: bool,
}

impl AlphabeticFilter {
    /// Create a new filter. With `alphas_only` unset only empty and
    /// whitespace tokens are removed.
    pub fn new(alphas_only: bool) -> Self {
        AlphabeticFilter { alphas_only }
    }

    /// Whether non-alphabetic tokens are removed.
    pub fn alphas_only(&self) -> bool {
        self.alphas_only
    }

    /// Check if a token passes this filter.
    pub fn accepts(&self, text: &str) -> bool {
        if text.is_empty() || is_blank(text) {
            return false;
        }
        !self.alphas_only || is_alphabetic(text)
    }
}

impl Filter for AlphabeticFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        let filtered_tokens: Vec<Token> = tokens.filter(|token| self.accepts(&token.text)).collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
