//! Lowercase filter implementation.

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts token text to lowercase.
///
/// Tags are left untouched; text without case (CJK) passes through unchanged.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
