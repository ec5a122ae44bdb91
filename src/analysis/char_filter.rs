//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it is split and segmented.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationCharFilter`] - Replaces punctuation marks with spaces

/// Trait for character filters that transform text before segmentation.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;
