//! Punctuation removal by character translation.
//!
//! Every character of the configured set is replaced by a single space, so the
//! translated text has exactly as many code points as the input.
//!
//! # Examples
//!
//! ```
//! use zhseg::analysis::char_filter::CharFilter;
//! use zhseg::analysis::char_filter::punctuation::PunctuationCharFilter;
//!
//! let filter = PunctuationCharFilter::default();
//! assert_eq!(filter.filter("学习python，当上程序员！"), "学习python 当上程序员 ");
//! ```

use ahash::AHashSet;

use super::CharFilter;

/// ASCII and CJK punctuation removed by default.
pub const DEFAULT_PUNCTUATION: &str =
    "!\"#$%&'()*+,-./:;<=>?@[\\]^`{|}~、，；：。？！…（）《》";

/// A char filter mapping each punctuation character to one space.
#[derive(Clone, Debug)]
pub struct PunctuationCharFilter {
    table: AHashSet<char>,
    source: String,
}

impl PunctuationCharFilter {
    /// Create a filter that removes every character of `chars`.
    pub fn new<S: Into<String>>(chars: S) -> Self {
        let source = chars.into();
        let table = source.chars().collect();
        PunctuationCharFilter { table, source }
    }

    /// The character set this filter was built from.
    pub fn chars(&self) -> &str {
        &self.source
    }

    /// Check if `c` is replaced by this filter.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.table.contains(&c)
    }
}

impl Default for PunctuationCharFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| if self.is_punctuation(c) { ' ' } else { c })
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
