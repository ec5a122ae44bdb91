//! Regex-based text splitting.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ZhsegError};

/// Splits text into the gaps between matches of a pattern.
///
/// The pattern is compiled case-insensitive and multi-line. Empty gaps are
/// dropped, so leading or trailing separators produce no chunks.
#[derive(Clone, Debug)]
pub struct RegexSplitter {
    pattern: Regex,
}

impl RegexSplitter {
    /// Compile a new splitter.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|e| ZhsegError::config(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexSplitter { pattern })
    }

    /// Get the regex pattern used by this splitter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Split `text` into non-empty chunks, in order.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.split(text).filter(|chunk| !chunk.is_empty())
    }
}
