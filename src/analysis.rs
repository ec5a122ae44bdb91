//! Text analysis for Chinese.
//!
//! This module provides the pieces the Chinese tokenizer is assembled from:
//! character filters, word segmenters, token filters and the tokenizer itself.

pub mod char_filter;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
