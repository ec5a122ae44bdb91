//! Tokenizers built on top of word segmenters.
//!
//! - [`chinese::ChineseTokenizer`] - Punctuation removal, splitting,
//!   segmentation, lowercasing and filtering of Chinese text
//! - [`regex::RegexSplitter`] - Splits text on a regular expression
//!
//! # Examples
//!
//! ```no_run
//! use zhseg::analysis::tokenizer::chinese::ChineseTokenizer;
//!
//! let tokenizer = ChineseTokenizer::new().unwrap();
//! let tokens = tokenizer.tokenize("学习python， 当上程序员").unwrap();
//! assert!(tokens.contains(&"python".to_string()));
//! ```

pub mod chinese;
pub mod input;
pub mod regex;
