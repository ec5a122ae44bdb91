//! # zhseg
//!
//! Chinese word segmentation and tokenization for Rust.
//!
//! ## Features
//!
//! - Pluggable segmentation backends (jieba, lindera) behind one trait
//! - User dictionaries and in-configuration vocabularies
//! - Punctuation removal, lowercasing, stop words and alphabetic filtering
//! - Single-text and batch calls, with byte input in any supported encoding
//!
//! ```no_run
//! use zhseg::prelude::*;
//!
//! let tokenizer = ChineseTokenizer::new()?;
//! let tokens = tokenizer.tokenize("学习python， 当上程序员")?;
//! println!("{tokens:?}");
//! # Ok::<(), zhseg::error::ZhsegError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::segmenter::registry::{SegmenterRegistry, default_registry};
    pub use crate::analysis::segmenter::{
        BackendKind, SegmentOptions, Segmenter, SegmenterSettings, probe_backend,
    };
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::chinese::{CallOptions, ChineseTokenizer};
    pub use crate::analysis::tokenizer::input::{TextUnit, TokenizerInput, TokenizerOutput};
    pub use crate::config::{SegmenterConfig, Toggle, TokenizerConfig};
    pub use crate::error::{Result, ZhsegError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
