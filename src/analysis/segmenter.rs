//! Word segmentation backends.
//!
//! A [`Segmenter`] turns a span of text into a stream of word tokens using a
//! third-party engine plus a user dictionary and vocabulary merged into the
//! engine at construction time.
//!
//! # Available Segmenters
//!
//! - [`jieba::JiebaSegmenter`] - jieba-rs engine (requires the `jieba` feature)
//! - [`lindera::LinderaSegmenter`] - Lindera with CC-CEDICT and a custom
//!   dictionary (requires the `lindera` feature)
//!
//! Backends are usually built by name through [`registry::SegmenterRegistry`].
//!
//! # Examples
//!
//! ```no_run
//! use zhseg::analysis::segmenter::{SegmentOptions, Segmenter, SegmenterSettings};
//! use zhseg::analysis::segmenter::jieba::JiebaSegmenter;
//!
//! let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();
//! let words: Vec<_> = segmenter
//!     .segment("我们买了交换机", &SegmentOptions::default())
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert!(!words.is_empty());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{Result, ZhsegError};

pub mod custom_dictionary;
pub mod dictionary;
#[cfg(feature = "jieba")]
pub mod jieba;
#[cfg(feature = "lindera")]
pub mod lindera;
pub mod registry;

use dictionary::VocabEntry;

/// Call-site options forwarded to the active segmenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Attach part-of-speech tags to the produced tokens.
    pub tag: bool,

    /// Exhaustive mode producing overlapping candidate words, where supported.
    pub cut_all: bool,

    /// Use the statistical model for out-of-dictionary sequences, where supported.
    #[serde(alias = "HMM")]
    pub hmm: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            tag: false,
            cut_all: false,
            hmm: true,
        }
    }
}

impl SegmentOptions {
    /// Options requesting tagged output.
    pub fn tagged() -> Self {
        SegmentOptions {
            tag: true,
            ..Default::default()
        }
    }
}

/// Dictionary inputs shared by every backend.
///
/// Whether the user dictionary exists is decided once, when the settings are
/// created, and is not re-checked later.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmenterSettings {
    user_dict_path: Option<PathBuf>,
    vocab: Vec<VocabEntry>,
    user_dict_exists: bool,
}

impl SegmenterSettings {
    /// Create settings from an optional dictionary path and a vocabulary.
    pub fn new(user_dict_path: Option<PathBuf>, vocab: Vec<VocabEntry>) -> Self {
        let user_dict_exists = user_dict_path.as_deref().is_some_and(Path::exists);
        SegmenterSettings {
            user_dict_path,
            vocab,
            user_dict_exists,
        }
    }

    /// Settings with only a user dictionary.
    pub fn with_user_dict<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(Some(path.into()), Vec::new())
    }

    /// Settings with only a vocabulary.
    pub fn with_vocab(vocab: Vec<VocabEntry>) -> Self {
        Self::new(None, vocab)
    }

    /// The configured user dictionary path, if any.
    pub fn user_dict_path(&self) -> Option<&Path> {
        self.user_dict_path.as_deref()
    }

    /// The supplementary vocabulary.
    pub fn vocab(&self) -> &[VocabEntry] {
        &self.vocab
    }

    /// True iff a path was supplied and the file existed when the settings were built.
    pub fn has_user_dictionary(&self) -> bool {
        self.user_dict_exists
    }
}

/// Trait for word segmenters.
///
/// Implementations must be usable from several threads at once: `segment`
/// only reads engine state.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into a fresh stream of words.
    fn segment<'a>(&'a self, text: &'a str, options: &SegmentOptions)
    -> Result<TokenStream<'a>>;

    /// The dictionary inputs this segmenter was built from.
    fn settings(&self) -> &SegmenterSettings;

    /// True iff a user dictionary path was supplied and existed at construction.
    fn has_user_dictionary(&self) -> bool {
        self.settings().has_user_dictionary()
    }

    /// Get the name of this segmenter (registry name).
    fn name(&self) -> &'static str;
}

/// The segmentation engines this crate knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Jieba,
    Lindera,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Jieba, BackendKind::Lindera];

    /// Registry name of the backend.
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Jieba => "jieba",
            BackendKind::Lindera => "lindera",
        }
    }

    /// Cargo feature that compiles the backend in.
    pub fn feature(self) -> &'static str {
        match self {
            BackendKind::Jieba => "jieba",
            BackendKind::Lindera => "lindera",
        }
    }

    /// Whether the engine is compiled into this build.
    pub fn is_available(self) -> bool {
        match self {
            BackendKind::Jieba => cfg!(feature = "jieba"),
            BackendKind::Lindera => cfg!(feature = "lindera"),
        }
    }

    /// The error reported when this engine is missing.
    pub fn unavailable(self) -> ZhsegError {
        ZhsegError::backend_unavailable(
            self.name(),
            format!(
                "rebuild zhseg with `--features {}` to enable this segmenter",
                self.feature()
            ),
        )
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = ZhsegError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jieba" | "jieba_segment" => Ok(BackendKind::Jieba),
            "lindera" | "lindera_segment" => Ok(BackendKind::Lindera),
            other => Err(ZhsegError::config(format!("Unknown segmenter '{other}'"))),
        }
    }
}

/// Check that the engine behind `kind` is compiled in.
///
/// Backend constructors call this before doing anything else.
pub fn probe_backend(kind: BackendKind) -> Result<()> {
    if kind.is_available() {
        Ok(())
    } else {
        Err(kind.unavailable())
    }
}
