//! Configuration for segmenters and the Chinese tokenizer.
//!
//! Configuration is plain serde data, usually read from JSON:
//!
//! ```
//! use zhseg::config::{Toggle, TokenizerConfig};
//!
//! let config = TokenizerConfig::from_json_str(r#"{
//!     "segment": {"kind": "jieba", "vocab": ["白富美", {"word": "程序员", "freq": "10", "tag": "n"}]},
//!     "stopwords": ["的"],
//!     "alphas_only": false
//! }"#).unwrap();
//!
//! assert_eq!(config.segment.vocab.len(), 2);
//! assert_eq!(config.lowercase, Toggle::ForceTrue);
//! assert_eq!(config.alphas_only, Toggle::ForceFalse);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::punctuation::DEFAULT_PUNCTUATION;
use crate::analysis::segmenter::SegmenterSettings;
use crate::analysis::segmenter::dictionary::VocabEntry;
use crate::error::Result;

/// Default character encoding for byte input.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Default split pattern applied after punctuation removal.
pub const DEFAULT_SPLIT_PATTERN: &str = r"\s+";

/// Default segmenter name.
pub const DEFAULT_SEGMENTER: &str = "jieba";

/// A three-valued flag: forced on, forced off, or deferred to the call site.
///
/// In JSON, `true`/`false` force the value and `null` means [`Toggle::Inherit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Toggle {
    ForceTrue,
    ForceFalse,
    #[default]
    Inherit,
}

impl Toggle {
    /// Resolve against the call-site default.
    pub fn resolve(self, call_site_default: bool) -> bool {
        match self {
            Toggle::ForceTrue => true,
            Toggle::ForceFalse => false,
            Toggle::Inherit => call_site_default,
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Toggle::ForceTrue
        } else {
            Toggle::ForceFalse
        }
    }
}

impl From<Option<bool>> for Toggle {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Toggle::Inherit, Toggle::from)
    }
}

impl From<Toggle> for Option<bool> {
    fn from(value: Toggle) -> Self {
        match value {
            Toggle::ForceTrue => Some(true),
            Toggle::ForceFalse => Some(false),
            Toggle::Inherit => None,
        }
    }
}

/// Segmenter selection and dictionary inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Registry name of the segmenter.
    #[serde(alias = "class_name")]
    pub kind: String,

    /// Optional user dictionary file.
    pub user_dict_path: Option<PathBuf>,

    /// Supplementary vocabulary, applied after the user dictionary.
    pub vocab: Vec<VocabEntry>,

    /// Lindera dictionary URI (lindera only).
    pub dict_uri: Option<String>,

    /// Lindera segmentation mode (lindera only).
    pub mode: Option<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            kind: DEFAULT_SEGMENTER.to_string(),
            user_dict_path: None,
            vocab: Vec::new(),
            dict_uri: None,
            mode: None,
        }
    }
}

impl SegmenterConfig {
    /// Dictionary inputs for the backend constructor.
    ///
    /// Each call re-checks whether the user dictionary exists.
    pub fn settings(&self) -> SegmenterSettings {
        SegmenterSettings::new(self.user_dict_path.clone(), self.vocab.clone())
    }
}

/// Tokenizer configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Segmenter to build.
    pub segment: SegmenterConfig,

    /// Initial stop words.
    pub stopwords: Vec<String>,

    /// Encoding label used to decode byte input.
    pub encoding: String,

    /// Characters replaced by a space before splitting.
    pub re_remove_str: String,

    /// Regular expression the translated text is split on.
    pub re_split_str: String,

    /// Lowercase tokens.
    pub lowercase: Toggle,

    /// Keep only alphabetic tokens.
    pub alphas_only: Toggle,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            segment: SegmenterConfig::default(),
            stopwords: Vec::new(),
            encoding: DEFAULT_ENCODING.to_string(),
            re_remove_str: DEFAULT_PUNCTUATION.to_string(),
            re_split_str: DEFAULT_SPLIT_PATTERN.to_string(),
            lowercase: Toggle::ForceTrue,
            alphas_only: Toggle::Inherit,
        }
    }
}

impl TokenizerConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
