//! Lindera-based segmenter with a live custom dictionary.
//!
//! Text is first segmented by Lindera (CC-CEDICT by default). Consecutive
//! Lindera tokens whose concatenation is a custom word are then merged,
//! longest match first, and tagged with the custom word's nature.
//!
//! The custom dictionary belongs to this segmenter instance. It is shared with
//! callers through [`LinderaSegmenter::dictionary`] and guarded by a lock, so
//! concurrent segmentation is safe while writes are serialized.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::Arc;

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter as LinderaEngine;
use log::{debug, warn};
use parking_lot::RwLock;

use crate::analysis::segmenter::custom_dictionary::CustomDictionary;
use crate::analysis::segmenter::dictionary::{VocabEntry, load_user_dictionary};
use crate::analysis::segmenter::{
    BackendKind, SegmentOptions, Segmenter, SegmenterSettings, probe_backend,
};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, ZhsegError};

/// Dictionary used when none is configured.
pub const DEFAULT_DICT_URI: &str = "embedded://cc-cedict";

/// Segmentation mode used when none is configured.
pub const DEFAULT_MODE: &str = "normal";

/// Tag for engine tokens without a part-of-speech detail.
const UNKNOWN_TAG: &str = "x";

/// Segmenter backed by Lindera plus a custom dictionary.
pub struct LinderaSegmenter {
    settings: SegmenterSettings,
    inner: LinderaEngine,
    dictionary: Arc<RwLock<CustomDictionary>>,
}

impl LinderaSegmenter {
    /// Create a segmenter with the default dictionary and mode.
    pub fn new(settings: SegmenterSettings) -> Result<Self> {
        Self::with_dictionary(settings, DEFAULT_DICT_URI, DEFAULT_MODE)
    }

    /// Create a segmenter with an explicit Lindera dictionary URI and mode.
    pub fn with_dictionary(settings: SegmenterSettings, dict_uri: &str, mode_str: &str) -> Result<Self> {
        probe_backend(BackendKind::Lindera)?;

        let mode = Mode::from_str(mode_str)
            .map_err(|e| ZhsegError::config(format!("Invalid mode '{mode_str}': {e}")))?;
        let dict = load_dictionary(dict_uri)
            .map_err(|e| ZhsegError::dictionary(format!("Failed to load dictionary: {e}")))?;
        let inner = LinderaEngine::new(mode, dict, None);

        let mut dictionary = CustomDictionary::new();

        if settings.has_user_dictionary() {
            if let Some(path) = settings.user_dict_path() {
                for entry in load_user_dictionary(path)? {
                    match entry.attrs.as_deref() {
                        Some(attrs) => dictionary.add_with_attrs(&entry.word, attrs),
                        None => dictionary.add(&entry.word),
                    }
                }
            }
        }

        for entry in settings.vocab() {
            match entry {
                VocabEntry::Word(word) => dictionary.add(word),
                VocabEntry::Record(record) => {
                    let Some(word) = record.word() else {
                        debug!("skipping vocabulary record without a word");
                        continue;
                    };
                    match record.joined_attrs() {
                        Some(attrs) => dictionary.add_with_attrs(word, &attrs),
                        None => dictionary.add(word),
                    }
                }
                VocabEntry::Unsupported(_) => warn!(
                    "only string or dictionary is needed! type {} is found!",
                    entry.kind()
                ),
            }
        }

        debug!("lindera segmenter ready with {} custom words", dictionary.len());

        Ok(LinderaSegmenter {
            settings,
            inner,
            dictionary: Arc::new(RwLock::new(dictionary)),
        })
    }

    /// The underlying Lindera segmenter.
    pub fn raw(&self) -> &LinderaEngine {
        &self.inner
    }

    /// Shared handle to the live custom dictionary.
    pub fn dictionary(&self) -> Arc<RwLock<CustomDictionary>> {
        Arc::clone(&self.dictionary)
    }

    /// Add a word to the custom dictionary, with an optional attribute string.
    pub fn add_word(&self, word: &str, attrs: Option<&str>) {
        let mut dictionary = self.dictionary.write();
        match attrs {
            Some(attrs) => dictionary.add_with_attrs(word, attrs),
            None => dictionary.add(word),
        }
    }

    fn engine_words(&self, text: &str) -> Result<Vec<(String, String)>> {
        let tokens = self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| ZhsegError::analysis(format!("Failed to segment text: {e}")))?;

        Ok(tokens
            .into_iter()
            .map(|mut token| {
                let tag = token
                    .details()
                    .first()
                    .filter(|detail| !detail.is_empty() && **detail != "*")
                    .map(|detail| detail.to_string())
                    .unwrap_or_else(|| UNKNOWN_TAG.to_string());
                (token.surface.to_string(), tag)
            })
            .collect())
    }
}

/// Merge consecutive words into the longest custom word they spell.
fn combine(words: Vec<(String, String)>, dictionary: &CustomDictionary) -> Vec<Token> {
    if dictionary.is_empty() {
        return words
            .into_iter()
            .map(|(word, tag)| Token::new(word).with_tag(tag))
            .collect();
    }

    let mut tokens = Vec::with_capacity(words.len());
    let mut start = 0;

    while start < words.len() {
        let mut candidate = String::new();
        let mut chars = 0;
        let mut best: Option<(usize, String, &str)> = None;

        for (end, (word, _)) in words.iter().enumerate().skip(start) {
            chars += word.chars().count();
            if chars > dictionary.max_chars() {
                break;
            }
            candidate.push_str(word);
            if let Some(attribute) = dictionary.get(&candidate) {
                best = Some((end + 1, candidate.clone(), attribute.nature()));
            }
        }

        match best {
            Some((end, text, nature)) => {
                tokens.push(Token::new(text).with_tag(nature));
                start = end;
            }
            None => {
                let (word, tag) = &words[start];
                tokens.push(Token::new(word.as_str()).with_tag(tag.as_str()));
                start += 1;
            }
        }
    }

    tokens
}

impl Segmenter for LinderaSegmenter {
    fn segment<'a>(
        &'a self,
        text: &'a str,
        options: &SegmentOptions,
    ) -> Result<TokenStream<'a>> {
        let words = self.engine_words(text)?;
        let tokens = {
            let dictionary = self.dictionary.read();
            combine(words, &dictionary)
        };

        if options.tag {
            Ok(tokens.into_token_stream())
        } else {
            Ok(Box::new(tokens.into_iter().map(Token::untagged)))
        }
    }

    fn settings(&self) -> &SegmenterSettings {
        &self.settings
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
