//! Chinese tokenizer.
//!
//! Turns a text unit (or a batch of them) into filtered token lists:
//!
//! 1. Punctuation characters are replaced by spaces
//! 2. The text is split on the split pattern (whitespace by default)
//! 3. Each chunk is segmented by the active segmenter
//! 4. Tokens are lowercased, unless disabled
//! 5. Blank tokens, stop words and (by default) non-alphabetic tokens are dropped
//!
//! A call never changes tokenizer state, so one tokenizer can serve several
//! threads. Stop word updates take `&mut self`.
//!
//! # Examples
//!
//! ```no_run
//! use zhseg::analysis::tokenizer::chinese::ChineseTokenizer;
//!
//! let mut tokenizer = ChineseTokenizer::new().unwrap();
//! tokenizer.add_stopword("当上");
//!
//! let tokens = tokenizer.tokenize("学习Python，当上程序员！").unwrap();
//! assert!(tokens.contains(&"python".to_string()));
//! assert!(!tokens.contains(&"当上".to_string()));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use encoding_rs::Encoding;
use log::warn;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::segmenter::registry::{SegmenterRegistry, default_registry};
use crate::analysis::segmenter::{SegmentOptions, Segmenter};
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::alphabetic::AlphabeticFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::input::{TextUnit, TokenizerInput, TokenizerOutput};
use crate::analysis::tokenizer::regex::RegexSplitter;
use crate::config::{
    DEFAULT_ENCODING, DEFAULT_SPLIT_PATTERN, SegmenterConfig, Toggle, TokenizerConfig,
};
use crate::error::{Result, ZhsegError};

/// Call-site options.
///
/// `lowercase` and `alphas_only` are the defaults used when the tokenizer's
/// own setting is [`Toggle::Inherit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallOptions {
    pub segment: SegmentOptions,
    pub lowercase: bool,
    pub alphas_only: bool,
}

impl Default for CallOptions {
    fn default() -> Self {
        CallOptions {
            segment: SegmentOptions::default(),
            lowercase: true,
            alphas_only: true,
        }
    }
}

impl CallOptions {
    pub fn with_segment(mut self, segment: SegmentOptions) -> Self {
        self.segment = segment;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_alphas_only(mut self, alphas_only: bool) -> Self {
        self.alphas_only = alphas_only;
        self
    }
}

/// Tokenizer for Chinese and mixed Chinese/Latin text.
pub struct ChineseTokenizer {
    segmenter: Arc<dyn Segmenter>,
    stop_filter: StopFilter,
    encoding: &'static Encoding,
    punctuation: PunctuationCharFilter,
    splitter: RegexSplitter,
    lowercase: Toggle,
    alphas_only: Toggle,
}

impl fmt::Debug for ChineseTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChineseTokenizer")
            .field("segmenter", &self.segmenter.name())
            .field("stopwords", &self.stop_filter.words())
            .field("encoding", &self.encoding.name())
            .field("punctuation", &self.punctuation.chars())
            .field("split_pattern", &self.splitter.pattern())
            .field("lowercase", &self.lowercase)
            .field("alphas_only", &self.alphas_only)
            .finish()
    }
}

impl ChineseTokenizer {
    /// Create a tokenizer with the default configuration and segmenter.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a tokenizer.
    pub fn builder() -> ChineseTokenizerBuilder {
        ChineseTokenizerBuilder::default()
    }

    /// Create a tokenizer from configuration, using the default registry.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        Self::from_config_with_registry(config, default_registry())
    }

    /// Create a tokenizer from configuration, resolving the segmenter in `registry`.
    pub fn from_config_with_registry(
        config: &TokenizerConfig,
        registry: &SegmenterRegistry,
    ) -> Result<Self> {
        let segmenter = registry.create(&config.segment)?;
        Self::builder()
            .segmenter(segmenter)
            .stopwords(config.stopwords.clone())
            .encoding(&config.encoding)
            .punctuation(&config.re_remove_str)
            .split_pattern(&config.re_split_str)
            .lowercase(config.lowercase)
            .alphas_only(config.alphas_only)
            .build()
    }

    /// The active segmenter.
    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }

    /// The current stop words, in insertion order.
    pub fn stopwords(&self) -> &[String] {
        self.stop_filter.words()
    }

    /// Name of the encoding used for byte input.
    pub fn encoding(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn lowercase(&self) -> Toggle {
        self.lowercase
    }

    pub fn alphas_only(&self) -> Toggle {
        self.alphas_only
    }

    /// Append a stop word unless it is already present.
    pub fn add_stopword<S: Into<String>>(&mut self, word: S) {
        self.stop_filter.add_word(word);
    }

    /// Replace all stop words.
    pub fn set_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_filter.set_words(words);
    }

    /// Tokenize one unit or a batch with default call options.
    pub fn call<I: Into<TokenizerInput>>(&self, input: I) -> Result<TokenizerOutput> {
        self.call_with(input, &CallOptions::default())
    }

    /// Tokenize one unit or a batch.
    ///
    /// A single unit that is not text or decodable bytes fails with
    /// `InvalidInputType`. In a batch such units are skipped, so the output
    /// holds one list per valid unit, in input order.
    pub fn call_with<I: Into<TokenizerInput>>(
        &self,
        input: I,
        options: &CallOptions,
    ) -> Result<TokenizerOutput> {
        match input.into() {
            TokenizerInput::Single(unit) => {
                let text = self.decode(&unit)?;
                Ok(TokenizerOutput::Tokens(self.process(&text, options)?))
            }
            TokenizerInput::Batch(units) => {
                let mut lists = Vec::with_capacity(units.len());
                for (index, unit) in units.iter().enumerate() {
                    let text = match self.decode(unit) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!("skipping batch item {index}: {e}");
                            continue;
                        }
                    };
                    lists.push(self.process(&text, options)?);
                }
                Ok(TokenizerOutput::Batch(lists))
            }
        }
    }

    /// Tokenize a single text into token strings.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.process(text, &CallOptions::default())?;
        Ok(tokens.into_iter().map(|t| t.text).collect())
    }

    /// Tokenize a batch of texts into token strings, one list per text.
    pub fn tokenize_batch<I, S>(&self, texts: I) -> Result<Vec<Vec<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }

    /// Decode a text unit with the tokenizer's encoding.
    pub fn decode<'a>(&self, unit: &'a TextUnit) -> Result<Cow<'a, str>> {
        match unit {
            TextUnit::Text(text) => Ok(Cow::Borrowed(text.as_str())),
            TextUnit::Bytes(bytes) => self
                .encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or_else(|| {
                    ZhsegError::invalid_input_type(format!(
                        "bytes are not valid {}",
                        self.encoding.name()
                    ))
                }),
            TextUnit::Unsupported(kind) => Err(ZhsegError::invalid_input_type(format!(
                "need str|bytes input, but found {kind}"
            ))),
        }
    }

    fn process(&self, text: &str, options: &CallOptions) -> Result<Vec<Token>> {
        let translated = self.punctuation.filter(text);
        let lowercase = self.lowercase.resolve(options.lowercase);
        let shape_filter = AlphabeticFilter::new(self.alphas_only.resolve(options.alphas_only));

        let mut tokens = Vec::new();
        for chunk in self.splitter.split(&translated) {
            let mut stream = self.segmenter.segment(chunk, &options.segment)?;
            if lowercase {
                stream = LowercaseFilter.filter(stream)?;
            }
            stream = shape_filter.filter(stream)?;
            stream = self.stop_filter.filter(stream)?;
            tokens.extend(stream);
        }

        Ok(tokens)
    }
}

/// Builder for [`ChineseTokenizer`].
#[derive(Default)]
pub struct ChineseTokenizerBuilder {
    segmenter: Option<Arc<dyn Segmenter>>,
    stopwords: Vec<String>,
    encoding: Option<String>,
    punctuation: Option<String>,
    split_pattern: Option<String>,
    lowercase: Option<Toggle>,
    alphas_only: Toggle,
}

impl ChineseTokenizerBuilder {
    /// Use this segmenter instead of building the default one.
    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Encoding label for byte input (`utf-8`, `gbk`, `gb18030`, ...).
    pub fn encoding<S: Into<String>>(mut self, encoding: S) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Characters replaced by a space before splitting.
    pub fn punctuation<S: Into<String>>(mut self, chars: S) -> Self {
        self.punctuation = Some(chars.into());
        self
    }

    /// Regular expression the translated text is split on.
    pub fn split_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.split_pattern = Some(pattern.into());
        self
    }

    pub fn lowercase<T: Into<Toggle>>(mut self, lowercase: T) -> Self {
        self.lowercase = Some(lowercase.into());
        self
    }

    pub fn alphas_only<T: Into<Toggle>>(mut self, alphas_only: T) -> Self {
        self.alphas_only = alphas_only.into();
        self
    }

    pub fn build(self) -> Result<ChineseTokenizer> {
        let label = self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING);
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ZhsegError::config(format!("Unknown encoding: {label}")))?;

        let splitter = RegexSplitter::new(
            self.split_pattern
                .as_deref()
                .unwrap_or(DEFAULT_SPLIT_PATTERN),
        )?;

        let punctuation = match self.punctuation {
            Some(chars) => PunctuationCharFilter::new(chars),
            None => PunctuationCharFilter::default(),
        };

        let segmenter = match self.segmenter {
            Some(segmenter) => segmenter,
            None => default_registry().create(&SegmenterConfig::default())?,
        };

        Ok(ChineseTokenizer {
            segmenter,
            stop_filter: StopFilter::from_words(self.stopwords),
            encoding,
            punctuation,
            splitter,
            lowercase: self.lowercase.unwrap_or(Toggle::ForceTrue),
            alphas_only: self.alphas_only,
        })
    }
}
