//! Input and output shapes of [`ChineseTokenizer::call`].
//!
//! A call takes either one text unit or a batch of them. A text unit is a
//! string, a byte sequence decoded with the tokenizer's encoding, or a value
//! of some other type kept only so it can be rejected.
//!
//! [`ChineseTokenizer::call`]: super::chinese::ChineseTokenizer::call

use serde::Serialize;
use serde_json::Value;

use crate::analysis::segmenter::dictionary::json_type_name;
use crate::analysis::token::Token;

/// One unit of text to tokenize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextUnit {
    Text(String),
    Bytes(Vec<u8>),
    /// A value that is neither text nor bytes, described by its type name.
    Unsupported(String),
}

impl From<&str> for TextUnit {
    fn from(text: &str) -> Self {
        TextUnit::Text(text.to_string())
    }
}

impl From<String> for TextUnit {
    fn from(text: String) -> Self {
        TextUnit::Text(text)
    }
}

impl From<&String> for TextUnit {
    fn from(text: &String) -> Self {
        TextUnit::Text(text.clone())
    }
}

impl From<Vec<u8>> for TextUnit {
    fn from(bytes: Vec<u8>) -> Self {
        TextUnit::Bytes(bytes)
    }
}

impl From<&[u8]> for TextUnit {
    fn from(bytes: &[u8]) -> Self {
        TextUnit::Bytes(bytes.to_vec())
    }
}

impl From<Value> for TextUnit {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => TextUnit::Text(text),
            other => TextUnit::Unsupported(json_type_name(&other).to_string()),
        }
    }
}

/// A single text unit or a batch of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenizerInput {
    Single(TextUnit),
    Batch(Vec<TextUnit>),
}

impl TokenizerInput {
    /// A single byte sequence.
    pub fn bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        TokenizerInput::Single(TextUnit::Bytes(bytes.into()))
    }

    /// A batch built from anything convertible to text units.
    pub fn batch<I, T>(units: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextUnit>,
    {
        TokenizerInput::Batch(units.into_iter().map(Into::into).collect())
    }
}

impl From<TextUnit> for TokenizerInput {
    fn from(unit: TextUnit) -> Self {
        TokenizerInput::Single(unit)
    }
}

impl From<&str> for TokenizerInput {
    fn from(text: &str) -> Self {
        TokenizerInput::Single(text.into())
    }
}

impl From<String> for TokenizerInput {
    fn from(text: String) -> Self {
        TokenizerInput::Single(text.into())
    }
}

impl From<Vec<TextUnit>> for TokenizerInput {
    fn from(units: Vec<TextUnit>) -> Self {
        TokenizerInput::Batch(units)
    }
}

impl From<Vec<&str>> for TokenizerInput {
    fn from(texts: Vec<&str>) -> Self {
        TokenizerInput::batch(texts)
    }
}

impl From<Vec<String>> for TokenizerInput {
    fn from(texts: Vec<String>) -> Self {
        TokenizerInput::batch(texts)
    }
}

/// JSON arrays become batches, anything else a single unit.
impl From<Value> for TokenizerInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => TokenizerInput::batch(items),
            other => TokenizerInput::Single(other.into()),
        }
    }
}

/// Result of a call: one token list, or one list per surviving batch unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenizerOutput {
    Tokens(Vec<Token>),
    Batch(Vec<Vec<Token>>),
}

impl TokenizerOutput {
    /// The token list of a single-unit call.
    pub fn into_tokens(self) -> Option<Vec<Token>> {
        match self {
            TokenizerOutput::Tokens(tokens) => Some(tokens),
            TokenizerOutput::Batch(_) => None,
        }
    }

    /// The token lists of a batch call.
    pub fn into_batch(self) -> Option<Vec<Vec<Token>>> {
        match self {
            TokenizerOutput::Tokens(_) => None,
            TokenizerOutput::Batch(lists) => Some(lists),
        }
    }

    /// Token texts as one list per unit, whatever the call shape.
    pub fn texts(&self) -> Vec<Vec<String>> {
        let to_texts =
            |tokens: &Vec<Token>| -> Vec<String> { tokens.iter().map(|t| t.text.clone()).collect() };
        match self {
            TokenizerOutput::Tokens(tokens) => vec![to_texts(tokens)],
            TokenizerOutput::Batch(lists) => lists.iter().map(to_texts).collect(),
        }
    }
}
