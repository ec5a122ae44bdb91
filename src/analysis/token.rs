//! Token types produced by the segmentation pipeline.
//!
//! A [`Token`] is a normalized word, optionally paired with the part-of-speech
//! tag reported by the segmentation backend when tagging was requested.
//!
//! # Examples
//!
//! ```
//! use zhseg::analysis::token::Token;
//!
//! let token = Token::new("程序员").with_tag("n");
//! assert_eq!(token.text, "程序员");
//! assert_eq!(token.tag.as_deref(), Some("n"));
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A single word produced by a segmenter and carried through the filters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Part-of-speech tag, present only when tagging was requested
    pub tag: Option<String>,
}

impl Token {
    /// Create a new untagged token.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            tag: None,
        }
    }

    /// Attach a part-of-speech tag.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Replace the text, keeping the tag.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Drop the tag.
    pub fn untagged(mut self) -> Self {
        self.tag = None;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Untagged tokens serialize as plain strings, tagged ones as `[word, tag]`.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.tag {
            None => serializer.serialize_str(&self.text),
            Some(tag) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(&self.text)?;
                tuple.serialize_element(tag)?;
                tuple.end()
            }
        }
    }
}

/// A lazily produced sequence of tokens.
///
/// Every segmentation call returns a fresh stream, so a stream may be dropped
/// after partial consumption without affecting later calls.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream<'a> {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'a>;
}

impl<'a> IntoTokenStream<'a> for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello");
        assert_eq!(token.text, "hello");
        assert!(token.tag.is_none());
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_tagging() {
        let token = Token::new("学习").with_tag("v");
        assert_eq!(token.tag.as_deref(), Some("v"));
        assert_eq!(format!("{token}"), "学习/v");

        let token = token.with_text("study").untagged();
        assert_eq!(format!("{token}"), "study");
    }

    #[test]
    fn test_token_serialization() {
        let plain = serde_json::to_string(&Token::new("python")).unwrap();
        assert_eq!(plain, "\"python\"");

        let tagged = serde_json::to_string(&Token::new("程序员").with_tag("n")).unwrap();
        assert_eq!(tagged, "[\"程序员\",\"n\"]");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello"), Token::new("world")];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
