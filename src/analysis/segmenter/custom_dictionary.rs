//! Live custom dictionary for dictionary-augmented segmentation.
//!
//! Each word maps to one or more `(nature, frequency)` pairs parsed from an
//! attribute string such as `"n 10"`, `"10 n"` or `"v 3 n 2"`. Integer fields
//! are frequencies and attach to the nearest nature; the rest are natures.

use ahash::AHashMap;

/// Nature given to custom words declared without one.
pub const DEFAULT_NATURE: &str = "nz";

/// Frequency given to custom words declared without one.
pub const DEFAULT_FREQUENCY: u32 = 1;

/// Natures and frequencies of one custom word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordAttribute {
    natures: Vec<(String, u32)>,
}

impl WordAttribute {
    /// Parse an attribute string.
    pub fn parse(attrs: &str) -> Self {
        let mut natures: Vec<(String, Option<u32>)> = Vec::new();
        let mut pending: Option<u32> = None;

        for field in attrs.split_whitespace() {
            match field.parse::<u32>() {
                Ok(freq) => match natures.last_mut() {
                    Some((_, slot)) if slot.is_none() => *slot = Some(freq),
                    _ => pending = Some(freq),
                },
                Err(_) => natures.push((field.to_string(), pending.take())),
            }
        }

        if natures.is_empty() {
            return WordAttribute {
                natures: vec![(
                    DEFAULT_NATURE.to_string(),
                    pending.unwrap_or(DEFAULT_FREQUENCY),
                )],
            };
        }

        WordAttribute {
            natures: natures
                .into_iter()
                .map(|(nature, freq)| (nature, freq.unwrap_or(DEFAULT_FREQUENCY)))
                .collect(),
        }
    }

    /// The primary nature.
    pub fn nature(&self) -> &str {
        self.natures
            .first()
            .map(|(nature, _)| nature.as_str())
            .unwrap_or(DEFAULT_NATURE)
    }

    /// Frequency of the primary nature.
    pub fn frequency(&self) -> u32 {
        self.natures
            .first()
            .map(|(_, freq)| *freq)
            .unwrap_or(DEFAULT_FREQUENCY)
    }

    /// Sum of the frequencies of all natures.
    pub fn total_frequency(&self) -> u64 {
        self.natures.iter().map(|(_, freq)| u64::from(*freq)).sum()
    }

    /// All `(nature, frequency)` pairs in declaration order.
    pub fn natures(&self) -> &[(String, u32)] {
        &self.natures
    }
}

impl Default for WordAttribute {
    fn default() -> Self {
        WordAttribute {
            natures: vec![(DEFAULT_NATURE.to_string(), DEFAULT_FREQUENCY)],
        }
    }
}

/// Word → attribute map with the longest word length tracked in characters.
#[derive(Clone, Debug, Default)]
pub struct CustomDictionary {
    words: AHashMap<String, WordAttribute>,
    max_chars: usize,
}

impl CustomDictionary {
    pub fn new() -> Self {
        CustomDictionary::default()
    }

    /// Add a word with default attributes. Re-adding a word replaces it.
    pub fn add(&mut self, word: &str) {
        self.insert(word, WordAttribute::default());
    }

    /// Add a word with an attribute string. Re-adding a word replaces it.
    pub fn add_with_attrs(&mut self, word: &str, attrs: &str) {
        self.insert(word, WordAttribute::parse(attrs));
    }

    fn insert(&mut self, word: &str, attribute: WordAttribute) {
        if word.is_empty() {
            return;
        }
        self.max_chars = self.max_chars.max(word.chars().count());
        self.words.insert(word.to_string(), attribute);
    }

    pub fn get(&self, word: &str) -> Option<&WordAttribute> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Length of the longest word, in characters.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
