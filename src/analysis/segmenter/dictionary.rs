//! User dictionary files and in-configuration vocabularies.
//!
//! A user dictionary file holds one entry per line, either `word` or
//! `word attrs` separated by whitespace. What `attrs` means (frequency,
//! part-of-speech or both) is up to the backend. Blank lines, `#` comments and
//! lines with more than two fields are skipped with a warning.
//!
//! A vocabulary is a list of bare words or `{word, freq?, tag?}` records,
//! usually read from JSON configuration. Anything else is kept as
//! [`VocabEntry::Unsupported`] so backends can warn and skip it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// One parsed user dictionary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictEntry {
    pub word: String,
    pub attrs: Option<String>,
}

impl DictEntry {
    pub fn new<S: Into<String>>(word: S) -> Self {
        DictEntry {
            word: word.into(),
            attrs: None,
        }
    }

    pub fn with_attrs<S: Into<String>, A: Into<String>>(word: S, attrs: A) -> Self {
        DictEntry {
            word: word.into(),
            attrs: Some(attrs.into()),
        }
    }
}

/// Classification of a single user dictionary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictLine {
    Entry(DictEntry),
    /// Empty line or `#` comment.
    Blank,
    /// More than two whitespace-separated fields.
    Malformed,
}

/// Parse one user dictionary line.
pub fn parse_line(line: &str) -> DictLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return DictLine::Blank;
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), None, _) => DictLine::Entry(DictEntry::new(word)),
        (Some(word), Some(attrs), None) => DictLine::Entry(DictEntry::with_attrs(word, attrs)),
        _ => DictLine::Malformed,
    }
}

/// Read every valid entry of a user dictionary.
///
/// The file is closed before this function returns.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<DictEntry>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        match parse_line(&line) {
            DictLine::Entry(entry) => entries.push(entry),
            DictLine::Blank => warn!("skipping blank or comment line {line_no} in user dictionary"),
            DictLine::Malformed => warn!(
                "skipping user dictionary line {line_no}: expected `word` or `word tag`, found {:?}",
                line.trim()
            ),
        }
    }

    Ok(entries)
}

/// Open and read a user dictionary file.
pub fn load_user_dictionary(path: &Path) -> Result<Vec<DictEntry>> {
    let file = File::open(path)?;
    let entries = read_entries(BufReader::new(file))?;
    debug!(
        "read {} entries from user dictionary {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

/// A structured vocabulary record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VocabRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl VocabRecord {
    pub fn new<S: Into<String>>(word: S) -> Self {
        VocabRecord {
            word: Some(word.into()),
            ..Default::default()
        }
    }

    pub fn with_freq<S: Into<String>>(mut self, freq: S) -> Self {
        self.freq = Some(freq.into());
        self
    }

    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The word, if present and non-empty.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref().filter(|w| !w.is_empty())
    }

    /// `freq` and `tag` joined by a single space, skipping absent ones.
    pub fn joined_attrs(&self) -> Option<String> {
        let joined = [self.freq.as_deref(), self.tag.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

/// One vocabulary entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VocabEntry {
    Word(String),
    Record(VocabRecord),
    Unsupported(Value),
}

impl VocabEntry {
    /// JSON type name of an unsupported entry, for warnings.
    pub fn kind(&self) -> &'static str {
        match self {
            VocabEntry::Word(_) => "string",
            VocabEntry::Record(_) => "object",
            VocabEntry::Unsupported(value) => json_type_name(value),
        }
    }
}

impl From<&str> for VocabEntry {
    fn from(word: &str) -> Self {
        VocabEntry::Word(word.to_string())
    }
}

impl From<String> for VocabEntry {
    fn from(word: String) -> Self {
        VocabEntry::Word(word)
    }
}

impl From<VocabRecord> for VocabEntry {
    fn from(record: VocabRecord) -> Self {
        VocabEntry::Record(record)
    }
}

impl From<Value> for VocabEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(word) => VocabEntry::Word(word),
            Value::Object(map) => VocabEntry::Record(VocabRecord {
                word: map.get("word").and_then(scalar_to_string),
                freq: map.get("freq").and_then(scalar_to_string),
                tag: map.get("tag").and_then(scalar_to_string),
            }),
            other => VocabEntry::Unsupported(other),
        }
    }
}

impl<'de> Deserialize<'de> for VocabEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(VocabEntry::from)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("hello"), DictLine::Entry(DictEntry::new("hello")));
        assert_eq!(
            parse_line("  world\tn  "),
            DictLine::Entry(DictEntry::with_attrs("world", "n"))
        );
        assert_eq!(parse_line(""), DictLine::Blank);
        assert_eq!(parse_line("   "), DictLine::Blank);
        assert_eq!(parse_line("# comment"), DictLine::Blank);
        assert_eq!(parse_line("foo bar baz"), DictLine::Malformed);
    }

    #[test]
    fn test_read_entries() {
        let data = "hello\n# comment\n\nworld freq_or_tag\nfoo bar baz\n";

        let entries = read_entries(Cursor::new(data)).unwrap();

        assert_eq!(
            entries,
            vec![
                DictEntry::new("hello"),
                DictEntry::with_attrs("world", "freq_or_tag"),
            ]
        );
    }

    #[test]
    fn test_load_user_dictionary() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "程序员 10\n白富美 nz\n").unwrap();

        let entries = load_user_dictionary(file.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DictEntry::with_attrs("程序员", "10"));
        assert_eq!(entries[1], DictEntry::with_attrs("白富美", "nz"));
    }

    #[test]
    fn test_load_missing_dictionary() {
        assert!(load_user_dictionary(Path::new("/no/such/dict.txt")).is_err());
    }

    #[test]
    fn test_vocab_from_json() {
        let vocab: Vec<VocabEntry> = serde_json::from_str(
            r#"["交换机", {"word": "程序员", "freq": "10", "tag": "n"}, {"word": "巅峰", "freq": 3}, 42, null, ["x"]]"#,
        )
        .unwrap();

        assert_eq!(vocab[0], VocabEntry::Word("交换机".to_string()));
        assert_eq!(
            vocab[1],
            VocabEntry::Record(VocabRecord::new("程序员").with_freq("10").with_tag("n"))
        );
        assert_eq!(vocab[2], VocabEntry::Record(VocabRecord::new("巅峰").with_freq("3")));
        assert_eq!(vocab[3].kind(), "number");
        assert_eq!(vocab[4].kind(), "null");
        assert_eq!(vocab[5].kind(), "array");
    }

    #[test]
    fn test_joined_attrs() {
        let record = VocabRecord::new("程序员").with_freq("10").with_tag("n");
        assert_eq!(record.joined_attrs().as_deref(), Some("10 n"));

        let record = VocabRecord::new("程序员").with_tag("n");
        assert_eq!(record.joined_attrs().as_deref(), Some("n"));

        assert_eq!(VocabRecord::new("程序员").joined_attrs(), None);
        assert_eq!(VocabRecord::default().word(), None);
    }
}
