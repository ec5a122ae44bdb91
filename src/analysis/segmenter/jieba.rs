//! jieba-rs based segmenter.
//!
//! User dictionary lines (`word` or `word attr`) go through the shared line
//! parser. An integer attribute is the word's frequency, anything else its
//! tag. Dictionary entries and vocabulary entries both go through `add_word`,
//! so words without a frequency get jieba's suggested one.
//!
//! The engine belongs to this segmenter instance and sits behind a lock:
//! segmentation takes a read lock, [`JiebaSegmenter::add_word`] a write lock.

use jieba_rs::Jieba;
use log::{debug, warn};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::analysis::segmenter::dictionary::{VocabEntry, load_user_dictionary};
use crate::analysis::segmenter::{
    BackendKind, SegmentOptions, Segmenter, SegmenterSettings, probe_backend,
};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// Segmenter backed by the jieba-rs engine.
pub struct JiebaSegmenter {
    settings: SegmenterSettings,
    inner: RwLock<Jieba>,
}

impl JiebaSegmenter {
    /// Create a segmenter on top of jieba's default dictionary.
    pub fn new(settings: SegmenterSettings) -> Result<Self> {
        probe_backend(BackendKind::Jieba)?;

        let mut jieba = Jieba::new();

        if settings.has_user_dictionary() {
            if let Some(path) = settings.user_dict_path() {
                let entries = load_user_dictionary(path)?;
                for entry in &entries {
                    let (freq, tag) = split_attrs(entry.attrs.as_deref());
                    jieba.add_word(&entry.word, freq, tag);
                }
                debug!("loaded {} words from {}", entries.len(), path.display());
            }
        }

        for entry in settings.vocab() {
            match entry {
                VocabEntry::Word(word) => {
                    jieba.add_word(word, None, None);
                }
                VocabEntry::Record(record) => {
                    let Some(word) = record.word() else {
                        debug!("skipping vocabulary record without a word");
                        continue;
                    };
                    let freq = record.freq.as_deref().and_then(|freq| {
                        freq.trim()
                            .parse::<usize>()
                            .map_err(|_| warn!("ignoring non-integer frequency {freq:?} for {word}"))
                            .ok()
                    });
                    jieba.add_word(word, freq, record.tag.as_deref());
                }
                VocabEntry::Unsupported(_) => warn!(
                    "only string or dictionary is needed! type {} is found!",
                    entry.kind()
                ),
            }
        }

        Ok(JiebaSegmenter {
            settings,
            inner: RwLock::new(jieba),
        })
    }

    /// Read access to the underlying engine.
    pub fn raw(&self) -> RwLockReadGuard<'_, Jieba> {
        self.inner.read()
    }

    /// Write access to the underlying engine.
    pub fn raw_mut(&self) -> RwLockWriteGuard<'_, Jieba> {
        self.inner.write()
    }

    /// Part-of-speech tagging surface: `(word, tag)` pairs for `text`.
    pub fn pos_tag(&self, text: &str, hmm: bool) -> Vec<(String, String)> {
        self.inner
            .read()
            .tag(text, hmm)
            .into_iter()
            .map(|tag| (tag.word.to_string(), tag.tag.to_string()))
            .collect()
    }

    /// Add a word to the engine dictionary. Returns the stored frequency.
    pub fn add_word(&self, word: &str, freq: Option<usize>, tag: Option<&str>) -> usize {
        self.inner.write().add_word(word, freq, tag)
    }
}

/// Read a user dictionary attribute as a frequency when it is an integer,
/// otherwise as a part-of-speech tag.
fn split_attrs(attrs: Option<&str>) -> (Option<usize>, Option<&str>) {
    match attrs {
        Some(attrs) => match attrs.parse::<usize>() {
            Ok(freq) => (Some(freq), None),
            Err(_) => (None, Some(attrs)),
        },
        None => (None, None),
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(
        &'a self,
        text: &'a str,
        options: &SegmentOptions,
    ) -> Result<TokenStream<'a>> {
        let jieba = self.inner.read();

        if options.tag {
            let tokens: Vec<Token> = jieba
                .tag(text, options.hmm)
                .into_iter()
                .map(|tag| Token::new(tag.word).with_tag(tag.tag))
                .collect();
            return Ok(tokens.into_token_stream());
        }

        let words = if options.cut_all {
            jieba.cut_all(text)
        } else {
            jieba.cut(text, options.hmm)
        };
        Ok(Box::new(words.into_iter().map(Token::new)))
    }

    fn settings(&self) -> &SegmenterSettings {
        &self.settings
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::analysis::segmenter::dictionary::VocabRecord;

    fn cut(segmenter: &JiebaSegmenter, text: &str, options: SegmentOptions) -> Vec<String> {
        segmenter
            .segment(text, &options)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_segment_covers_input() {
        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();

        let words = cut(&segmenter, "我们买了二十四口交换机", SegmentOptions::default());

        assert_eq!(words.concat(), "我们买了二十四口交换机");
        assert!(words.contains(&"我们".to_string()));
        assert_eq!(segmenter.name(), "jieba");
    }

    #[test]
    fn test_segment_is_restartable() {
        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();
        let options = SegmentOptions::default();

        let first: Vec<Token> = segmenter.segment("网络设备的更新升级", &options).unwrap().take(1).collect();
        let all = cut(&segmenter, "网络设备的更新升级", options);

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].text, all[0]);
    }

    #[test]
    fn test_cut_all_yields_overlapping_words() {
        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();
        let options = SegmentOptions {
            cut_all: true,
            ..Default::default()
        };

        let words = cut(&segmenter, "中国人民", options);

        assert!(words.len() > 2);
        assert!(words.iter().map(|w| w.chars().count()).sum::<usize>() > 4);
    }

    #[test]
    fn test_tagged_segmentation() {
        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();

        let tokens: Vec<Token> = segmenter
            .segment("我们买了交换机", &SegmentOptions::tagged())
            .unwrap()
            .collect();

        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| t.tag.is_some()));
        assert_eq!(tokens[0], Token::new("我们").with_tag("r"));
    }

    #[test]
    fn test_vocab_entries() {
        let vocab = vec![
            VocabEntry::from(VocabRecord::new("白富美").with_freq("20000").with_tag("nz")),
            VocabEntry::from("二十四口"),
            VocabEntry::Unsupported(serde_json::json!(true)),
        ];
        let segmenter = JiebaSegmenter::new(SegmenterSettings::with_vocab(vocab)).unwrap();

        let tagged = segmenter.pos_tag("迎娶白富美", true);
        assert!(tagged.contains(&("白富美".to_string(), "nz".to_string())));
    }

    fn user_dict(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_split_attrs() {
        assert_eq!(split_attrs(Some("20000")), (Some(20000), None));
        assert_eq!(split_attrs(Some("nz")), (None, Some("nz")));
        assert_eq!(split_attrs(None), (None, None));
    }

    #[test]
    fn test_user_dictionary_file() {
        let file = user_dict("人生巅峰 20000\n");

        let segmenter = JiebaSegmenter::new(SegmenterSettings::with_user_dict(file.path())).unwrap();

        assert!(segmenter.has_user_dictionary());
        let words = cut(&segmenter, "走上人生巅峰", SegmentOptions::default());
        assert!(words.contains(&"人生巅峰".to_string()));
    }

    #[test]
    fn test_user_dictionary_tag_and_bare_word() {
        let file = user_dict("人生巅峰 nz\n白富美\n");

        let segmenter = JiebaSegmenter::new(SegmenterSettings::with_user_dict(file.path())).unwrap();

        let tagged = segmenter.pos_tag("迎娶白富美，走上人生巅峰", true);
        assert!(tagged.contains(&("人生巅峰".to_string(), "nz".to_string())));
        assert!(tagged.iter().any(|(word, _)| word == "白富美"));
    }

    #[test]
    fn test_user_dictionary_skips_malformed_lines() {
        let file = user_dict("hello\n# comment\n\nworld freq_or_tag\nfoo bar baz\n");

        let segmenter = JiebaSegmenter::new(SegmenterSettings::with_user_dict(file.path())).unwrap();

        assert!(segmenter.has_user_dictionary());
        let tagged = segmenter.pos_tag("world", false);
        assert_eq!(tagged, vec![("world".to_string(), "freq_or_tag".to_string())]);
        let words = cut(&segmenter, "hello", SegmentOptions::default());
        assert_eq!(words, vec!["hello"]);
    }

    #[test]
    fn test_add_word() {
        let segmenter = JiebaSegmenter::new(SegmenterSettings::default()).unwrap();
        assert_eq!(segmenter.add_word("当上程序员", Some(50000), Some("v")), 50000);

        let words = cut(&segmenter, "当上程序员", SegmentOptions::default());
        assert_eq!(words, vec!["当上程序员"]);
    }
}
