//! Integration tests for the Chinese tokenizer on the built-in backends.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use zhseg::analysis::segmenter::dictionary::{DictEntry, load_user_dictionary};
use zhseg::analysis::token_filter::alphabetic::is_alphabetic;
use zhseg::prelude::*;

fn dictionary_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn test_user_dictionary_parsing() -> Result<()> {
    let file = dictionary_file("hello\n# comment\n\nworld freq_or_tag\nfoo bar baz\n");

    let entries = load_user_dictionary(file.path())?;

    assert_eq!(
        entries,
        vec![DictEntry::new("hello"), DictEntry::with_attrs("world", "freq_or_tag")]
    );
    Ok(())
}

#[test]
fn test_unknown_segmenter_name() {
    let config = TokenizerConfig::from_json_str(r#"{"segment": {"kind": "hanlp"}}"#).unwrap();

    let err = ChineseTokenizer::from_config(&config).unwrap_err();

    assert!(matches!(err, ZhsegError::Config(_)));
    assert!(err.to_string().contains("jieba"));
}

#[test]
fn test_probe_reports_compiled_backends() {
    for kind in BackendKind::ALL {
        assert_eq!(probe_backend(kind).is_ok(), kind.is_available());
    }
}

#[cfg(feature = "jieba")]
mod jieba {
    use super::*;

    fn assert_lowercase_alphabetic(tokens: &[String]) {
        for token in tokens {
            assert!(!token.is_empty());
            assert!(is_alphabetic(token), "{token} is not alphabetic");
            assert_eq!(token, &token.to_lowercase());
        }
    }

    #[test]
    fn test_default_tokenization() -> Result<()> {
        let tokenizer = ChineseTokenizer::new()?;

        let tokens = tokenizer.tokenize("学习python， 当上程序员")?;

        assert_lowercase_alphabetic(&tokens);
        assert_eq!(tokens.concat(), "学习python当上程序员");
        assert!(tokens.contains(&"python".to_string()));
        assert_eq!(tokens, tokenizer.tokenize("学习python， 当上程序员")?);
        Ok(())
    }

    #[test]
    fn test_stopwords_and_punctuation() -> Result<()> {
        let mut tokenizer = ChineseTokenizer::new()?;
        tokenizer.add_stopword("的");

        let tokens = tokenizer.tokenize("根据需求，我们买了二十四口交换机用于网络设备的更新升级")?;

        assert!(!tokens.is_empty());
        assert!(!tokens.contains(&"的".to_string()));
        assert!(tokens.iter().all(|t| !t.contains('，')));
        assert_lowercase_alphabetic(&tokens);
        Ok(())
    }

    #[test]
    fn test_mixed_batch() -> Result<()> {
        let tokenizer = ChineseTokenizer::new()?;
        let input = TokenizerInput::from(json!(["学习python", 42, "当上程序员", {"text": "x"}]));

        let lists = tokenizer.call(input)?.texts();

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].concat(), "学习python");
        assert_eq!(lists[1].concat(), "当上程序员");
        Ok(())
    }

    #[test]
    fn test_single_unsupported_input() {
        let tokenizer = ChineseTokenizer::new().unwrap();
        let result = tokenizer.call(TokenizerInput::from(json!(42)));
        assert!(matches!(result, Err(ZhsegError::InvalidInputType(_))));
    }

    #[test]
    fn test_digits_survive_without_alpha_filter() -> Result<()> {
        let config = TokenizerConfig::from_json_str(r#"{"alphas_only": false}"#)?;
        let tokenizer = ChineseTokenizer::from_config(&config)?;

        let tokens = tokenizer.tokenize("买了 2024 台")?;

        assert!(tokens.contains(&"2024".to_string()));
        Ok(())
    }

    #[test]
    fn test_user_dictionary_and_vocab() -> Result<()> {
        let file = dictionary_file("人生巅峰 20000\n白富美 nz\n# comment\n");
        let config = SegmenterConfig {
            user_dict_path: Some(file.path().to_path_buf()),
            vocab: vec!["白富美".into()],
            ..Default::default()
        };
        let tokenizer = ChineseTokenizer::builder()
            .segmenter(default_registry().create(&config)?)
            .build()?;

        assert!(tokenizer.segmenter().has_user_dictionary());
        let tokens = tokenizer.tokenize("迎娶白富美，走上人生巅峰！")?;
        assert!(tokens.contains(&"人生巅峰".to_string()));
        assert!(tokens.contains(&"白富美".to_string()));
        Ok(())
    }

    #[test]
    fn test_tagged_call() -> Result<()> {
        let tokenizer = ChineseTokenizer::new()?;
        let options = CallOptions::default().with_segment(SegmentOptions::tagged());

        let tokens = tokenizer
            .call_with("我们学习", &options)?
            .into_tokens()
            .unwrap_or_default();

        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| t.tag.is_some()));
        assert_eq!(tokens[0], Token::new("我们").with_tag("r"));
        Ok(())
    }

    #[test]
    fn test_missing_user_dictionary_is_ignored() -> Result<()> {
        let config = SegmenterConfig {
            user_dict_path: Some("/nonexistent/user_dict.txt".into()),
            ..Default::default()
        };
        let segmenter = default_registry().create(&config)?;
        assert!(!segmenter.has_user_dictionary());
        Ok(())
    }
}

#[cfg(feature = "lindera")]
mod lindera {
    use zhseg::analysis::segmenter::lindera::LinderaSegmenter;

    use super::*;

    #[test]
    fn test_vocab_record_from_json() -> Result<()> {
        let config: SegmenterConfig = serde_json::from_value(json!({
            "kind": "lindera_segment",
            "vocab": [{"word": "程序员", "freq": "10", "tag": "n"}]
        }))?;
        let segmenter = LinderaSegmenter::new(config.settings())?;

        let dictionary = segmenter.dictionary();
        let dictionary = dictionary.read();
        let attribute = dictionary.get("程序员").unwrap();
        assert_eq!(attribute.nature(), "n");
        assert_eq!(attribute.frequency(), 10);
        Ok(())
    }

    #[test]
    fn test_lindera_tokenizer() -> Result<()> {
        let config = TokenizerConfig::from_json_str(
            r#"{"segment": {"kind": "lindera", "vocab": ["程序员"]}, "stopwords": ["的"]}"#,
        )?;
        let tokenizer = ChineseTokenizer::from_config(&config)?;
        assert_eq!(tokenizer.segmenter().name(), "lindera");

        let tokens = tokenizer.tokenize("学习Python， 当上程序员")?;

        assert!(tokens.contains(&"程序员".to_string()));
        assert!(tokens.contains(&"python".to_string()));
        assert_eq!(tokens.concat(), "学习python当上程序员");
        Ok(())
    }
}
