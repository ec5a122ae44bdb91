//! Command line argument parsing for the zhseg CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::SegmentOptions;
use crate::analysis::tokenizer::chinese::CallOptions;

/// zhseg - Chinese word segmentation and tokenization
#[derive(Parser, Debug, Clone)]
#[command(name = "zhseg")]
#[command(about = "Segment and tokenize Chinese text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ZhsegArgs {
    /// Texts to tokenize. Reads lines from stdin when "-" is given.
    /// Without any text, tokenizes two sample sentences.
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Tokenizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ZHSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Segmenter name (jieba, lindera)
    #[arg(short, long, value_name = "NAME")]
    pub segmenter: Option<String>,

    /// User dictionary file, one "word [attrs]" entry per line
    #[arg(short, long, value_name = "DICT_FILE")]
    pub user_dict: Option<PathBuf>,

    /// Stop word file, one word per line
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Keep the original case of tokens
    #[arg(long)]
    pub no_lowercase: bool,

    /// Keep tokens that contain non-alphabetic characters
    #[arg(long)]
    pub keep_non_alpha: bool,

    /// Attach part-of-speech tags to tokens
    #[arg(short, long)]
    pub tag: bool,

    /// Emit every dictionary word found in the text (jieba only)
    #[arg(long)]
    pub cut_all: bool,

    /// Disable the HMM for unknown words (jieba only)
    #[arg(long)]
    pub no_hmm: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ZhsegArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Call options selected on the command line.
    pub fn call_options(&self) -> CallOptions {
        CallOptions::default()
            .with_segment(SegmentOptions {
                tag: self.tag,
                cut_all: self.cut_all,
                hmm: !self.no_hmm,
            })
            .with_lowercase(!self.no_lowercase)
            .with_alphas_only(!self.keep_non_alpha)
    }

    /// Whether texts come from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.texts.iter().any(|text| text == "-")
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ZhsegArgs::parse_from(["zhseg", "学习python"]);

        assert_eq!(args.texts, vec!["学习python"]);
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.call_options(), CallOptions::default());
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_flags() {
        let args = ZhsegArgs::parse_from([
            "zhseg",
            "--tag",
            "--cut-all",
            "--no-hmm",
            "--no-lowercase",
            "--keep-non-alpha",
            "-vv",
            "--format",
            "json",
            "-",
        ]);

        let options = args.call_options();
        assert!(options.segment.tag);
        assert!(options.segment.cut_all);
        assert!(!options.segment.hmm);
        assert!(!options.lowercase);
        assert!(!options.alphas_only);
        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = ZhsegArgs::parse_from(["zhseg", "-vvv", "-q"]);
        assert_eq!(args.verbosity(), 0);
    }
}
