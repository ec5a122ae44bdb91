//! Command implementation for the zhseg CLI.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info, warn};

use crate::analysis::tokenizer::chinese::ChineseTokenizer;
use crate::analysis::tokenizer::input::TextUnit;
use crate::cli::args::ZhsegArgs;
use crate::cli::output::{TokenizationReport, TokenizationResult, output_report};
use crate::config::{Toggle, TokenizerConfig};
use crate::error::Result;

/// Sentences tokenized when no text is given.
pub const DEMO_TEXTS: [&str; 2] = [
    "学习python， 当上程序员，迎娶白富美，走上人生巅峰！",
    "根据需求，我们买了二十四口交换机用于网络设备的更新升级",
];

/// Execute the CLI command.
pub fn execute_command(args: ZhsegArgs) -> Result<()> {
    let config = load_config(&args)?;
    let mut tokenizer = ChineseTokenizer::from_config(&config)?;
    info!("Using segmenter: {}", tokenizer.segmenter().name());

    if let Some(path) = &args.stopwords {
        let words = read_stopwords(path)?;
        debug!("Loaded {} stop words from {}", words.len(), path.display());
        for word in words {
            tokenizer.add_stopword(word);
        }
    }

    let units = collect_units(&args)?;
    let report = tokenize_units(&tokenizer, &units, &args)?;

    output_report(&report, &args)
}

/// Build the configuration from the config file and command line overrides.
pub fn load_config(args: &ZhsegArgs) -> Result<TokenizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            TokenizerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => TokenizerConfig::default(),
    };

    if let Some(segmenter) = &args.segmenter {
        config.segment.kind = segmenter.clone();
    }
    if let Some(user_dict) = &args.user_dict {
        config.segment.user_dict_path = Some(user_dict.clone());
    }
    if args.no_lowercase {
        config.lowercase = Toggle::ForceFalse;
    }
    if args.keep_non_alpha {
        config.alphas_only = Toggle::ForceFalse;
    }

    Ok(config)
}

/// Read a stop word file, one word per line. Blank lines are ignored.
pub fn read_stopwords(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read stop words {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Gather the text units to tokenize, in order.
///
/// Stdin lines are kept as raw bytes so the configured encoding decodes them.
fn collect_units(args: &ZhsegArgs) -> Result<Vec<TextUnit>> {
    if args.texts.is_empty() {
        return Ok(DEMO_TEXTS.iter().copied().map(TextUnit::from).collect());
    }

    let mut units = Vec::new();
    for text in &args.texts {
        if text == "-" {
            let stdin = io::stdin();
            for line in stdin.lock().split(b'\n') {
                let mut line = line?;
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                units.push(TextUnit::Bytes(line));
            }
        } else {
            units.push(TextUnit::from(text));
        }
    }

    Ok(units)
}

/// Tokenize every unit, skipping those that cannot be decoded.
pub fn tokenize_units(
    tokenizer: &ChineseTokenizer,
    units: &[TextUnit],
    args: &ZhsegArgs,
) -> Result<TokenizationReport> {
    let start_time = Instant::now();
    let options = args.call_options();

    let mut results = Vec::with_capacity(units.len());
    let mut skipped = 0;
    for (index, unit) in units.iter().enumerate() {
        let text = match tokenizer.decode(unit) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping input {}: {e}", index + 1);
                skipped += 1;
                continue;
            }
        };

        let tokens = tokenizer
            .call_with(text.as_ref(), &options)?
            .into_tokens()
            .unwrap_or_default();

        results.push(TokenizationResult {
            text: text.into_owned(),
            tokens,
        });
    }

    Ok(TokenizationReport {
        segmenter: tokenizer.segmenter().name().to_string(),
        results,
        skipped,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}
