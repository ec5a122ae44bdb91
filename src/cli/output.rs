//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, ZhsegArgs};
use crate::error::Result;

/// Tokens produced for one input text.
#[derive(Debug, Serialize)]
pub struct TokenizationResult {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Results of a whole run.
#[derive(Debug, Serialize)]
pub struct TokenizationReport {
    pub segmenter: String,
    pub results: Vec<TokenizationResult>,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Output a report in the specified format.
pub fn output_report(report: &TokenizationReport, args: &ZhsegArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in human-readable format.
fn output_human(report: &TokenizationReport, args: &ZhsegArgs) -> Result<()> {
    for result in &report.results {
        if args.verbosity() > 1 {
            println!("{}", result.text);
        }
        println!("{}", format_tokens(&result.tokens));
    }

    if args.verbosity() > 1 {
        println!();
        println!(
            "Segmenter: {}, texts: {}, skipped: {}, time: {}ms",
            report.segmenter,
            report.results.len(),
            report.skipped,
            report.duration_ms
        );
    }

    Ok(())
}

fn output_json(report: &TokenizationReport, args: &ZhsegArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    println!("{json}");
    Ok(())
}

/// Format tokens as a space-separated line, tagged tokens as `word/tag`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
