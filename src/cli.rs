//! CLI definition and handler

use crate::config;
use crate::engine::BiasEngine;
use crate::lexicon::FileLexiconSource;
use crate::reporters;
use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Biaslens - lexicon-driven bias analysis
///
/// Scans free-form text for lexical and structural indicators of
/// cognitive and social bias and produces one explainable severity
/// verdict with remediation hints.
#[derive(Parser, Debug)]
#[command(name = "biaslens")]
#[command(
    version,
    about = "Lexicon-driven bias scoring — weighted lexical matching fused with pattern-confidence analysis",
    after_help = "\
Examples:
  biaslens message.txt                        Analyze a text file
  biaslens --text 'You always fail.'          Analyze inline text
  cat draft.md | biaslens                     Analyze stdin
  biaslens message.txt --format json          JSON output for scripting
  biaslens message.txt --history prior.txt    Prior turns, one per line
  biaslens message.txt -l my-lexicon.json     Custom lexicon"
)]
pub struct Cli {
    /// Text file to analyze (default: stdin)
    pub input: Option<PathBuf>,

    /// Inline text to analyze instead of a file
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// JSON lexicon file (words, phrases, patterns, suggestions)
    #[arg(long, short = 'l', default_value = "lexicon.json")]
    pub lexicon: PathBuf,

    /// Prior conversation turns, one per line, oldest first
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Input text, with every failure mode mapped to empty text. A scoring
/// engine must never crash the pipeline that feeds it.
fn read_input(cli: &Cli) -> String {
    if let Some(text) = &cli.text {
        return text.clone();
    }
    if let Some(path) = &cli.input {
        return match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not read {}: {err}; treating as empty", path.display());
                String::new()
            }
        };
    }
    let mut buf = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
        warn!("could not read stdin: {err}; treating as empty");
        buf.clear();
    }
    buf
}

fn read_history(path: Option<&PathBuf>) -> Vec<String> {
    let Some(path) = path else {
        return Vec::new();
    };
    match std::fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(err) => {
            warn!("could not read history {}: {err}; ignoring", path.display());
            Vec::new()
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let text = read_input(&cli);
    let history = read_history(cli.history.as_ref());
    let config = config::load_config(Path::new("."));

    let mut engine = BiasEngine::new(config);
    let source = FileLexiconSource::new(&cli.lexicon);
    // A missing lexicon degrades to an empty verdict; already logged.
    let _ = engine.load(&source).await;

    let result = engine.analyze(&text, &history);
    let rendered = match cli.format.as_str() {
        "json" => reporters::json::render(&result)?,
        _ => reporters::text::render(&result)?,
    };
    println!("{rendered}");
    Ok(())
}
