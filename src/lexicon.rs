//! Lexicon store and load lifecycle
//!
//! The lexicon is the combined word/phrase/pattern → category reference
//! data, plus the category → suggestion table. It is loaded once per
//! process from an external source, compiled, and shared read-only behind
//! an `Arc` for the process lifetime.
//!
//! Loading is a bounded poll: the source is asked for data at a fixed
//! interval up to a fixed attempt count. If the data never arrives the
//! engine degrades to empty tables ("no matches found") instead of
//! blocking or failing the host.

use crate::error::{EngineError, EngineResult};
use crate::models::MatchType;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Flat lexicon tables as delivered by the external data source.
///
/// All four maps are optional in the wire format; missing tables
/// deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLexicon {
    #[serde(default)]
    pub words: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub phrases: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub patterns: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub suggestions: std::collections::HashMap<String, String>,
}

/// A phrase or named pattern compiled to a matcher at load time.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: Regex,
    /// Original phrase text or pattern source, for diagnostics
    pub source: String,
    pub category: String,
    pub match_type: MatchType,
}

/// Immutable, compiled lexicon tables.
///
/// Word and suggestion lookups go through hash maps; phrase and pattern
/// tables are kept sorted so scan order (and therefore output order) is
/// deterministic regardless of how the source serialized its maps.
#[derive(Debug, Default)]
pub struct LexiconTables {
    words: FxHashMap<String, String>,
    phrases: Vec<CompiledPattern>,
    patterns: Vec<CompiledPattern>,
    suggestions: FxHashMap<String, String>,
}

impl LexiconTables {
    /// Empty tables: every scan returns no matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile raw tables into matchers.
    ///
    /// A phrase or pattern entry that fails to compile is logged and
    /// skipped; one malformed entry must never abort the load.
    pub fn compile(raw: RawLexicon) -> Self {
        let words: FxHashMap<String, String> = raw
            .words
            .into_iter()
            .map(|(term, cat)| (term.to_lowercase(), cat))
            .collect();

        let mut phrase_entries: Vec<(String, String)> = raw.phrases.into_iter().collect();
        phrase_entries.sort();
        let phrases = phrase_entries
            .into_iter()
            .filter_map(|(term, cat)| {
                let term = term.to_lowercase();
                let source = format!(r"\b{}\b", regex::escape(&term));
                match compile_entry(&source, &term, &cat, MatchType::Phrase) {
                    Ok(compiled) => Some(compiled),
                    Err(err) => {
                        warn!("skipping phrase entry: {err}");
                        None
                    }
                }
            })
            .collect();

        let mut pattern_entries: Vec<(String, String)> = raw.patterns.into_iter().collect();
        pattern_entries.sort();
        let patterns = pattern_entries
            .into_iter()
            .filter_map(|(source_text, cat)| {
                // Word-boundary semantics around the caller's pattern
                let wrapped = format!(r"\b(?:{source_text})\b");
                match compile_entry(&wrapped, &source_text, &cat, MatchType::Pattern) {
                    Ok(compiled) => Some(compiled),
                    Err(err) => {
                        warn!("skipping pattern entry: {err}");
                        None
                    }
                }
            })
            .collect();

        let tables = Self {
            words,
            phrases,
            patterns,
            suggestions: raw.suggestions.into_iter().collect(),
        };
        info!(
            words = tables.words.len(),
            phrases = tables.phrases.len(),
            patterns = tables.patterns.len(),
            "lexicon compiled"
        );
        tables
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty() && self.patterns.is_empty()
    }

    /// Look up the category of a single word token.
    pub fn word_category(&self, token: &str) -> Option<&str> {
        self.words.get(token).map(String::as_str)
    }

    pub fn phrase_table(&self) -> &[CompiledPattern] {
        &self.phrases
    }

    pub fn pattern_table(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Suggestion text for a category.
    ///
    /// Total: categories missing from the suggestion table fall back to a
    /// generic message naming the term, so a match is never silently
    /// dropped from the recommendation output.
    pub fn suggestion(&self, category: &str, term: &str) -> String {
        self.suggestions
            .get(category)
            .cloned()
            .unwrap_or_else(|| format!("Bias detected: {term}"))
    }
}

fn compile_entry(
    regex_source: &str,
    original: &str,
    category: &str,
    match_type: MatchType,
) -> EngineResult<CompiledPattern> {
    let regex = Regex::new(regex_source).map_err(|e| EngineError::InvalidPattern {
        source_text: original.to_string(),
        category: category.to_string(),
        reason: e.to_string(),
    })?;
    Ok(CompiledPattern {
        regex,
        source: original.to_string(),
        category: category.to_string(),
        match_type,
    })
}

/// Load lifecycle of the lexicon store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready,
    /// Retry budget exhausted; the engine stays on empty tables for the
    /// process lifetime and does not re-attempt.
    Unavailable,
}

/// External data source the lexicon is polled from.
///
/// `fetch` is a cheap readiness probe: it returns `None` until the source
/// has data. The loader owns the retry cadence.
pub trait LexiconSource: Send + Sync {
    fn fetch(&self) -> Option<RawLexicon>;
}

/// Lexicon source backed by a JSON file on disk.
pub struct FileLexiconSource {
    path: PathBuf,
}

impl FileLexiconSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LexiconSource for FileLexiconSource {
    fn fetch(&self) -> Option<RawLexicon> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                debug!("lexicon file {} not readable yet: {err}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(raw) => Some(raw),
            Err(err) => {
                warn!("lexicon file {} is not valid JSON: {err}", self.path.display());
                None
            }
        }
    }
}

/// Poll `source` until it yields data, at `interval`, up to `attempts`
/// times. The first probe happens immediately.
pub async fn load_with_retry(
    source: &dyn LexiconSource,
    attempts: u32,
    interval: Duration,
) -> EngineResult<RawLexicon> {
    for attempt in 1..=attempts {
        if let Some(raw) = source.fetch() {
            debug!(attempt, "lexicon source ready");
            return Ok(raw);
        }
        if attempt < attempts {
            tokio::time::sleep(interval).await;
        }
    }
    Err(EngineError::LexiconUnavailable { attempts })
}
