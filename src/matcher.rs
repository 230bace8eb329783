//! Lexical matcher
//!
//! Scans normalized text against the lexicon in three passes — single
//! words, phrases, then patterns — and emits one raw match per unique
//! matched substring with an occurrence count. A substring claimed by an
//! earlier pass is never re-recorded by a later one.

use crate::lexicon::LexiconTables;
use crate::models::{MatchType, RawMatch};
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;
use tracing::debug;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Word-like units: alphanumeric runs, allowing internal apostrophes
/// ("don't").
fn token_pattern() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"[a-z0-9]+(?:'[a-z0-9]+)*").expect("valid regex"))
}

/// Minimum token length considered for matching.
const MIN_TOKEN_LEN: usize = 2;

/// Lowercase the text and open up list-delimiter punctuation so phrase
/// boundaries survive "a, b; c | d" style input. Whitespace runs collapse
/// to single spaces so phrase regexes see uniform spacing.
fn normalize(text: &str) -> String {
    let delimited: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ',' | ';' | '|' => ' ',
            other => other,
        })
        .collect();
    delimited.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scan `text` against the lexicon and return raw, unscored matches.
///
/// Empty input produces an empty result, not an error.
pub fn scan(tables: &LexiconTables, text: &str) -> Vec<RawMatch> {
    if text.trim().is_empty() || tables.is_empty() {
        return Vec::new();
    }

    let normalized = normalize(text);
    let tokens: Vec<&str> = token_pattern()
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .collect();

    let mut matches: Vec<RawMatch> = Vec::new();
    // Substrings already claimed by an earlier pass (first-match-wins)
    let mut claimed: FxHashSet<String> = FxHashSet::default();

    // Pass 1: individual words
    let mut looked_up: FxHashSet<&str> = FxHashSet::default();
    for &token in &tokens {
        if !looked_up.insert(token) {
            continue;
        }
        if let Some(category) = tables.word_category(token) {
            let occurrences = tokens.iter().filter(|&&t| t == token).count() as u32;
            matches.push(RawMatch {
                text: token.to_string(),
                occurrences,
                category: category.to_string(),
                match_type: MatchType::Individual,
            });
            claimed.insert(token.to_string());
        }
    }

    // Pass 2 and 3: phrases, then patterns. Both are compiled matchers;
    // they differ only in type weight downstream.
    for compiled in tables
        .phrase_table()
        .iter()
        .chain(tables.pattern_table().iter())
    {
        // Group non-overlapping hits by matched substring, keeping
        // first-seen order
        let mut order: Vec<&str> = Vec::new();
        let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
        for m in compiled.regex.find_iter(&normalized) {
            let entry = counts.entry(m.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(m.as_str());
            }
            *entry += 1;
        }
        for matched in order {
            if claimed.contains(matched) {
                continue;
            }
            claimed.insert(matched.to_string());
            matches.push(RawMatch {
                text: matched.to_string(),
                occurrences: counts[matched],
                category: compiled.category.clone(),
                match_type: compiled.match_type,
            });
        }
    }

    debug!(raw_matches = matches.len(), "lexical scan complete");
    matches
}
