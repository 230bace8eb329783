//! Core data models for biaslens
//!
//! These models are used throughout the codebase for representing
//! lexicon matches, per-match scores, and analysis results.

use serde::{Deserialize, Serialize};

/// Severity levels for matches and verdicts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// High and critical findings route to priority actions.
    pub fn is_priority(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// How a term was matched against the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Single word from the word table
    Individual,
    /// Multi-word lexicon phrase
    Phrase,
    /// Named structural/regex pattern
    Pattern,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Individual => write!(f, "individual"),
            MatchType::Phrase => write!(f, "phrase"),
            MatchType::Pattern => write!(f, "pattern"),
        }
    }
}

/// A raw, unscored hit from the lexical matcher.
///
/// One record per unique matched substring; repeats are folded into
/// `occurrences`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub text: String,
    pub occurrences: u32,
    pub category: String,
    pub match_type: MatchType,
}

/// A scored lexical match.
///
/// Invariants: `score` is in [0, 10] rounded to one decimal,
/// `occurrence_count >= 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub matched_text: String,
    pub occurrence_count: u32,
    pub category: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub score: f64,
    pub severity: Severity,
}

/// A per-category finding from the pattern-confidence pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternFinding {
    pub matched_text: String,
    pub category: String,
    pub weight: f64,
    pub severity: Severity,
    pub confidence: f64,
}

/// Output of the pattern-confidence analyzer (the "mathematical" branch).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MathematicalAnalysis {
    pub patterns: Vec<PatternFinding>,
    /// Normalized to [0, 1]
    pub total_score: f64,
    /// [0, 0.95]; 0.3 when no evidence was found
    pub confidence: f64,
    /// Cross-turn repetition signal, capped at 0.3
    pub repetition_score: f64,
}

/// Rollup of matches by severity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeveritySummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl SeveritySummary {
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut summary = Self::default();
        for m in matches {
            match m.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// The unified verdict returned to the host.
///
/// `detected_terms`, `categories`, `recommendations`, and
/// `priority_actions` are deduplicated, first-seen order preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// [0, 1]
    pub unified_score: f64,
    /// [0, 1]
    pub confidence: f64,
    pub severity: Severity,
    pub detected_terms: Vec<String>,
    pub categories: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority_actions: Vec<String>,
    /// Per-match detail from the lexical branch, for rendering
    pub matches: Vec<MatchRecord>,
    pub summary: SeveritySummary,
}
