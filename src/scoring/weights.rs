//! Tuning knobs for both scoring branches
//!
//! Everything empirically calibrated lives here under a name: type and
//! category weights, intensifier boosts, thresholds, and the fusion
//! normalization constants.

use crate::models::MatchType;

/// Base weight for a single-word match.
pub const INDIVIDUAL_WEIGHT: f64 = 1.2;
/// Base weight for a multi-word phrase match.
pub const PHRASE_WEIGHT: f64 = 1.8;
/// Base weight for a structural pattern match. Patterns are the strongest
/// single indicator of bias.
pub const PATTERN_WEIGHT: f64 = 2.5;

/// Multiplier applied to categories without a catalog entry.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.5;

/// Boost when the matched text contains an absolutist term.
pub const ABSOLUTIST_BOOST: f64 = 1.3;
/// Boost when the matched text contains a perfectionism term.
pub const PERFECTIONISM_BOOST: f64 = 1.2;
/// Boost when the matched text contains an urgency term.
pub const URGENCY_BOOST: f64 = 1.2;

/// Matches scoring below this are noise, not findings.
pub const MIN_MATCH_SCORE: f64 = 1.0;

/// Severity thresholds on the 0–10 per-match scale.
pub const CRITICAL_SCORE: f64 = 7.5;
pub const HIGH_SCORE: f64 = 5.0;
pub const MEDIUM_SCORE: f64 = 2.5;

/// Per-match scores are clamped to this range.
pub const MAX_MATCH_SCORE: f64 = 10.0;

/// Intensifier words checked both for per-match boosts and for the
/// cross-turn repetition signal.
pub const ABSOLUTIST_TERMS: &[&str] = &["always", "never"];
pub const PERFECTIONISM_TERMS: &[&str] = &["perfect", "ideal"];
pub const URGENCY_TERMS: &[&str] = &["urgent", "asap"];

pub fn type_weight(match_type: MatchType) -> f64 {
    match match_type {
        MatchType::Individual => INDIVIDUAL_WEIGHT,
        MatchType::Phrase => PHRASE_WEIGHT,
        MatchType::Pattern => PATTERN_WEIGHT,
    }
}

/// Per-category score multiplier.
///
/// Total over all category ids: anything not in the catalog gets the
/// default multiplier, never zero and never an error.
pub fn category_weight(category: &str) -> f64 {
    match category {
        "race" => 3.0,
        "gender" => 3.0,
        "overconfidence" => 3.0,
        "religion" => 2.9,
        "disability" => 2.8,
        "absolutism" => 2.8,
        "age" => 2.6,
        "urgency" => 2.5,
        "socioeconomic" => 2.5,
        "appearance" => 2.4,
        "perfectionism" => 2.2,
        "generalization" => 2.0,
        "confirmation" => 2.0,
        "emotional" => 1.8,
        _ => DEFAULT_CATEGORY_WEIGHT,
    }
}

/// Multiplicative intensifier boost for the matched text. Boosts are
/// independent; more than one can apply.
pub fn intensifier_boost(matched_text: &str) -> f64 {
    let mut boost = 1.0;
    if ABSOLUTIST_TERMS.iter().any(|t| matched_text.contains(t)) {
        boost *= ABSOLUTIST_BOOST;
    }
    if PERFECTIONISM_TERMS.iter().any(|t| matched_text.contains(t)) {
        boost *= PERFECTIONISM_BOOST;
    }
    if URGENCY_TERMS.iter().any(|t| matched_text.contains(t)) {
        boost *= URGENCY_BOOST;
    }
    boost
}
