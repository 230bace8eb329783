//! Pattern-confidence analyzer
//!
//! The second, independent scoring branch. It re-scans the text through
//! the same lexical matcher, but aggregates per-category weight and
//! confidence instead of per-match scores, and folds in a weak repetition
//! signal computed from prior conversation turns.

use crate::lexicon::LexiconTables;
use crate::matcher;
use crate::models::{MathematicalAnalysis, PatternFinding, Severity};
use crate::scoring::{self, weights};
use tracing::debug;

/// Running weight total that saturates the normalized score at 1.0. A
/// handful of high-weight hits lands near saturation.
pub const TOTAL_NORMALIZER: f64 = 20.0;

/// Weight above which a finding is classified high severity.
pub const HIGH_WEIGHT: f64 = 2.0;
/// Weight above which a finding is classified medium severity.
pub const MEDIUM_WEIGHT: f64 = 1.5;

/// Per-finding confidence: `0.5 + weight × 0.1`, capped.
pub const CONFIDENCE_BASE: f64 = 0.5;
pub const CONFIDENCE_PER_WEIGHT: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Confidence reported when no evidence was found. Low confidence in "no
/// bias", not zero.
pub const NO_EVIDENCE_CONFIDENCE: f64 = 0.3;

/// Repetition across turns is a weak independent signal, capped low.
pub const REPETITION_CAP: f64 = 0.3;
pub const REPETITION_STEP: f64 = 0.1;

fn severity_for_weight(weight: f64) -> Severity {
    if weight > HIGH_WEIGHT {
        Severity::High
    } else if weight > MEDIUM_WEIGHT {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Intensifier hits across the last `window` history entries, scaled and
/// capped. The history is read-only input; it is never mutated here.
pub fn repetition_score(history: &[String], window: usize) -> f64 {
    let mut hits = 0usize;
    for entry in history.iter().rev().take(window) {
        let lower = entry.to_lowercase();
        let terms = weights::ABSOLUTIST_TERMS
            .iter()
            .chain(weights::PERFECTIONISM_TERMS)
            .chain(weights::URGENCY_TERMS);
        for term in terms {
            if lower.contains(term) {
                hits += 1;
            }
        }
    }
    (hits as f64 * REPETITION_STEP).min(REPETITION_CAP)
}

/// Run the mathematical branch over `text` with up to `history_window`
/// prior turns of context.
pub fn analyze(
    tables: &LexiconTables,
    text: &str,
    history: &[String],
    history_window: usize,
) -> MathematicalAnalysis {
    let hits = matcher::scan(tables, text);

    let mut patterns = Vec::with_capacity(hits.len());
    let mut running_total = 0.0;
    for hit in &hits {
        // The noise floor binds both branches: a hit too weak to be a
        // finding must not resurface as a detected term here.
        if scoring::score_match(hit).is_none() {
            continue;
        }
        let weight = weights::INDIVIDUAL_WEIGHT * weights::category_weight(&hit.category);
        running_total += weight;
        patterns.push(PatternFinding {
            matched_text: hit.text.clone(),
            category: hit.category.clone(),
            weight,
            severity: severity_for_weight(weight),
            confidence: (CONFIDENCE_BASE + weight * CONFIDENCE_PER_WEIGHT).min(MAX_CONFIDENCE),
        });
    }

    let repetition = repetition_score(history, history_window);
    // The repetition signal folds into the normalized total so it
    // contributes to the fused verdict without dominating it.
    let total_score = (running_total / TOTAL_NORMALIZER + repetition).min(1.0);

    let confidence = if patterns.is_empty() {
        NO_EVIDENCE_CONFIDENCE
    } else {
        let mean = patterns.iter().map(|p| p.confidence).sum::<f64>() / patterns.len() as f64;
        mean.min(MAX_CONFIDENCE)
    };

    debug!(
        findings = patterns.len(),
        total_score, confidence, repetition, "pattern-confidence pass complete"
    );

    MathematicalAnalysis {
        patterns,
        total_score,
        confidence,
        repetition_score: repetition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::RawLexicon;

    fn tables(json: &str) -> LexiconTables {
        let raw: RawLexicon = serde_json::from_str(json).expect("parse lexicon JSON");
        LexiconTables::compile(raw)
    }

    fn history(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_evidence_defaults_confidence() {
        let tables = LexiconTables::empty();
        let result = analyze(&tables, "perfectly ordinary text", &[], 5);
        assert!(result.patterns.is_empty());
        assert_eq!(result.total_score, 0.0);
        assert!((result.confidence - NO_EVIDENCE_CONFIDENCE).abs() < 1e-9);
    }

    #[test]
    fn test_weight_and_confidence_per_hit() {
        let tables = tables(r#"{"words": {"always": "absolutism"}}"#);
        let result = analyze(&tables, "you always fail", &[], 5);
        assert_eq!(result.patterns.len(), 1);
        let finding = &result.patterns[0];
        // 1.2 × 2.8 = 3.36
        assert!((finding.weight - 3.36).abs() < 1e-9);
        assert_eq!(finding.severity, Severity::High, "3.36 > 2.0");
        // min(0.95, 0.5 + 0.336) = 0.836
        assert!((finding.confidence - 0.836).abs() < 1e-9);
        // total_score = 3.36 / 20
        assert!((result.total_score - 0.168).abs() < 1e-9);
    }

    #[test]
    fn test_noise_floor_applies_to_this_branch_too() {
        // (1.2 × 1.5)/2 = 0.9 is below the minimum match score, so the
        // hit must not surface as a pattern finding either.
        let tables = tables(r#"{"words": {"meh": "uncatalogued"}}"#);
        let result = analyze(&tables, "meh", &[], 5);
        assert!(result.patterns.is_empty());
        assert_eq!(result.total_score, 0.0);
    }

    #[test]
    fn test_severity_tiers_on_weight() {
        assert_eq!(severity_for_weight(2.01), Severity::High);
        assert_eq!(severity_for_weight(2.0), Severity::Medium);
        assert_eq!(severity_for_weight(1.51), Severity::Medium);
        assert_eq!(severity_for_weight(1.5), Severity::Low);
    }

    #[test]
    fn test_repetition_caps_at_point_three() {
        let h = history(&[
            "this is urgent",
            "really urgent now",
            "urgent!!",
            "still urgent",
            "URGENT",
        ]);
        assert!((repetition_score(&h, 5) - 0.3).abs() < 1e-9, "5 × 0.1 capped at 0.3");
    }

    #[test]
    fn test_repetition_respects_window() {
        let h = history(&["urgent", "urgent", "urgent", "calm", "calm", "calm"]);
        // Only the last 3 entries are in the window; all calm
        assert_eq!(repetition_score(&h, 3), 0.0);
    }

    #[test]
    fn test_repetition_contributes_without_dominating() {
        let tables = LexiconTables::empty();
        let h = history(&["urgent", "urgent", "urgent", "urgent", "urgent"]);
        let result = analyze(&tables, "nothing matches here", &h, 5);
        assert!((result.repetition_score - 0.3).abs() < 1e-9);
        assert!((result.total_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_total_score_saturates_at_one() {
        let tables = tables(
            r#"{"words": {
                "always": "absolutism", "never": "absolutism",
                "everyone": "generalization", "nobody": "generalization",
                "urgent": "urgency", "asap": "urgency",
                "perfect": "perfectionism", "stupid": "emotional",
                "lazy": "race", "crazy": "disability"
            }}"#,
        );
        let text = "always never everyone nobody urgent asap perfect stupid lazy crazy";
        let h = history(&["urgent always", "never perfect", "asap", "ideal", "always"]);
        let result = analyze(&tables, text, &h, 5);
        assert!(result.total_score <= 1.0);
        assert!(result.confidence <= MAX_CONFIDENCE);
    }
}
