//! Converts raw matches into scored, severity-classified records.

use super::weights;
use crate::models::{MatchRecord, RawMatch, Severity};
use tracing::debug;

/// Severity tier for a 0–10 per-match score.
pub fn severity_for_score(score: f64) -> Severity {
    if score >= weights::CRITICAL_SCORE {
        Severity::Critical
    } else if score >= weights::HIGH_SCORE {
        Severity::High
    } else if score >= weights::MEDIUM_SCORE {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Score one raw match.
///
/// Returns `None` when the score lands below the minimum threshold;
/// sub-threshold matches are dropped, not reported at zero.
pub fn score_match(raw: &RawMatch) -> Option<MatchRecord> {
    let base = (weights::type_weight(raw.match_type) * weights::category_weight(&raw.category))
        / 2.0;
    let boosted = base * weights::intensifier_boost(&raw.text);
    let clamped = boosted.clamp(0.0, weights::MAX_MATCH_SCORE);
    let score = (clamped * 10.0).round() / 10.0;

    if score < weights::MIN_MATCH_SCORE {
        debug!(text = %raw.text, score, "match below threshold, discarded");
        return None;
    }

    Some(MatchRecord {
        matched_text: raw.text.clone(),
        occurrence_count: raw.occurrences,
        category: raw.category.clone(),
        match_type: raw.match_type,
        score,
        severity: severity_for_score(score),
    })
}

/// Score a batch of raw matches, dropping sub-threshold ones.
pub fn score_matches(raw: &[RawMatch]) -> Vec<MatchRecord> {
    raw.iter().filter_map(score_match).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchType;

    fn raw(text: &str, category: &str, match_type: MatchType) -> RawMatch {
        RawMatch {
            text: text.to_string(),
            occurrences: 1,
            category: category.to_string(),
            match_type,
        }
    }

    #[test]
    fn test_always_absolutism_arithmetic_chain() {
        // (1.2 × 2.8) / 2 = 1.68, ×1.3 absolutist boost = 2.184 → 2.2
        let record = score_match(&raw("always", "absolutism", MatchType::Individual))
            .expect("above threshold");
        assert!((record.score - 2.2).abs() < 1e-9);
        assert_eq!(record.severity, Severity::Low, "2.2 < 2.5 medium cutoff");
    }

    #[test]
    fn test_sub_threshold_match_discarded() {
        // (1.2 × 1.5) / 2 = 0.9 < 1.0 for an unboosted unknown-category word
        let result = score_match(&raw("meh", "uncatalogued", MatchType::Individual));
        assert!(result.is_none());
    }

    #[test]
    fn test_pattern_in_heavy_category_scores_higher() {
        // (2.5 × 3.0) / 2 = 3.75 → medium
        let record = score_match(&raw("them people", "race", MatchType::Pattern))
            .expect("above threshold");
        assert!((record.score - 3.8).abs() < 1e-9);
        assert_eq!(record.severity, Severity::Medium);
    }

    #[test]
    fn test_stacked_boosts_multiply() {
        // (1.8 × 2.5) / 2 = 2.25, ×1.3 ×1.2 = 3.51 → 3.5
        let record = score_match(&raw(
            "always urgent",
            "urgency",
            MatchType::Phrase,
        ))
        .expect("above threshold");
        assert!((record.score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_clamped_to_ten() {
        // No realistic weight combo exceeds 10 today, but the clamp is the
        // documented invariant. Max combo: 2.5 × 3.0 / 2 × 1.3 × 1.2 × 1.2
        // = 7.02 → high.
        let record = score_match(&raw(
            "always perfect urgent",
            "race",
            MatchType::Pattern,
        ))
        .expect("above threshold");
        assert!(record.score <= 10.0);
        assert_eq!(record.severity, Severity::High);
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(severity_for_score(7.5), Severity::Critical);
        assert_eq!(severity_for_score(5.0), Severity::High);
        assert_eq!(severity_for_score(2.5), Severity::Medium);
        assert_eq!(severity_for_score(2.4), Severity::Low);
        assert_eq!(severity_for_score(0.0), Severity::Low);
    }

    #[test]
    fn test_batch_scoring_preserves_order_and_drops_noise() {
        let raws = vec![
            raw("always", "absolutism", MatchType::Individual),
            raw("meh", "uncatalogued", MatchType::Individual),
            raw("you people", "generalization", MatchType::Phrase),
        ];
        let records = score_matches(&raws);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].matched_text, "always");
        assert_eq!(records[1].matched_text, "you people");
    }
}
