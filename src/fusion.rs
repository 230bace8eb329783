//! Fusion of the two scoring branches
//!
//! Merges the weighted lexical matches and the pattern-confidence output
//! into one unified score, confidence, severity, and a deduplicated split
//! of recommendations vs. priority actions. The normalization constants
//! here are tuning knobs, kept named so they can be recalibrated without
//! touching matching logic.

use crate::lexicon::LexiconTables;
use crate::models::{AnalysisResult, MatchRecord, MathematicalAnalysis, Severity, SeveritySummary};
use rustc_hash::FxHashSet;

/// Sum of per-match 0–10 scores that saturates the traditional branch.
pub const TRADITIONAL_NORMALIZER: f64 = 100.0;

/// Fixed baseline confidence in the lexical method, averaged with the
/// mathematical branch's confidence.
pub const LEXICAL_CONFIDENCE_BASELINE: f64 = 0.8;

/// Unified severity thresholds, on the 0–1 unified scale (intentionally a
/// different scale than the 0–10 per-match tiers).
pub const CRITICAL_UNIFIED: f64 = 0.75;
pub const HIGH_UNIFIED: f64 = 0.5;
pub const MEDIUM_UNIFIED: f64 = 0.25;

/// Severity tier for a 0–1 unified score.
pub fn severity_for_unified(score: f64) -> Severity {
    if score >= CRITICAL_UNIFIED {
        Severity::Critical
    } else if score >= HIGH_UNIFIED {
        Severity::High
    } else if score >= MEDIUM_UNIFIED {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn push_unique(items: &mut Vec<String>, seen: &mut FxHashSet<String>, value: String) {
    if seen.insert(value.clone()) {
        items.push(value);
    }
}

/// Merge both branches into the unified verdict.
pub fn fuse(
    tables: &LexiconTables,
    matches: &[MatchRecord],
    mathematical: &MathematicalAnalysis,
) -> AnalysisResult {
    let traditional = if matches.is_empty() {
        0.0
    } else {
        (matches.iter().map(|m| m.score).sum::<f64>() / TRADITIONAL_NORMALIZER).min(1.0)
    };

    let unified_score = (traditional + mathematical.total_score) / 2.0;
    let confidence = (mathematical.confidence + LEXICAL_CONFIDENCE_BASELINE) / 2.0;
    let severity = severity_for_unified(unified_score);

    let mut detected_terms = Vec::new();
    let mut categories = Vec::new();
    let mut recommendations = Vec::new();
    let mut priority_actions = Vec::new();
    let mut seen_terms = FxHashSet::default();
    let mut seen_categories = FxHashSet::default();
    let mut seen_recommendations = FxHashSet::default();
    let mut seen_priorities = FxHashSet::default();

    // Every finding from either branch routes its suggestion by its own
    // severity: high/critical to priority actions, the rest to
    // recommendations.
    for m in matches {
        push_unique(&mut detected_terms, &mut seen_terms, m.matched_text.clone());
        push_unique(&mut categories, &mut seen_categories, m.category.clone());
        let suggestion = tables.suggestion(&m.category, &m.matched_text);
        if m.severity.is_priority() {
            push_unique(&mut priority_actions, &mut seen_priorities, suggestion);
        } else {
            push_unique(&mut recommendations, &mut seen_recommendations, suggestion);
        }
    }
    for p in &mathematical.patterns {
        push_unique(&mut detected_terms, &mut seen_terms, p.matched_text.clone());
        push_unique(&mut categories, &mut seen_categories, p.category.clone());
        let suggestion = tables.suggestion(&p.category, &p.matched_text);
        if p.severity.is_priority() {
            push_unique(&mut priority_actions, &mut seen_priorities, suggestion);
        } else {
            push_unique(&mut recommendations, &mut seen_recommendations, suggestion);
        }
    }

    AnalysisResult {
        unified_score,
        confidence,
        severity,
        detected_terms,
        categories,
        recommendations,
        priority_actions,
        summary: SeveritySummary::from_matches(matches),
        matches: matches.to_vec(),
    }
}
