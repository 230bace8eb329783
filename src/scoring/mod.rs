//! Weighted scoring of raw lexical matches
//!
//! # Scoring Formula
//!
//! ```text
//! base  = (type_weight × category_weight) / 2
//! score = clamp(base × boosts, 0, 10)   rounded to one decimal
//!
//! type_weight:     individual 1.2, phrase 1.8, pattern 2.5
//! category_weight: per-category multiplier, default 1.5
//! boosts:          ×1.3 absolutist, ×1.2 perfectionism, ×1.2 urgency
//!                  (independent, multiplicative)
//! ```
//!
//! Matches scoring below 1.0 are discarded as noise. Severity tiers on the
//! retained 0–10 score: ≥7.5 critical, ≥5.0 high, ≥2.5 medium, else low.
//!
//! All weights and thresholds are named constants in [`weights`] so they
//! can be recalibrated without touching matching logic.

mod scorer;
pub mod weights;

pub use scorer::{score_match, score_matches, severity_for_score};
