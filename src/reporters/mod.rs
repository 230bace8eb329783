//! Output reporters
//!
//! Render an `AnalysisResult` for the host surface: colored terminal text
//! or JSON for machine consumption. The engine itself performs no
//! formatting; everything presentational lives here.

pub mod json;
pub mod text;
