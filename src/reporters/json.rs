//! JSON reporter
//!
//! Outputs the full AnalysisResult as pretty-printed JSON. Useful for
//! machine consumption, piping to jq, or further processing.

use crate::models::AnalysisResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["severity"], "medium");
        assert_eq!(
            parsed["matches"].as_array().expect("matches array").len(),
            2
        );
        assert_eq!(parsed["matches"][1]["type"], "pattern");
    }

    #[test]
    fn test_json_render_compact() {
        let result = test_result();
        let json_str = render_compact(&result).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_empty_result() {
        let result = AnalysisResult::default();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["unified_score"], 0.0);
        assert_eq!(parsed["severity"], "low");
    }
}
