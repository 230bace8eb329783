//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, Severity};
use anyhow::Result;

/// Severity colors (ANSI escape codes)
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m", // Red
        Severity::High => "\x1b[91m",     // Light red
        Severity::Medium => "\x1b[33m",   // Yellow
        Severity::Low => "\x1b[34m",      // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render result as formatted terminal output
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();

    let sev_c = severity_color(&result.severity);
    out.push_str(&format!("\n{BOLD}Biaslens Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{:.2}{RESET}  Confidence: {:.2}  Severity: {sev_c}{BOLD}{}{RESET}\n\n",
        result.unified_score, result.confidence, result.severity
    ));

    // Matches
    let s = &result.summary;
    out.push_str(&format!("{BOLD}MATCHES{RESET} ({} total)\n", s.total));
    let mut summary_parts = Vec::new();
    if s.critical > 0 {
        summary_parts.push(format!("\x1b[31m{} critical{RESET}", s.critical));
    }
    if s.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", s.high));
    }
    if s.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", s.medium));
    }
    if s.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", s.low));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n", summary_parts.join(" | ")));
    }

    if !result.matches.is_empty() {
        out.push_str(&format!(
            "{DIM}  SEV   SCORE  x  TYPE        CATEGORY         TERM{RESET}\n"
        ));
        for m in &result.matches {
            let color = severity_color(&m.severity);
            out.push_str(&format!(
                "  {color}{}{RESET}  {:>5.1}  {}  {:<10}  {:<15}  {}\n",
                severity_tag(&m.severity),
                m.score,
                m.occurrence_count,
                m.match_type.to_string(),
                m.category,
                m.matched_text
            ));
        }
    }
    out.push('\n');

    if !result.priority_actions.is_empty() {
        out.push_str(&format!("{BOLD}PRIORITY ACTIONS{RESET}\n"));
        for action in &result.priority_actions {
            out.push_str(&format!("  \x1b[91m!{RESET} {action}\n"));
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
        for rec in &result.recommendations {
            out.push_str(&format!("  {DIM}-{RESET} {rec}\n"));
        }
        out.push('\n');
    }

    if result.matches.is_empty() && result.detected_terms.is_empty() {
        out.push_str(&format!("{DIM}No bias indicators found.{RESET}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResult;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_text_render_contains_sections() {
        let rendered = render(&test_result()).expect("render text");
        assert!(rendered.contains("Biaslens Analysis"));
        assert!(rendered.contains("MATCHES"));
        assert!(rendered.contains("PRIORITY ACTIONS"));
        assert!(rendered.contains("RECOMMENDATIONS"));
        assert!(rendered.contains("them people"));
    }

    #[test]
    fn test_text_render_empty_result() {
        let rendered = render(&AnalysisResult::default()).expect("render text");
        assert!(rendered.contains("No bias indicators found."));
    }
}
