//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, AnalysisSummary, Severity};
use crate::report::{group_issues, recommendation, IssueGroup, DISCLAIMER};

/// Severity colors (ANSI escape codes)
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[91m",   // Light red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render an analysis as formatted terminal output
pub fn render(result: &AnalysisResult) -> String {
    let summary = AnalysisSummary::from_result(result);
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Statlens Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Statistics: {BOLD}{}{RESET}  Errors: {BOLD}{}{RESET}  Simpson risks: {BOLD}{}{RESET}\n\n",
        summary.statistics, summary.errors, summary.simpson_risks
    ));

    out.push_str(&format!("{BOLD}STATISTIC CLAIMS{RESET}\n"));
    if result.statistics.is_empty() {
        out.push_str("  No statistical sentences found.\n");
    }
    for claim in &result.statistics {
        let numbers = claim
            .numbers
            .iter()
            .map(|n| format_number(*n))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  \"{}\"\n", claim.sentence));
        out.push_str(&format!(
            "    {DIM}type: {}  numbers: [{}]{RESET}\n",
            claim.category, numbers
        ));
    }
    out.push('\n');

    render_issue_panel(&mut out, "STATISTICAL ERRORS", &group_issues(&result.errors));
    render_issue_panel(
        &mut out,
        "SIMPSON'S PARADOX RISKS",
        &group_issues(&result.simpson_risks),
    );

    out.push_str(&format!("{BOLD}RECOMMENDATION{RESET}\n"));
    out.push_str(&format!(
        "  {}\n",
        recommendation(summary.errors, summary.simpson_risks)
    ));
    out.push_str(&format!("  {DIM}{DISCLAIMER}{RESET}\n"));

    out
}

fn render_issue_panel(out: &mut String, heading: &str, groups: &[IssueGroup]) {
    out.push_str(&format!("{BOLD}{heading}{RESET}\n"));
    if groups.is_empty() {
        out.push_str("  None flagged.\n\n");
        return;
    }
    for group in groups {
        let color = severity_color(&group.severity);
        out.push_str(&format!(
            "  {} {color}[{}]{RESET}\n",
            group.category, group.severity
        ));
        out.push_str(&format!("    {}\n", group.description));
        out.push_str(&format!("    {DIM}{} sentence(s) affected{RESET}\n", group.count));
    }
    out.push('\n');
}

/// Drop the trailing `.0` on whole values so `95.0` prints as `95`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlaggedIssue, StatCategory, StatisticClaim};

    #[test]
    fn test_render_contains_sections_and_counts() {
        let result = AnalysisResult {
            statistics: vec![StatisticClaim {
                sentence: "보급률이 95%에 달했습니다".to_string(),
                numbers: vec![95.0],
                category: StatCategory::Percentage,
            }],
            errors: vec![FlaggedIssue {
                category: "missing sample size".to_string(),
                description: "no sample size given".to_string(),
                sentence: "보급률이 95%에 달했습니다".to_string(),
                severity: Severity::High,
            }],
            simpson_risks: vec![],
        };
        let out = render(&result);
        assert!(out.contains("STATISTIC CLAIMS"));
        assert!(out.contains("missing sample size"));
        assert!(out.contains("numbers: [95]"));
        assert!(out.contains("RECOMMENDATION"));
        assert!(out.contains(DISCLAIMER));
    }

    #[test]
    fn test_render_empty_result() {
        let out = render(&AnalysisResult::default());
        assert!(out.contains("No statistical sentences found"));
        assert!(out.contains("None flagged"));
        assert!(out.contains("comparatively reliable"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(95.0), "95");
        assert_eq!(format_number(99.2), "99.2");
    }
}
