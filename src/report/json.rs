//! JSON reporter for scripting and downstream tooling

use crate::models::{AnalysisResult, AnalysisSummary};
use crate::report::{group_issues, recommendation, IssueGroup, DISCLAIMER};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: AnalysisSummary,
    result: &'a AnalysisResult,
    error_groups: Vec<IssueGroup>,
    simpson_risk_groups: Vec<IssueGroup>,
    recommendation: &'static str,
    disclaimer: &'static str,
}

/// Render an analysis as pretty-printed JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    let summary = AnalysisSummary::from_result(result);
    let report = JsonReport {
        summary,
        result,
        error_groups: group_issues(&result.errors),
        simpson_risk_groups: group_issues(&result.simpson_risks),
        recommendation: recommendation(summary.errors, summary.simpson_risks),
        disclaimer: DISCLAIMER,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
