//! Result aggregation, recommendation, and rendering

pub mod json;
pub mod text;

use crate::models::{FlaggedIssue, Severity};
use serde::Serialize;

/// One category of flagged issues, summarized for display
///
/// The representative description and severity come from the first item
/// seen in the category; later members may disagree and are reflected only
/// in the count.
#[derive(Debug, Clone, Serialize)]
pub struct IssueGroup {
    pub category: String,
    pub description: String,
    pub severity: Severity,
    pub count: usize,
}

/// Group flagged issues by category, preserving first-seen category order.
pub fn group_issues(issues: &[FlaggedIssue]) -> Vec<IssueGroup> {
    let mut groups: Vec<IssueGroup> = Vec::new();
    for issue in issues {
        match groups.iter_mut().find(|g| g.category == issue.category) {
            Some(group) => group.count += 1,
            None => groups.push(IssueGroup {
                category: issue.category.clone(),
                description: issue.description.clone(),
                severity: issue.severity,
                count: 1,
            }),
        }
    }
    groups
}

/// Fixed disclaimer appended to every recommendation.
pub const DISCLAIMER: &str =
    "This analysis was produced by an automated language model and is not authoritative.";

/// Select the guidance message for the given total issue counts.
///
/// Decision table over total item counts (not group counts).
pub fn recommendation(errors: usize, simpson_risks: usize) -> &'static str {
    match (errors, simpson_risks) {
        (0, 0) => {
            "The statistics in this article appear comparatively reliable. Stay critical anyway."
        }
        (1.., 1..) => {
            "Both statistical errors and Simpson's paradox risks were detected. Verify the raw \
             data and the methodology before trusting any figure."
        }
        (1.., 0) => {
            "Parts of this article need careful statistical interpretation. Verify the data \
             source and how it was collected."
        }
        (0, 1..) => {
            "A Simpson's paradox risk was detected. Examine the subgroup-level data, not just \
             the aggregate."
        }
    }
}
