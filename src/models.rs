//! Core data models for statlens
//!
//! These models are shared between the local extraction pipeline, the
//! remote annotation client, and the reporters. `StatisticClaim` and
//! `FlaggedIssue` double as the wire contract for the model's JSON reply.

use serde::{Deserialize, Serialize};

/// Risk level attached to a flagged issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Semantic category of a statistical claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Percentage,
    Increase,
    Decrease,
    Comparison,
    Average,
    #[default]
    General,
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatCategory::Percentage => write!(f, "percentage"),
            StatCategory::Increase => write!(f, "increase"),
            StatCategory::Decrease => write!(f, "decrease"),
            StatCategory::Comparison => write!(f, "comparison"),
            StatCategory::Average => write!(f, "average"),
            StatCategory::General => write!(f, "general"),
        }
    }
}

/// A sentence asserting a quantitative fact
///
/// Produced by the local extraction pipeline or deserialized from the
/// model's reply. `numbers` preserves order of appearance in the sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticClaim {
    pub sentence: String,
    #[serde(default)]
    pub numbers: Vec<f64>,
    #[serde(rename = "type", default)]
    pub category: StatCategory,
}

/// A statistical error or Simpson's-paradox risk flagged by the model
///
/// Structurally identical for both collections; `category` is the model's
/// natural-language issue-type label and serves as the grouping key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedIssue {
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
    pub sentence: String,
    #[serde(default)]
    pub severity: Severity,
}

/// The unit exchanged between the annotation client and the rest of the system
///
/// Always structurally complete: three sequences, possibly empty. The
/// parse-failure fallback guarantees this rather than propagating raw failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub statistics: Vec<StatisticClaim>,
    #[serde(default)]
    pub errors: Vec<FlaggedIssue>,
    #[serde(rename = "simpsonRisks", default)]
    pub simpson_risks: Vec<FlaggedIssue>,
}

impl AnalysisResult {
    /// Result of the local path: statistic claims only, no issue detection.
    pub fn from_statistics(statistics: Vec<StatisticClaim>) -> Self {
        Self {
            statistics,
            ..Default::default()
        }
    }
}

/// The three headline counts shown in the summary tile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub statistics: usize,
    pub errors: usize,
    pub simpson_risks: usize,
}

impl AnalysisSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            statistics: result.statistics.len(),
            errors: result.errors.len(),
            simpson_risks: result.simpson_risks.len(),
        }
    }
}
