//! Prompt construction and reply parsing for the annotation call
//!
//! The model is instructed to return a single JSON object matching
//! [`AnalysisResult`]. Transport and protocol failures surface to the
//! caller; a payload that fails to parse is absorbed into a fixed fallback
//! result so the rest of the pipeline always receives well-formed data.

use crate::ai::client::GeminiClient;
use crate::ai::{AiError, AiResult};
use crate::models::{AnalysisResult, FlaggedIssue, Severity, StatCategory, StatisticClaim};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Runs the remote annotation path end to end.
pub struct Annotator {
    client: GeminiClient,
}

impl Annotator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Annotate an article.
    ///
    /// Blank input is rejected before any network I/O.
    pub fn annotate(&self, article: &str) -> AiResult<AnalysisResult> {
        let article = article.trim();
        if article.is_empty() {
            return Err(AiError::EmptyInput);
        }
        let payload = self.client.generate(&build_prompt(article))?;
        Ok(parse_annotation(&payload))
    }
}

/// Build the fixed annotation prompt: instruction, article, required JSON
/// shape, and the analysis rubric.
pub fn build_prompt(article: &str) -> String {
    format!(
        r#"Analyze the following news article for statistical claims and risks.
Respond with a single JSON object only — no prose, no markdown fences.

Article:
{article}

Respond in exactly this shape:
{{
  "statistics": [
    {{"sentence": "sentence containing a statistic", "numbers": [1.0], "type": "percentage|increase|decrease|comparison|average|general"}}
  ],
  "errors": [
    {{"type": "error type", "description": "what is wrong", "sentence": "the sentence", "severity": "low|medium|high"}}
  ],
  "simpsonRisks": [
    {{"type": "paradox risk type", "description": "why aggregation may mislead", "sentence": "the sentence", "severity": "low|medium|high"}}
  ]}}

Analysis rubric:
1. Statistics: extract every sentence containing numbers, percentages, or rates of change, with its numeric values and type.
2. Statistical errors to flag:
   - sample size not stated
   - correlation presented as causation
   - implausible values (e.g. percentages exceeding 100)
   - vague reference periods ("last year", "in the past" with no concrete range)
3. Simpson's paradox risks to flag:
   - aggregated figures (totals, averages, overall rates)
   - whole-versus-subgroup comparisons (by region, by age group)
   - time-period aggregation (annual or monthly rollups)"#
    )
}

static CODE_FENCES: OnceLock<Regex> = OnceLock::new();

fn code_fences() -> &'static Regex {
    CODE_FENCES.get_or_init(|| Regex::new(r"```json\n?|\n?```").expect("valid regex"))
}

/// Strip surrounding ```` ```json ```` fence markup from a model payload.
pub fn strip_code_fences(payload: &str) -> String {
    code_fences().replace_all(payload, "").trim().to_string()
}

/// Parse the model's text payload into an [`AnalysisResult`].
///
/// Any parse failure is absorbed: the caller gets the fixed fallback result
/// and a warning is logged, so an operator can tell a fallback apart from a
/// genuinely clean analysis.
pub fn parse_annotation(payload: &str) -> AnalysisResult {
    let clean = strip_code_fences(payload);
    match serde_json::from_str(&clean) {
        Ok(result) => result,
        Err(e) => {
            warn!("annotation payload did not parse ({e}); substituting fallback result");
            fallback_result()
        }
    }
}

/// The substitute handed downstream on a malformed payload: one synthetic
/// statistic, one medium-severity analysis-error issue, no paradox risks.
fn fallback_result() -> AnalysisResult {
    AnalysisResult {
        statistics: vec![StatisticClaim {
            sentence: "Analysis encountered an error but a statistical sentence was detected."
                .to_string(),
            numbers: Vec::new(),
            category: StatCategory::General,
        }],
        errors: vec![FlaggedIssue {
            category: "analysis error".to_string(),
            description: "The annotation reply could not be interpreted. Try again shortly."
                .to_string(),
            sentence: "system message".to_string(),
            severity: Severity::Medium,
        }],
        simpson_risks: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::GeminiConfig;

    const VALID_PAYLOAD: &str = r#"{
        "statistics": [{"sentence": "adoption hit 95%", "numbers": [95.0], "type": "percentage"}],
        "errors": [],
        "simpsonRisks": []
    }"#;

    #[test]
    fn test_fenced_payload_parses() {
        let fenced = format!("```json\n{VALID_PAYLOAD}\n```");
        let result = parse_annotation(&fenced);
        assert_eq!(result.statistics.len(), 1);
        assert_eq!(result.statistics[0].category, StatCategory::Percentage);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unfenced_payload_parses() {
        let result = parse_annotation(VALID_PAYLOAD);
        assert_eq!(result.statistics.len(), 1);
    }

    #[test]
    fn test_fence_stripping() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("no fences"), "no fences");
    }

    #[test]
    fn test_invalid_payload_yields_fallback() {
        let result = parse_annotation("I could not analyze this article, sorry!");
        assert_eq!(result.statistics.len(), 1);
        assert_eq!(result.statistics[0].category, StatCategory::General);
        assert!(result.statistics[0].numbers.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].category, "analysis error");
        assert_eq!(result.errors[0].severity, Severity::Medium);
        assert!(result.simpson_risks.is_empty());
    }

    #[test]
    fn test_unknown_category_label_yields_fallback() {
        // A closed enum rejects labels outside the contract
        let payload = r#"{"statistics": [{"sentence": "x is 3 sigma out", "numbers": [3.0], "type": "outlier"}]}"#;
        let result = parse_annotation(payload);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].category, "analysis error");
    }

    #[test]
    fn test_blank_article_rejected_before_network() {
        // Client never sends anything: the key is fake and no server exists
        let annotator = Annotator::new(GeminiClient::new(GeminiConfig::default(), "test-key"));
        assert!(matches!(annotator.annotate("   \n "), Err(AiError::EmptyInput)));
    }

    #[test]
    fn test_prompt_carries_article_and_rubric() {
        let prompt = build_prompt("보급률이 95%에 달했다");
        assert!(prompt.contains("보급률이 95%에 달했다"));
        assert!(prompt.contains("simpsonRisks"));
        assert!(prompt.contains("sample size"));
        assert!(prompt.contains("correlation"));
        assert!(prompt.contains("percentages exceeding 100"));
        assert!(prompt.contains("low|medium|high"));
    }
}
