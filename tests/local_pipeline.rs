//! End-to-end tests for the local analysis path
//!
//! Drives the example news article through segmentation, matching,
//! extraction, and classification, then through aggregation and rendering,
//! without any network access.

use statlens::ai::parse_annotation;
use statlens::extract::{extract_statistics, split_sentences};
use statlens::models::{AnalysisResult, AnalysisSummary, StatCategory};
use statlens::report::{group_issues, recommendation};
use std::path::PathBuf;

fn sample_article() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_article.txt");
    std::fs::read_to_string(path).expect("fixture article present")
}

#[test]
fn local_path_finds_the_articles_statistics() {
    let article = sample_article();
    let claims = extract_statistics(&article);

    assert!(
        claims.len() >= 5,
        "expected at least 5 claims, got {}: {:#?}",
        claims.len(),
        claims
    );
    assert!(claims
        .iter()
        .any(|c| c.category == StatCategory::Percentage));
    assert!(claims.iter().any(|c| c.category == StatCategory::Increase));

    // the headline figure survives extraction
    assert!(claims.iter().any(|c| c.numbers.contains(&95.0)));
}

#[test]
fn segmentation_drops_fragments_but_keeps_sentences() {
    let article = sample_article();
    let sentences = split_sentences(&article);
    assert!(sentences.iter().all(|s| s.chars().count() >= 10));
    // the decimal point in 99.2% splits that sentence into two fragments
    assert!(sentences.iter().any(|s| s.ends_with("보급률이 99")));
}

#[test]
fn local_result_feeds_aggregation_and_recommendation() {
    let article = sample_article();
    let result = AnalysisResult::from_statistics(extract_statistics(&article));
    let summary = AnalysisSummary::from_result(&result);

    assert_eq!(summary.errors, 0);
    assert_eq!(summary.simpson_risks, 0);
    assert!(recommendation(summary.errors, summary.simpson_risks)
        .contains("comparatively reliable"));
}

#[test]
fn remote_reply_flows_through_grouping() {
    // A well-formed fenced reply, as the model returns it
    let payload = r#"```json
{
  "statistics": [
    {"sentence": "보급률이 95%에 달했다", "numbers": [95.0], "type": "percentage"}
  ],
  "errors": [
    {"type": "vague reference period", "description": "작년 without a concrete range", "sentence": "작년 한국의 스마트폰 보급률이 95%에 달했다", "severity": "medium"},
    {"type": "vague reference period", "description": "전년 without a concrete range", "sentence": "전년 대비 5% 증가", "severity": "low"},
    {"type": "correlation as causation", "description": "상관관계 stated, causal reading implied", "sentence": "상관관계를 보인다", "severity": "high"}
  ],
  "simpsonRisks": [
    {"type": "whole-versus-subgroup comparison", "description": "전체 평균 vs 연령대별 보급률", "sentence": "전 세계 평균인 78%", "severity": "medium"}
  ]
}
```"#;

    let result = parse_annotation(payload);
    let summary = AnalysisSummary::from_result(&result);
    assert_eq!(summary.errors, 3);
    assert_eq!(summary.simpson_risks, 1);

    let error_groups = group_issues(&result.errors);
    assert_eq!(error_groups.len(), 2);
    assert_eq!(error_groups[0].category, "vague reference period");
    assert_eq!(error_groups[0].count, 2);
    // representative severity is the first seen, not the highest
    assert_eq!(error_groups[0].severity.to_string(), "medium");

    assert!(recommendation(summary.errors, summary.simpson_risks).contains("Both"));

    let rendered = statlens::report::text::render(&result);
    assert!(rendered.contains("vague reference period"));
    assert!(rendered.contains("2 sentence(s) affected"));
}

#[test]
fn malformed_remote_reply_degrades_to_fallback_not_failure() {
    let result = parse_annotation("Sorry, as a language model I cannot produce JSON today.");
    let summary = AnalysisSummary::from_result(&result);
    assert_eq!(summary.statistics, 1);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.simpson_risks, 0);

    // the substitute result renders like any other
    let rendered = statlens::report::text::render(&result);
    assert!(rendered.contains("analysis error"));
}
