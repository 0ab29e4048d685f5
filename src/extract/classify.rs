//! Statistic claim classification

use crate::models::StatCategory;
use regex::Regex;
use std::sync::OnceLock;

static DECREASE: OnceLock<Regex> = OnceLock::new();
static INCREASE: OnceLock<Regex> = OnceLock::new();
static AVERAGE: OnceLock<Regex> = OnceLock::new();
static COMPARISON: OnceLock<Regex> = OnceLock::new();

fn decrease() -> &'static Regex {
    DECREASE.get_or_init(|| {
        Regex::new(r"감소|하락|줄어|\b(?:decreased?|declined?|falls?|fell|fallen|drop(?:ped|s)?)\b")
            .expect("valid regex")
    })
}

fn increase() -> &'static Regex {
    INCREASE.get_or_init(|| {
        Regex::new(r"증가|상승|늘어|\b(?:increased?|rises?|rose|risen|grew|grows?|growth|climbed)\b")
            .expect("valid regex")
    })
}

fn average() -> &'static Regex {
    AVERAGE.get_or_init(|| Regex::new(r"평균|중간값|\b(?:average|median)\b").expect("valid regex"))
}

fn comparison() -> &'static Regex {
    COMPARISON.get_or_init(|| {
        Regex::new(r"비교|대비|비해|\b(?:versus|vs|compared?|comparison)\b|\d\s*:\s*\d")
            .expect("valid regex")
    })
}

/// Assign one semantic category to a sentence already known to qualify
/// as a statistic.
///
/// Ordered rules, first match wins. Trend words take precedence over the
/// percent sign: "전년 대비 5% 증가" is an increase, not a percentage.
pub fn classify(sentence: &str) -> StatCategory {
    if decrease().is_match(sentence) {
        StatCategory::Decrease
    } else if increase().is_match(sentence) {
        StatCategory::Increase
    } else if sentence.contains('%') {
        StatCategory::Percentage
    } else if average().is_match(sentence) {
        StatCategory::Average
    } else if comparison().is_match(sentence) {
        StatCategory::Comparison
    } else {
        StatCategory::General
    }
}
