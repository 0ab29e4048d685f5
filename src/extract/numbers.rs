//! Numeric token extraction

use regex::Regex;
use std::sync::OnceLock;

static VALUE_SHAPES: OnceLock<Vec<Regex>> = OnceLock::new();
static RATIO: OnceLock<Regex> = OnceLock::new();

/// Value-capturing shapes; capture group 1 is the numeric value.
///
/// Unlike the matcher's shapes, the plain-number shape requires a unit
/// counter, so a value like `99.2%` is emitted once by the percent shape
/// and not again bare.
fn value_shapes() -> &'static Vec<Regex> {
    VALUE_SHAPES.get_or_init(|| {
        vec![
            // percent-suffixed value
            Regex::new(r"(\d+(?:\.\d+)?)%").expect("valid regex"),
            // counted quantity
            Regex::new(
                r"(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:명|개|건|회|번|시간|일|년|월|people|respondents|cases|units|hours|days|years|months)",
            )
            .expect("valid regex"),
            // trend word then value
            Regex::new(
                r"(?:증가|감소|상승|하락|늘어|줄어|increased?|decreased?|rose|risen|fell|fallen|dropped|grew)\s*(?:by\s+)?(\d+(?:\.\d+)?)%?",
            )
            .expect("valid regex"),
            // multiplier
            Regex::new(r"(\d+(?:\.\d+)?)\s*(?:배|倍|times|fold)").expect("valid regex"),
            // aggregate word then value
            Regex::new(
                r"(?:평균|중간값|최대|최소|총합|average|mean|median|maximum|minimum|total|sum)\s*(?:of\s+)?(\d+(?:,\d+)*(?:\.\d+)?)",
            )
            .expect("valid regex"),
        ]
    })
}

fn ratio() -> &'static Regex {
    RATIO.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?):(\d+(?:\.\d+)?)").expect("valid regex"))
}

/// Extract every numeric token from a sentence, ordered by match start
/// position across all shapes combined.
///
/// A ratio `A:B` emits both sides as separate tokens. Overlapping matches
/// from different shapes are not deduplicated; `평균 30명` yields `30`
/// twice. Documented limitation, callers display tokens as-is.
pub fn extract_numbers(sentence: &str) -> Vec<f64> {
    let mut tokens: Vec<(usize, f64)> = Vec::new();

    for shape in value_shapes() {
        for caps in shape.captures_iter(sentence) {
            if let Some(m) = caps.get(1) {
                if let Some(value) = parse_value(m.as_str()) {
                    tokens.push((m.start(), value));
                }
            }
        }
    }

    for caps in ratio().captures_iter(sentence) {
        for group in 1..=2 {
            if let Some(m) = caps.get(group) {
                if let Some(value) = parse_value(m.as_str()) {
                    tokens.push((m.start(), value));
                }
            }
        }
    }

    tokens.sort_by_key(|&(start, _)| start);
    tokens.into_iter().map(|(_, value)| value).collect()
}

/// Thousands separators stripped; the percent sign never reaches here
/// (capture groups exclude it).
fn parse_value(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_value_extracted_once() {
        let numbers = extract_numbers("20대의 경우 보급률이 99.2%에 이르렀으며");
        assert_eq!(numbers, vec![99.2]);
    }

    #[test]
    fn test_ratio_emits_both_sides_in_order() {
        assert_eq!(extract_numbers("3:2"), vec![3.0, 2.0]);
    }

    #[test]
    fn test_counted_quantity_with_thousands_separator() {
        let numbers = extract_numbers("설문에는 1,234명이 참여했다고 밝혔습니다");
        assert_eq!(numbers, vec![1234.0]);
    }

    #[test]
    fn test_order_across_shapes() {
        // percent shape then multiplier shape, ordered by position
        let numbers = extract_numbers("점유율은 45%로 경쟁사의 2배 수준입니다");
        assert_eq!(numbers, vec![45.0, 2.0]);
    }

    #[test]
    fn test_overlapping_matches_not_deduplicated() {
        // aggregate shape and counted-quantity shape both capture 30
        let numbers = extract_numbers("하루 평균 30명이 방문했습니다");
        assert_eq!(numbers, vec![30.0, 30.0]);
    }

    #[test]
    fn test_bare_numbers_not_extracted() {
        assert!(extract_numbers("특히 20대의 경우 보급률이 99").is_empty());
    }

    #[test]
    fn test_english_trend_value() {
        let numbers = extract_numbers("ridership increased by 18 in March");
        assert_eq!(numbers, vec![18.0]);
    }
}
