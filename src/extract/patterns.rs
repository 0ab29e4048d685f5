//! Statistic shape patterns
//!
//! Six lexical/numeric shapes decide whether a sentence asserts a
//! quantitative fact. Lexemes cover the Korean news corpus this tool grew
//! up on plus English equivalents.

use regex::Regex;
use std::sync::OnceLock;

static CLAIM_SHAPES: OnceLock<Vec<Regex>> = OnceLock::new();

/// The six shapes tested by the matcher.
///
/// The plain-number shape here is broader than the extractor's: a bare
/// number is enough to make a sentence worth flagging, but only unit-ed
/// values are extracted as tokens.
fn claim_shapes() -> &'static Vec<Regex> {
    CLAIM_SHAPES.get_or_init(|| {
        vec![
            // percent-suffixed value
            Regex::new(r"\d+(?:\.\d+)?%").expect("valid regex"),
            // plain value, optional thousands separators
            Regex::new(r"\d+(?:,\d+)*(?:\.\d+)?").expect("valid regex"),
            // trend word then value
            Regex::new(
                r"(?:증가|감소|상승|하락|늘어|줄어|increased?|decreased?|rose|risen|fell|fallen|dropped|grew)\s*(?:by\s+)?\d+(?:\.\d+)?%?",
            )
            .expect("valid regex"),
            // multiplier
            Regex::new(r"\d+(?:\.\d+)?\s*(?:배|倍|times|fold)").expect("valid regex"),
            // aggregate word then value
            Regex::new(
                r"(?:평균|중간값|최대|최소|총합|average|mean|median|maximum|minimum|total|sum)\s*(?:of\s+)?\d+(?:,\d+)*(?:\.\d+)?",
            )
            .expect("valid regex"),
            // ratio A:B
            Regex::new(r"\d+(?:\.\d+)?:\d+(?:\.\d+)?").expect("valid regex"),
        ]
    })
}

/// True if the sentence matches at least one statistic shape.
///
/// Every shape is tested with a stateless `is_match`; no cursor state is
/// carried between shapes or sentences.
pub fn is_statistic(sentence: &str) -> bool {
    claim_shapes().iter().any(|shape| shape.is_match(sentence))
}
