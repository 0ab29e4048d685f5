//! Sentence segmentation

use regex::Regex;
use std::sync::OnceLock;

/// Trimmed fragments shorter than this are not sentences.
const MIN_SENTENCE_CHARS: usize = 10;

static TERMINATORS: OnceLock<Regex> = OnceLock::new();

fn terminators() -> &'static Regex {
    TERMINATORS.get_or_init(|| Regex::new(r"[.!?]+").expect("valid regex"))
}

/// Split raw article text into candidate sentences.
///
/// Runs of `.`, `!`, `?` are treated as one boundary. Fragments under 10
/// trimmed characters (char count, not bytes) are dropped silently. A
/// decimal point inside a number splits too; claims on
/// the surviving fragments still carry their remaining numbers.
pub fn split_sentences(text: &str) -> Vec<&str> {
    terminators()
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}
