//! Local deterministic extraction pipeline
//!
//! The offline analysis path: regex-driven sentence segmentation, statistic
//! shape matching, numeric token extraction, and category classification.
//! Pure functions, no I/O; the remote annotation path in [`crate::ai`]
//! produces the same claim model from the other direction.

pub mod classify;
pub mod numbers;
pub mod patterns;
pub mod segment;

pub use classify::classify;
pub use numbers::extract_numbers;
pub use patterns::is_statistic;
pub use segment::split_sentences;

use crate::models::StatisticClaim;

/// Run the full local path over raw article text.
pub fn extract_statistics(text: &str) -> Vec<StatisticClaim> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| is_statistic(sentence))
        .map(|sentence| StatisticClaim {
            sentence: sentence.to_string(),
            numbers: extract_numbers(sentence),
            category: classify(sentence),
        })
        .collect()
}
