//! Statlens - statistics critique for news articles
//!
//! Extracts statistical claims from free-text news articles with a local,
//! deterministic regex pipeline, and optionally asks Gemini to flag
//! statistical errors and Simpson's paradox risks. Flagged issues are
//! grouped by category and summarized into a single recommendation.

pub mod ai;
pub mod cli;
pub mod extract;
pub mod models;
pub mod report;
