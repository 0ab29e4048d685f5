//! CLI command definitions and handlers

mod analyze;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Statlens - statistics critique for news articles
///
/// Extracts statistical claims from an article and, with --remote, asks
/// Gemini to flag statistical errors and Simpson's paradox risks.
#[derive(Parser, Debug)]
#[command(name = "statlens")]
#[command(
    version,
    about = "Statistics critique for news articles — extract claims, flag errors and Simpson's paradox risks",
    long_about = "Statlens reads a news article and produces a structured critique: the \
statistical claims it makes, flagged statistical errors, and flagged Simpson's \
paradox risks (aggregates that can hide or reverse subgroup trends).\n\n\
The default path is fully local and deterministic: regex shape patterns find \
and classify statistic sentences, offline. With --remote the article is sent \
to Gemini for the full critique (requires GEMINI_API_KEY).",
    after_help = "\
Examples:
  statlens article.txt                 Local claim extraction
  statlens article.txt --format json   JSON output for scripting
  statlens - < article.txt             Read the article from stdin
  statlens article.txt --remote        Full critique via Gemini

The remote path reads GEMINI_API_KEY from the environment."
)]
pub struct Cli {
    /// Path to the article text file ('-' = stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Send the article to Gemini for error and paradox-risk analysis
    #[arg(long)]
    pub remote: bool,

    /// Gemini model to use with --remote
    #[arg(long, env = "STATLENS_MODEL")]
    pub model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

pub fn run(cli: Cli) -> Result<()> {
    analyze::run(&cli)
}
