//! The analyze command: read, analyze, render

use crate::ai::{Annotator, GeminiClient, GeminiConfig};
use crate::cli::Cli;
use crate::extract;
use crate::models::AnalysisResult;
use crate::report;
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let text = read_article(&cli.input)?;
    if text.trim().is_empty() {
        bail!("article text is empty; supply a news article to analyze");
    }

    let result = if cli.remote {
        annotate_remote(&text, cli.model.clone())?
    } else {
        info!("running local extraction path");
        AnalysisResult::from_statistics(extract::extract_statistics(&text))
    };

    let rendered = match cli.format.as_str() {
        "json" => report::json::render(&result)?,
        _ => report::text::render(&result),
    };
    println!("{rendered}");
    Ok(())
}

fn read_article(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read article from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read article from {}", input.display()))
    }
}

fn annotate_remote(text: &str, model: Option<String>) -> Result<AnalysisResult> {
    let config = match model {
        Some(model) => GeminiConfig {
            model,
            ..Default::default()
        },
        None => GeminiConfig::default(),
    };
    let client = GeminiClient::from_env_with_config(config)?;
    info!(model = client.model(), "running remote annotation path");
    let annotator = Annotator::new(client);
    Ok(annotator.annotate(text)?)
}
