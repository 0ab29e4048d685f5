//! Remote statistical annotation
//!
//! Sends the article to Gemini with a fixed prompt template and parses the
//! structured reply into the result model. BYOK (bring your own key) —
//! the API key is read from the environment, never embedded.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY`: required for the remote path
//!
//! # Example
//!
//! ```rust,ignore
//! use statlens::ai::{Annotator, GeminiClient};
//!
//! let client = GeminiClient::from_env()?;
//! let result = Annotator::new(client).annotate(&article)?;
//! ```

mod annotate;
mod client;

pub use annotate::{build_prompt, parse_annotation, strip_code_fences, Annotator};
pub use client::{GeminiClient, GeminiConfig, DEFAULT_MODEL};

use thiserror::Error;

/// Errors that can occur in the annotation path
///
/// A payload that fails to parse as the result shape is deliberately not an
/// error here; it is absorbed into the fallback result by
/// [`parse_annotation`].
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Missing API key: {env_var} not set. Get your key at {signup_url}")]
    MissingApiKey { env_var: String, signup_url: String },

    #[error("Article text is empty")]
    EmptyInput,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response envelope: {0}")]
    Protocol(String),
}

pub type AiResult<T> = Result<T, AiError>;
