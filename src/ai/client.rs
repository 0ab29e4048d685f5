//! Gemini generateContent API client
//!
//! Uses ureq (sync HTTP) — no async runtime needed. The remote call is the
//! only blocking point in an analysis; it is not retried or cancelled.

use crate::ai::{AiError, AiResult};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const ENV_KEY: &str = "GEMINI_API_KEY";
const SIGNUP_URL: &str = "https://aistudio.google.com/app/apikey";

/// Generation settings sent with every request
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: 2048,
            temperature: 0.1,
            top_k: 1,
            top_p: 1.0,
        }
    }
}

/// Gemini client — sync HTTP via ureq
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: String,
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // We handle status codes ourselves
        .timeout_global(Some(std::time::Duration::from_secs(120))) // LLM calls can be slow
        .build()
        .new_agent()
}

impl GeminiClient {
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            agent: make_agent(),
        }
    }

    pub fn from_env() -> AiResult<Self> {
        Self::from_env_with_config(GeminiConfig::default())
    }

    pub fn from_env_with_config(config: GeminiConfig) -> AiResult<Self> {
        let api_key = env::var(ENV_KEY).map_err(|_| AiError::MissingApiKey {
            env_var: ENV_KEY.to_string(),
            signup_url: SIGNUP_URL.to_string(),
        })?;
        Ok(Self::new(config, api_key))
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.config.model)
    }

    /// Send one prompt and return the text payload of the first candidate.
    ///
    /// A call that does not complete or returns a non-success status is an
    /// `Api` error; a success whose envelope lacks
    /// `candidates[0].content.parts[0].text` is a `Protocol` error.
    pub fn generate(&self, prompt: &str) -> AiResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        // The Gemini API takes the key as a query parameter, not a header
        let url = format!("{}?key={}", self.endpoint(), self.api_key);

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| AiError::Api {
                status: 0,
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let error_text = response.into_body().read_to_string().unwrap_or_default();
            return Err(AiError::Api {
                status,
                message: error_text,
            });
        }

        let resp: GenerateResponse = response
            .into_body()
            .read_json()
            .map_err(|e| AiError::Protocol(e.to_string()))?;

        extract_payload(resp)
    }
}

/// `candidates[0].content.parts[0].text`; absence at any level is a
/// protocol error.
fn extract_payload(resp: GenerateResponse) -> AiResult<String> {
    resp.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| AiError::Protocol("no candidate text in response".to_string()))
}

// Gemini API types
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}
