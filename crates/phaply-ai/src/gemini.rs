//! HTTP client for the Google Generative Language API.
//!
//! Two calls back the search path: `embedContent` turns article and query
//! text into vectors, `generateContent` produces the advisory explanation.
//! Models and generation settings match the service's calibration:
//! `gemini-embedding-001` for vectors, `gemini-flash-latest` at
//! temperature 0.3 for advice.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const EMBED_MODEL: &str = "gemini-embedding-001";
const GENERATE_MODEL: &str = "gemini-flash-latest";
const GENERATE_TEMPERATURE: f32 = 0.3;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Gemini API returned no candidates")]
    EmptyResponse,
}

/// Client for Gemini embedding and generation endpoints.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

// ── Wire shapes ──

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    content: Content<'a>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a client against the production Gemini endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (no trailing slash needed).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Embed a single text into a vector.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, AiError> {
        let url = format!("{}/v1beta/models/{}:embedContent", self.base_url, EMBED_MODEL);
        let body = EmbedRequest {
            content: Content {
                parts: vec![Part { text }],
            },
        };

        info!(model = EMBED_MODEL, chars = text.len(), "embedding text");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EmbedResponse = resp.json().await?;
        Ok(parsed.embedding.values)
    }

    /// Generate a completion for the given prompt.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GENERATE_MODEL
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATE_TEMPERATURE,
            },
        };

        info!(model = GENERATE_MODEL, chars = prompt.len(), "generating advice");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty())
            .ok_or(AiError::EmptyResponse)?;
        Ok(text)
    }
}
