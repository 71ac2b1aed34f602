//! Minimal client for a Gemini-style generative-language endpoint.
//!
//! Both adapters (rate lookup, receipt extraction) funnel through
//! [`GenAiClient::generate_json`]: one blocking `generateContent` call with
//! `application/json` as the response mime type, returning the first
//! candidate's text parsed as JSON. Retries and timeouts beyond reqwest's
//! defaults are left to the caller, which treats the whole call as
//! fire-and-forget enrichment.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const API_KEY_VAR: &str = "GENAI_API_KEY";

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("GENAI_API_KEY is not set")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generate call failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("model returned no usable candidate: {detail}")]
    MalformedResponse { detail: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: &'a [Part],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

/// One part of the prompt: plain text or an inline base64 image.
#[derive(Serialize)]
pub enum Part {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData", rename_all = "camelCase")]
    InlineData { mime_type: String, data: String },
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

pub struct GenAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key,
        }
    }

    /// Reads the API key from `GENAI_API_KEY`.
    pub fn from_env() -> Result<Self, GenAiError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| GenAiError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one generate call and parses the reply as JSON.
    pub fn generate_json(&self, parts: &[Part]) -> Result<Value, GenAiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: [RequestContent { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        tracing::debug!(model = %self.model, part_count = parts.len(), "Sending generate call");
        let response = self.http.post(&url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json()?;
        let text = reply
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| GenAiError::MalformedResponse {
                detail: "empty candidate list".to_owned(),
            })?;

        serde_json::from_str(text).map_err(|err| GenAiError::MalformedResponse {
            detail: err.to_string(),
        })
    }
}
