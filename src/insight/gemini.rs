//! Gemini REST backend for the insight advisor.
//!
//! Talks to the `models/{model}:generateContent` endpoint. Configuration
//! comes from the environment:
//! - `GEMINI_API_KEY` (or the legacy `API_KEY`): credential, required
//! - `SALETRACK_INSIGHT_MODEL`: model override

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SaleTrackError};

use super::InsightBackend;

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini-backed insight client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Points the client at a different server, mainly for tests.
    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Builds a client from the environment. `GEMINI_API_KEY` wins over the
    /// legacy `API_KEY`; returns None when neither is set.
    pub fn from_env(model_override: Option<&str>) -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()?;
        let model = model_override
            .map(str::to_string)
            .or_else(|| std::env::var("SALETRACK_INSIGHT_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Some(Self::new(&api_key, &model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InsightBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .http_client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SaleTrackError::InsightError(format!(
                "Gemini API error {status}: {body}"
            )));
        }

        let reply: GenerateContentResponse = response.json().await?;
        Ok(reply.text())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty when absent.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Sales are "}, {"text": "steady."}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "Sales are steady.");
    }

    #[test]
    fn response_without_candidates_is_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn candidate_without_content_is_empty_text() {
        let json = r#"{"candidates": [{}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GeminiClient::with_base_url("http://localhost:9999/", "key", DEFAULT_MODEL);
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.model(), DEFAULT_MODEL);
    }
}
