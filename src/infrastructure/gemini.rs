//! Minimal client for the Gemini generateContent endpoint

use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

use crate::infrastructure::config::Config;

/// Client for the generative-language REST API
///
/// Holds the reqwest client plus everything needed to address the
/// configured model. The base URL is configurable so tests can point the
/// client at a local stub.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base_url.clone(),
        })
    }

    /// Send one prompt and return the raw text of the first candidate.
    ///
    /// Every failure mode (transport, non-success status, deserialization,
    /// missing candidate text) is reduced to a single error whose message
    /// is suitable for on-screen display.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.request_url();
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(eyre!(
                "Gemini API request failed with {status}: {}",
                detail.trim()
            ));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .first_candidate_text()
            .ok_or_else(|| eyre!("Gemini API response contained no candidate text"))
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Wire format: request body for generateContent
#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Wire format: the subset of the generateContent response we consume
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated part text of the first candidate, if any
    fn first_candidate_text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
