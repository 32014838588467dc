//! Gemini `generateContent` backend over blocking HTTP
//!
//! Requests JSON output (`responseMimeType = application/json`) and returns the
//! text of the first candidate part. Decoding into an analysis result happens
//! one level up.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::backend::{AiBackend, BackendError};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// AiBackend that talks to the Gemini REST API
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Http(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
    }
}

impl AiBackend for GeminiBackend {
    fn send_prompt(&self, prompt: &str) -> Result<String, BackendError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending analysis request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let truncated: String = body.chars().take(300).collect();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: truncated,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        parsed.into_text().ok_or(BackendError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":1}"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_text().is_none());

        let blocked = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(blocked).unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn test_endpoint_uses_model() {
        let backend = GeminiBackend::new("key", "gemini-2.5-flash", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(backend.model(), "gemini-2.5-flash");
    }
}
