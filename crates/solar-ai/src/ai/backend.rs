//! Text-generation backend abstraction

use thiserror::Error;

/// Failures at the AI service boundary.
///
/// None of these escape `analyze_records`; they are logged and turned into a
/// fallback result.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("AI service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Empty response from AI service")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Anything that turns a prompt into generated text
pub trait AiBackend {
    fn send_prompt(&self, prompt: &str) -> Result<String, BackendError>;
}
