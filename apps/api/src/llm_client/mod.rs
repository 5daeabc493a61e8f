//! LLM client — the single point of entry for all model calls in the service.
//!
//! ARCHITECTURAL RULE: no other module may talk to a vendor API directly.
//! Handlers depend only on the `JsonGenerator` trait; the concrete backend
//! (Deepseek or Gemini) is chosen once at startup from configuration.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod deepseek;
pub mod gemini;

pub use deepseek::DeepseekClient;
pub use gemini::GeminiClient;

/// Failure modes of a model call. Network, provider-side, and decode
/// failures stay distinct here (and in logs) even though the HTTP contract
/// folds them into one 500.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned empty content")]
    EmptyContent,
}

/// Capability interface: generate a JSON value from a system prompt and a
/// user prompt. One call, no retry, no streaming. The prompt must instruct
/// the model to emit JSON; backends additionally request a JSON response
/// format where the vendor supports it.
#[async_trait]
pub trait JsonGenerator: Send + Sync {
    async fn generate_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError>;
}

/// Request timeout applied at client construction. Analysis calls on long
/// CVs routinely take tens of seconds.
pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}

/// Strips a ```json ... ``` (or bare ```) fence wrapping model output.
/// Both vendors are asked for raw JSON but occasionally fence it anyway.
pub(crate) fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"));
    match inner {
        Some(rest) => rest.strip_suffix("```").unwrap_or(rest).trim(),
        None => trimmed,
    }
}

/// Parses the text a model produced into a JSON value.
/// Shared by both backends so fence handling stays in one place.
pub(crate) fn parse_model_json(text: &str) -> Result<Value, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}
