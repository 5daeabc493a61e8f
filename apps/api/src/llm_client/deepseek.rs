//! Deepseek backend — OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{build_http_client, parse_model_json, JsonGenerator, LlmError};

const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
/// The model used for all analysis calls against Deepseek.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "deepseek-coder";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct DeepseekClient {
    client: Client,
    api_key: String,
}

impl DeepseekClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_http_client(),
            api_key,
        }
    }
}

#[async_trait]
impl JsonGenerator for DeepseekClient {
    async fn generate_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            // json_object mode: the API guarantees syntactically valid JSON output
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(DEEPSEEK_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or(LlmError::EmptyContent)?;

        debug!("Deepseek call succeeded ({} bytes of content)", content.len());
        parse_model_json(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: MODEL,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "deepseek-coder");
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_chat_response_extracts_content() {
        let json = r#"{
            "id": "cmpl-1",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "{\"fit_score_percent\": 72}"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 900, "completion_tokens": 120}
        }"#;
        let chat: ChatResponse = serde_json::from_str(json).unwrap();
        let content = chat.choices[0].message.content.as_deref().unwrap();
        assert!(content.contains("fit_score_percent"));
    }

    #[test]
    fn test_chat_response_null_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let chat: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(chat.choices[0].message.content.is_none());
    }

    #[test]
    fn test_api_error_envelope_parses() {
        let json = r#"{"error": {"message": "Invalid API key", "type": "authentication_error"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.message, "Invalid API key");
    }
}
