//! OpenAI-compatible remote invoker.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, Together AI, and any
//! endpoint exposing `/v1/chat/completions`.
//!
//! Each AI step becomes one non-streaming chat completion: a fixed system
//! message plus a user message carrying the instruction and the running text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stepflow_core::error::ProviderError;
use stepflow_core::invoker::RemoteInvoker;
use tracing::{debug, warn};

/// System prompt sent with every step.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Follow the user instruction precisely. Output plain text only. Keep the response concise.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An OpenAI-compatible remote invoker.
pub struct OpenAiCompatInvoker {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatInvoker {
    /// Create a new OpenAI-compatible invoker.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create an OpenAI invoker (convenience constructor).
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key)
    }

    /// Create an OpenRouter invoker (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key)
    }

    /// Create an Ollama invoker (convenience constructor).
    pub fn ollama(base_url: Option<&str>) -> Self {
        Self::new(
            "ollama",
            base_url.unwrap_or("http://localhost:11434/v1"),
            "ollama", // Ollama doesn't need a real key
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the chat completion body for one step.
    fn build_request<'a>(
        input: &'a str,
        instruction: &'a str,
        model: &'a str,
        temperature: f32,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Instruction: {instruction}\n\nInput:\n{input}"),
                },
            ],
            temperature,
        }
    }

    /// Pull the first choice's trimmed content out of a response.
    fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(content)
    }
}

#[async_trait]
impl RemoteInvoker for OpenAiCompatInvoker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(
        &self,
        input: &str,
        instruction: &str,
        model: &str,
        temperature: f32,
    ) -> std::result::Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = Self::build_request(input, instruction, model, temperature);

        debug!(provider = %self.name, model, temperature, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(format!(
                        "no response from '{}' after {}s",
                        self.name,
                        REQUEST_TIMEOUT.as_secs()
                    ))
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if !(200..300).contains(&status) {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        Self::extract_content(api_response)
    }
}

// --- OpenAI API types ---

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_constructor() {
        let invoker = OpenAiCompatInvoker::openai("sk-test");
        assert_eq!(invoker.name(), "openai");
        assert!(invoker.base_url().contains("api.openai.com"));
    }

    #[test]
    fn ollama_constructor() {
        let invoker = OpenAiCompatInvoker::ollama(None);
        assert_eq!(invoker.name(), "ollama");
        assert!(invoker.base_url().contains("localhost:11434"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let invoker = OpenAiCompatInvoker::new("custom", "https://llm.example.com/v1/", "k");
        assert_eq!(invoker.base_url(), "https://llm.example.com/v1");
    }

    #[test]
    fn request_body_shape() {
        let body = OpenAiCompatInvoker::build_request("some text", "Summarize", "gpt-4o-mini", 0.3);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(
            json["messages"][1]["content"],
            "Instruction: Summarize\n\nInput:\nsome text"
        );
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn extracts_trimmed_content() {
        let data = r#"{"choices":[{"message":{"role":"assistant","content":"  Done.\n"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert_eq!(OpenAiCompatInvoker::extract_content(parsed).unwrap(), "Done.");
    }

    #[test]
    fn blank_content_is_empty_response() {
        let data = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert!(matches!(
            OpenAiCompatInvoker::extract_content(parsed),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn missing_choices_is_empty_response() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            OpenAiCompatInvoker::extract_content(parsed),
            Err(ProviderError::EmptyResponse)
        ));

        let parsed: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(OpenAiCompatInvoker::extract_content(parsed).is_err());
    }

    #[test]
    fn null_content_is_empty_response() {
        let data = r#"{"choices":[{"message":{"content":null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert!(OpenAiCompatInvoker::extract_content(parsed).is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let invoker = OpenAiCompatInvoker::new("closed", "http://127.0.0.1:9", "k");
        let err = invoker.invoke("x", "y", "m", 0.1).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Network(_) | ProviderError::Timeout(_)
        ));
    }
}
