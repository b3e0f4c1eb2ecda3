//! Text generation providers (Gemini, OpenAI-compatible)

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::{ClientConfig, Provider};
use crate::error::LlmError;
use crate::gemini::GeminiClient;

/// Anything that can turn a prompt into a completion
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Build a provider client, or `None` when AI features must stay disabled.
///
/// A missing or empty key is a supported state and only warns. A client
/// that fails to build is logged as an error and treated the same way.
pub fn initialize(config: &ClientConfig) -> Option<Arc<dyn TextGenerator>> {
    let Some(api_key) = config.api_key.as_deref().filter(|k| !k.is_empty()) else {
        warn!("Text generation API key not found. AI features are disabled.");
        return None;
    };

    let http = match build_http_client(config.timeout) {
        Ok(http) => http,
        Err(e) => {
            error!(
                "Failed to initialize {} client. AI features will be disabled: {}",
                config.provider, e
            );
            return None;
        }
    };

    let model = config
        .model
        .clone()
        .unwrap_or_else(|| config.provider.default_model().to_string());
    let base_url = config
        .base_url
        .as_deref()
        .unwrap_or(config.provider.default_base_url())
        .trim_end_matches('/')
        .to_string();

    debug!("Text generation enabled: {} ({})", config.provider, model);

    let client: Arc<dyn TextGenerator> = match config.provider {
        Provider::Gemini => Arc::new(GeminiClient::new(http, api_key.to_string(), model, base_url)),
        Provider::OpenAi => Arc::new(OpenAiClient::new(http, api_key.to_string(), model, base_url)),
    };
    Some(client)
}

fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, LlmError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| LlmError::Client(e.to_string()))
}

/// Send a JSON request and decode a JSON response, mapping every failure
/// into an [`LlmError`]
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, LlmError> {
    let response = request
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| LlmError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let response_text = response
        .text()
        .await
        .map_err(|e| LlmError::Http(format!("Failed to read response: {}", e)))?;

    debug!("Provider raw response: {}", response_text);

    serde_json::from_str(&response_text).map_err(|e| LlmError::Parse(e.to_string()))
}

/// Client for OpenAI-compatible chat completion APIs (OpenAI, Azure AI Foundry, etc.)
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Content of the first choice, if any
    pub fn text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

impl OpenAiClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            model,
            base_url,
        }
    }

    pub fn request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = self.request(prompt);
        debug!("Sending chat completion request to {}", self.model);

        let url = format!("{}/chat/completions", self.base_url);
        let response: ChatResponse = send_json(
            self.http
                .post(&url)
                .header("api-key", &self.api_key)
                .bearer_auth(&self.api_key)
                .json(&request),
        )
        .await?;

        response.text().ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_without_key_is_disabled() {
        assert!(initialize(&ClientConfig::default()).is_none());
        assert!(initialize(&ClientConfig::new(Provider::Gemini, Some(String::new()))).is_none());
    }

    #[test]
    fn test_initialize_with_key() {
        let config = ClientConfig {
            timeout: Some(Duration::from_secs(5)),
            ..ClientConfig::new(Provider::OpenAi, Some("sk-test".to_string()))
        };
        assert!(initialize(&config).is_some());
        assert!(initialize(&ClientConfig::new(Provider::Gemini, Some("key".to_string()))).is_some());
    }

    #[test]
    fn test_chat_request_shape() {
        let client = OpenAiClient::new(
            reqwest::Client::new(),
            "key".to_string(),
            "gpt-4o-mini".to_string(),
            "http://localhost".to_string(),
        );
        let value = serde_json::to_value(client.request("xin chào")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "xin chào"}]
            })
        );
    }

    #[test]
    fn test_chat_response_text() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "1. Mẹo"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("1. Mẹo"));

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.text(), None);
    }
}
