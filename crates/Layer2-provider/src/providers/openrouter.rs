//! OpenRouter provider implementation

use crate::{error::ProviderError, r#trait::Provider, ChatRequest, Message};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OpenRouter chat completions provider
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create with custom base URL (for OpenAI-compatible endpoints)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set custom timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        self
    }

    fn build_request(&self, request: &ChatRequest) -> OpenRouterRequest<'_> {
        OpenRouterRequest {
            model: &self.model,
            messages: request.messages.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError> {
        let body = self.build_request(&request);

        tracing::debug!(model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_http_status(status.as_u16(), &body));
        }

        let parsed: OpenRouterResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("response contained no choices".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

// ============================================================
// Wire types
// ============================================================

#[derive(Debug, Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Vec<OpenRouterChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: OpenRouterChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let provider = OpenRouterProvider::new("sk-or-test", "deepseek/deepseek-chat");
        let request = ChatRequest::new(vec![Message::user("push my code")]);
        let body = provider.build_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "deepseek/deepseek-chat");
        assert_eq!(json["max_tokens"], 400);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "id": "gen-1",
            "choices": [
                {"message": {"role": "assistant", "content": "  {\"commands\": []}  "}}
            ]
        }"#;
        let parsed: OpenRouterResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.trim(),
            "{\"commands\": []}"
        );
    }
}
