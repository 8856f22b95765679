//! Anthropic implementation of the LanguageModel trait.
//!
//! Talks to the Messages API directly over reqwest.
//!
//! # Example
//!
//! ```rust,ignore
//! use discovery::ai::Anthropic;
//! use discovery::security::ModelCredentials;
//!
//! let creds = ModelCredentials::new("sk-ant-...", "claude-3-7-sonnet-20250219");
//! let model = Anthropic::new(creds);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, Result};
use crate::security::credentials::ModelCredentials;
use crate::traits::ai::LanguageModel;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API client.
#[derive(Clone)]
pub struct Anthropic {
    client: Client,
    credentials: ModelCredentials,
    base_url: String,
    max_tokens: u32,
}

impl Anthropic {
    /// Create a client from explicit credentials.
    pub fn new(credentials: ModelCredentials) -> Self {
        let base_url = credentials
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: Client::new(),
            credentials,
            base_url,
            max_tokens: 4000,
        }
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable,
    /// with the default model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| DiscoveryError::Config("ANTHROPIC_API_KEY not set".into()))?;
        Ok(Self::new(ModelCredentials::new(api_key, DEFAULT_MODEL)))
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.credentials.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the response token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }

    async fn messages(&self, system: &str, user: &str) -> Result<String> {
        let request = MessagesRequest {
            model: self.credentials.model.clone(),
            max_tokens: self.max_tokens,
            temperature: 0.0,
            system: system.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: user.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", self.credentials.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DiscoveryError::Model(e.to_string().into()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DiscoveryError::Model(
                format!("Anthropic API error ({}): {}", status, error_text).into(),
            ));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| DiscoveryError::Model(e.to_string().into()))?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| DiscoveryError::Model("No text content in response".into()))
    }
}

#[async_trait]
impl LanguageModel for Anthropic {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.messages(system, user).await
    }
}

// Request/Response types

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let model = Anthropic::new(ModelCredentials::new("sk-ant-test", DEFAULT_MODEL))
            .with_model("claude-3-5-haiku-20241022")
            .with_base_url("https://proxy.internal")
            .with_max_tokens(1000);

        assert_eq!(model.model(), "claude-3-5-haiku-20241022");
        assert_eq!(model.base_url, "https://proxy.internal");
        assert_eq!(model.max_tokens, 1000);
    }

    #[test]
    fn test_base_url_from_credentials() {
        let creds = ModelCredentials::new("sk-ant-test", DEFAULT_MODEL)
            .with_base_url("https://gateway.example.com");
        let model = Anthropic::new(creds);
        assert_eq!(model.base_url, "https://gateway.example.com");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"content":[{"type":"text","text":"https://example.gov"}]}"#;
        let parsed: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.content[0].text, "https://example.gov");
    }
}
