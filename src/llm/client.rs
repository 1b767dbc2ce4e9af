//! Async LLM client for intent extraction
//!
//! Model-agnostic HTTP client for calling completion APIs.
//! Supports both Anthropic and OpenAI-compatible APIs (DeepSeek, etc).
//! Requests are shaped for short, JSON-only answers.

use crate::core::config::LlmConfig;
use crate::core::error::{CommandError, Result};
use crate::llm::CompletionService;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API format type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFormat {
    Anthropic,
    OpenAI,
}

/// Async LLM client for making API calls
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    api_format: ApiFormat,
}

impl LlmClient {
    /// Create a new LLM client from settings and an API key
    pub fn new(api_key: String, config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CommandError::Completion(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            api_format: Self::detect_api_format(&config.api_url),
        })
    }

    /// Detect API format from URL
    fn detect_api_format(url: &str) -> ApiFormat {
        if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else {
            // DeepSeek, OpenAI, and other compatible APIs use OpenAI format
            ApiFormat::OpenAI
        }
    }

    /// Create a client using `LLM_API_KEY` from the environment
    pub fn from_env(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| CommandError::Config("LLM_API_KEY not set".into()))?;
        Self::new(api_key, config)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete_anthropic(&self, system: &str, user: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: system.into(),
            messages: vec![Message {
                role: "user".into(),
                content: user.into(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CommandError::Completion(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CommandError::Completion(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let completion: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| CommandError::Completion(e.to_string()))?;

        // A missing content block is an empty answer, not a transport error
        Ok(completion
            .content
            .into_iter()
            .next()
            .map(|c| c.text)
            .unwrap_or_default())
    }

    async fn complete_openai(&self, system: &str, user: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object".into(),
            },
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CommandError::Completion(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CommandError::Completion(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let completion: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| CommandError::Completion(e.to_string()))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!(model = %self.model, format = ?self.api_format, "Requesting completion");
        match self.api_format {
            ApiFormat::Anthropic => self.complete_anthropic(system, user).await,
            ApiFormat::OpenAI => self.complete_openai(system, user).await,
        }
    }
}

// Anthropic API format
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

// OpenAI-compatible API format (DeepSeek, OpenAI, etc.)
#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// Shared
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}
