//! Assistant configuration
//!
//! Loaded from a TOML file where every field has a default, so an empty
//! file (or no file at all) yields a usable configuration. Secrets never
//! live in the file: the API key is read from `LLM_API_KEY`.

use crate::core::error::{CommandError, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration for the command assistant
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Token that marks a chat line as a command (e.g. `/cmd gerar embarque`)
    ///
    /// Matched case-insensitively at the start of the line.
    pub trigger: String,

    /// Path used by `navigate` intents that carry no usable target path
    pub default_navigate_path: String,

    /// Completion service settings
    pub llm: LlmConfig,
}

/// Completion service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Endpoint URL. Anthropic URLs select the Anthropic message format,
    /// anything else is treated as OpenAI-compatible.
    pub api_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Upper bound on completion length
    ///
    /// Intents are small JSON objects, so this stays low.
    pub max_tokens: u32,

    /// Sampling temperature. Zero keeps extraction as repeatable as the
    /// service allows.
    pub temperature: f32,

    /// HTTP timeout for a single completion call, in seconds
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            trigger: "/cmd".into(),
            default_navigate_path: "/".into(),
            llm: LlmConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 512,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

impl AssistantConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AssistantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, then apply environment overrides
    ///
    /// `LLM_API_URL` and `LLM_MODEL` take precedence over the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommandError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Apply `LLM_API_URL` / `LLM_MODEL` overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("LLM_API_URL") {
            self.llm.api_url = url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.llm.model = model;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.trigger.trim().is_empty() {
            return Err(CommandError::Config("trigger must not be empty".into()));
        }
        if self.trigger.chars().any(char::is_whitespace) {
            return Err(CommandError::Config(format!(
                "trigger must be a single token, got {:?}",
                self.trigger
            )));
        }
        if !self.default_navigate_path.starts_with('/') {
            return Err(CommandError::Config(format!(
                "default_navigate_path must be absolute, got {:?}",
                self.default_navigate_path
            )));
        }
        Ok(())
    }
}
