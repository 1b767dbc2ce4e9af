//! Completion service access and intent extraction
//!
//! The completion service only INTERPRETS commands. It never sees the
//! destination directory and never triggers side effects; everything it
//! returns is validated before the rest of the pipeline trusts it.

pub mod client;
pub mod parser;

use crate::core::error::Result;
use async_trait::async_trait;

pub use client::LlmClient;
pub use parser::{ActionType, Intent, IntentExtractor, ParsedIntent};

/// A text-completion capability that can be asked for a JSON answer
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a system instruction and a user message, returning the raw text
    /// of the completion.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
