pub mod config;
pub mod error;
pub mod types;

pub use config::{AssistantConfig, LlmConfig};
pub use error::{CommandError, Result};
