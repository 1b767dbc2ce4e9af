use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Completion service error: {0}")]
    Completion(String),

    #[error("Malformed intent: {0}")]
    MalformedIntent(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
