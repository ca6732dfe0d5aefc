use crate::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to parse config {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid upstream resolver: {0}")]
    Upstream(#[from] DomainError),
}
