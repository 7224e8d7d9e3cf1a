//! Domain-specific error types for ideastorm

use thiserror::Error;

/// Main error type for the AI idea-generation orchestrator
#[derive(Error, Debug)]
pub enum IdeaStormError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Transport-level failure or non-2xx reply from the completion
    /// endpoint. `status` is None when the request never got a response.
    #[error("Upstream error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for IdeaStormError {
    fn from(err: anyhow::Error) -> Self {
        IdeaStormError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IdeaStormError {
    fn from(err: serde_json::Error) -> Self {
        IdeaStormError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for IdeaStormError {
    fn from(err: reqwest::Error) -> Self {
        IdeaStormError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Result type alias for ideastorm operations
pub type Result<T> = std::result::Result<T, IdeaStormError>;
