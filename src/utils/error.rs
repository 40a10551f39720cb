//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use agent_relay_agent::TransportError;
use agent_relay_core::CoreError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors from the aggregation core (stream consumption, missing input)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Agent transport errors raised before the stream starts
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the caller, not the agent side, caused the failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Core(err) => err.is_client_error(),
            Self::Validation(_) => true,
            _ => false,
        }
    }
}

/// Convert AppError to a string for CLI output
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("missing agent id");
        assert_eq!(err.to_string(), "Configuration error: missing agent id");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::stream_consumption("reset").into();
        assert_eq!(err.to_string(), "Stream consumption error: reset");
    }

    #[test]
    fn test_transport_error_conversion() {
        let err: AppError = TransportError::network("refused").into();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: Network error: refused");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::from(CoreError::missing_input("message")).is_client_error());
        assert!(AppError::validation("bad").is_client_error());
        assert!(!AppError::from(TransportError::network("x")).is_client_error());
        assert!(!AppError::config("x").is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
