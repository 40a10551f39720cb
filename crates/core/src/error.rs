//! Core Error Types
//!
//! Defines the foundational error types used across the Agent Relay workspace.
//! The application crate wraps these together with transport and
//! configuration failures.

use thiserror::Error;

/// Core error type for the Agent Relay workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The agent event stream failed mid-invocation (transport or decoding).
    /// No partial result is ever produced alongside this error.
    #[error("Stream consumption error: {0}")]
    StreamConsumption(String),

    /// Required caller input was omitted
    #[error("Missing input: {0}")]
    MissingInput(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a stream consumption error
    pub fn stream_consumption(msg: impl Into<String>) -> Self {
        Self::StreamConsumption(msg.into())
    }

    /// Create a missing input error
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Whether the error was caused by the caller rather than the agent side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
