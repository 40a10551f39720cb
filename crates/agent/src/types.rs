//! Transport Types
//!
//! Request, error, and stream types shared by every agent transport.

use std::pin::Pin;

use agent_relay_core::streaming::{AdapterError, AgentStreamEvent};
use futures_util::Stream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One invocation of the remote agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub session_id: String,
    pub input_text: String,
    /// Ask the agent to emit trace events (raw output and retrievals)
    pub enable_trace: bool,
}

/// Errors raised by an agent transport.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The agent rejected the request parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Credentials missing or rejected
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Upstream throttling
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// Upstream server error
    #[error("Server error ({status}): {message}")]
    ServerError { message: String, status: u16 },

    /// Connection or body read failure
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// A stream line could not be adapted
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// Transport cannot be used (missing replay file, bad endpoint, ...)
    #[error("Transport unavailable: {message}")]
    Unavailable { message: String },
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Ordered event stream of one invocation. An `Err` item aborts the invocation.
pub type AgentEventStream = Pin<Box<dyn Stream<Item = TransportResult<AgentStreamEvent>> + Send>>;
