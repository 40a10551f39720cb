//! Agent Transport Trait
//!
//! Defines the common interface for reaching the remote agent.

use async_trait::async_trait;

use crate::types::{AgentEventStream, InvocationRequest, TransportError, TransportResult};

/// Trait that all agent transports must implement.
///
/// A transport only delivers events; ordering is preserved and nothing is
/// retried here.
#[async_trait]
pub trait AgentTransport: Send + Sync {
    /// Returns the transport name for identification.
    fn name(&self) -> &'static str;

    /// Start one invocation and return its ordered event stream.
    async fn invoke(&self, request: InvocationRequest) -> TransportResult<AgentEventStream>;

    /// Check whether the transport is usable.
    async fn health_check(&self) -> TransportResult<()>;
}

/// Map an upstream HTTP status to a transport error.
pub fn parse_http_error(status: u16, body: &str) -> TransportError {
    match status {
        400 | 404 | 422 => TransportError::InvalidRequest {
            message: body.to_string(),
        },
        401 => TransportError::AuthenticationFailed {
            message: "Invalid credentials".to_string(),
        },
        403 => TransportError::AuthenticationFailed {
            message: "Access denied".to_string(),
        },
        429 => TransportError::RateLimited {
            message: body.to_string(),
        },
        500..=599 => TransportError::ServerError {
            message: body.to_string(),
            status,
        },
        _ => TransportError::network(format!("HTTP {}: {}", status, body)),
    }
}
