//! Agent Relay Agent
//!
//! Provides the transport seam to the remote conversational agent:
//! - `AgentTransport` trait and its request/error types
//! - Bedrock-style response-stream adapter (NDJSON members -> typed events)
//! - HTTP event relay transport
//! - Replay transport for recorded event logs

pub mod http;
pub mod ndjson;
pub mod replay;
pub mod streaming_adapters;
pub mod transport;
pub mod types;

// Re-export main types
pub use http::HttpAgentTransport;
pub use ndjson::ndjson_events;
pub use replay::ReplayTransport;
pub use streaming_adapters::BedrockEventAdapter;
pub use transport::{parse_http_error, AgentTransport};
pub use types::*;
