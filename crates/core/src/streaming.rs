//! Agent Stream Event Types
//!
//! Typed events emitted by one agent invocation, plus the adapter trait that
//! turns a transport's wire format into them. The three payload shapes arrive
//! interleaved in no guaranteed order; consumers classify them with an
//! exhaustive `match`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata key the knowledge base uses for the document URI
pub const SOURCE_URI_METADATA_KEY: &str = "x-amz-bedrock-kb-source-uri";

/// One event from an agent invocation's response stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentStreamEvent {
    /// Raw answer bytes, expected to be UTF-8 text
    Chunk { bytes: Vec<u8> },

    /// The model's complete structured output so far. Only the last
    /// occurrence in a stream is authoritative.
    RawResponse { content: String },

    /// Knowledge-base lookup results surfaced by one retrieval step
    Retrieval {
        references: Vec<RawRetrievedReference>,
    },
}

impl AgentStreamEvent {
    /// Convenience constructor for a text chunk event.
    pub fn chunk(text: impl Into<String>) -> Self {
        Self::Chunk {
            bytes: text.into().into_bytes(),
        }
    }

    /// Convenience constructor for a raw-response trace event.
    pub fn raw_response(content: impl Into<String>) -> Self {
        Self::RawResponse {
            content: content.into(),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Chunk { .. } => "chunk",
            Self::RawResponse { .. } => "raw_response",
            Self::Retrieval { .. } => "retrieval",
        }
    }
}

/// A retrieved reference as it appears on the wire, before the stream reader
/// resolves its source location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawRetrievedReference {
    /// Direct storage location (e.g. an `s3://` URI), when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Retrieved passage text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Metadata attached by the knowledge base
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl RawRetrievedReference {
    /// Reference with only a direct location.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Default::default()
        }
    }
}

/// Errors that can occur during stream adaptation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AdapterError {
    /// Invalid format that couldn't be parsed
    InvalidFormat(String),
    /// JSON/data parsing error
    ParseError(String),
    /// The upstream stream carried an error member instead of data
    UpstreamError(String),
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            AdapterError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AdapterError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for AdapterError {}

/// Trait for adapting a transport's wire format to typed agent events.
pub trait StreamAdapter: Send + Sync {
    /// Returns the adapter name for logging and identification.
    fn provider_name(&self) -> &'static str;

    /// Adapt one raw stream line to typed events.
    ///
    /// A single input line may produce zero, one, or multiple events.
    fn adapt(&mut self, input: &str) -> Result<Vec<AgentStreamEvent>, AdapterError>;

    /// Reset adapter state for a new stream.
    fn reset(&mut self) {}
}
