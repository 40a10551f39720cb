//! Replay Transport
//!
//! Replays a recorded NDJSON response-stream log for every invocation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::stream;

use crate::ndjson::ndjson_events;
use crate::streaming_adapters::BedrockEventAdapter;
use crate::transport::AgentTransport;
use crate::types::{AgentEventStream, InvocationRequest, TransportError, TransportResult};

/// Transport backed by a recorded event log on disk.
#[derive(Debug, Clone)]
pub struct ReplayTransport {
    path: PathBuf,
}

impl ReplayTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AgentTransport for ReplayTransport {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn invoke(&self, request: InvocationRequest) -> TransportResult<AgentEventStream> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TransportError::unavailable(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            session_id = %request.session_id,
            bytes = bytes.len(),
            "Replaying recorded event log"
        );

        let body = stream::iter([Ok::<_, std::io::Error>(bytes)]);
        Ok(ndjson_events(body, BedrockEventAdapter::new()))
    }

    async fn health_check(&self) -> TransportResult<()> {
        tokio::fs::metadata(&self.path)
            .await
            .map(|_| ())
            .map_err(|e| TransportError::unavailable(format!("{}: {}", self.path.display(), e)))
    }
}
