//! Event Stream Reader
//!
//! Consumes one invocation's events strictly in arrival order and keeps three
//! accumulators: chunk text, the latest raw structured output, and every
//! retrieved reference.

use std::collections::BTreeMap;
use std::fmt::Display;

use agent_relay_core::streaming::{
    AgentStreamEvent, RawRetrievedReference, SOURCE_URI_METADATA_KEY,
};
use agent_relay_core::{CoreError, CoreResult};
use futures_util::{Stream, StreamExt};
use serde::Serialize;

use crate::dedup::UNKNOWN_LOCATION;

/// Characters of retrieved content kept for diagnostics
const CONTENT_PREVIEW_CHARS: usize = 200;

/// One knowledge-base hit surfaced during an invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalReference {
    /// Position inside the retrieval event that carried it
    pub index: usize,
    /// Direct location only, `"unknown"` when absent
    pub source_id: String,
    /// Direct location, else the metadata source URI, else `"unknown"`
    pub source_location: String,
    pub content_preview: String,
    pub raw_metadata: BTreeMap<String, String>,
}

impl RetrievalReference {
    pub fn from_raw(index: usize, raw: RawRetrievedReference) -> Self {
        let direct = raw.location.filter(|l| !l.is_empty());
        let source_location = direct
            .clone()
            .or_else(|| {
                raw.metadata
                    .get(SOURCE_URI_METADATA_KEY)
                    .filter(|l| !l.is_empty())
                    .cloned()
            })
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
        let content_preview = raw
            .content
            .map(|c| c.chars().take(CONTENT_PREVIEW_CHARS).collect())
            .unwrap_or_default();

        Self {
            index,
            source_id: direct.unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            source_location,
            content_preview,
            raw_metadata: raw.metadata,
        }
    }
}

/// Everything the reader accumulated once the stream is exhausted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamArtifacts {
    pub full_text: String,
    pub raw_structured_output: String,
    pub retrieval_references: Vec<RetrievalReference>,
}

/// Per-invocation fold over agent events.
#[derive(Debug, Default)]
pub struct StreamReader {
    artifacts: StreamArtifacts,
    events_seen: usize,
}

impl StreamReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. A chunk that is not valid UTF-8 fails the invocation.
    pub fn push(&mut self, event: AgentStreamEvent) -> CoreResult<()> {
        self.events_seen += 1;
        match event {
            AgentStreamEvent::Chunk { bytes } => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    CoreError::stream_consumption(format!("chunk is not valid UTF-8: {}", e))
                })?;
                self.artifacts.full_text.push_str(&text);
            }
            AgentStreamEvent::RawResponse { content } => {
                self.artifacts.raw_structured_output = content;
            }
            AgentStreamEvent::Retrieval { references } => {
                tracing::debug!(count = references.len(), "Retrieval trace received");
                self.artifacts.retrieval_references.extend(
                    references
                        .into_iter()
                        .enumerate()
                        .map(|(index, raw)| RetrievalReference::from_raw(index, raw)),
                );
            }
        }
        Ok(())
    }

    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    pub fn finish(self) -> StreamArtifacts {
        self.artifacts
    }
}

/// Drain an event stream into artifacts. Any stream error discards everything
/// accumulated so far.
pub async fn consume_stream<S, E>(mut events: S) -> CoreResult<StreamArtifacts>
where
    S: Stream<Item = Result<AgentStreamEvent, E>> + Unpin,
    E: Display,
{
    let mut reader = StreamReader::new();
    while let Some(event) = events.next().await {
        let event = event.map_err(|e| CoreError::stream_consumption(e.to_string()))?;
        reader.push(event)?;
    }

    tracing::debug!(
        events = reader.events_seen(),
        references = reader.artifacts.retrieval_references.len(),
        raw_output_chars = reader.artifacts.raw_structured_output.len(),
        "Agent stream consumed"
    );
    Ok(reader.finish())
}
