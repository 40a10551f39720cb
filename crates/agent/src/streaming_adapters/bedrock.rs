//! Bedrock Agent Runtime Adapter
//!
//! Handles InvokeAgent response-stream members serialized one per line:
//! `chunk` members carry base64 answer bytes, `trace` members carry the
//! orchestration trace (raw model output or knowledge-base lookups).

use std::collections::BTreeMap;

use agent_relay_core::streaming::{
    AdapterError, AgentStreamEvent, RawRetrievedReference, StreamAdapter,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

/// One response-stream member. Only the payloads the relay needs are typed;
/// everything else lands in `other`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseStreamMember {
    #[serde(default)]
    chunk: Option<PayloadPart>,
    #[serde(default)]
    trace: Option<TracePart>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PayloadPart {
    #[serde(default)]
    bytes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TracePart {
    #[serde(default)]
    trace: Option<Trace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Trace {
    #[serde(default)]
    orchestration_trace: Option<OrchestrationTrace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrchestrationTrace {
    #[serde(default)]
    model_invocation_output: Option<ModelInvocationOutput>,
    #[serde(default)]
    observation: Option<Observation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInvocationOutput {
    #[serde(default)]
    raw_response: Option<RawResponse>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Observation {
    #[serde(default)]
    knowledge_base_lookup_output: Option<KnowledgeBaseLookupOutput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeBaseLookupOutput {
    #[serde(default)]
    retrieved_references: Option<Vec<RetrievedReference>>,
}

#[derive(Debug, Deserialize)]
struct RetrievedReference {
    #[serde(default)]
    content: Option<RetrievalContent>,
    #[serde(default)]
    location: Option<RetrievalLocation>,
    #[serde(default)]
    metadata: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RetrievalContent {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalLocation {
    #[serde(default)]
    s3_location: Option<S3Location>,
}

#[derive(Debug, Deserialize)]
struct S3Location {
    #[serde(default)]
    uri: Option<String>,
}

impl From<RetrievedReference> for RawRetrievedReference {
    fn from(reference: RetrievedReference) -> Self {
        let metadata = reference
            .metadata
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Self {
            location: reference
                .location
                .and_then(|l| l.s3_location)
                .and_then(|s3| s3.uri),
            content: reference.content.and_then(|c| c.text),
            metadata,
        }
    }
}

/// Adapter for Bedrock InvokeAgent response-stream members
#[derive(Debug, Default)]
pub struct BedrockEventAdapter {
    /// Members seen since the last reset, for diagnostics
    members_seen: usize,
}

impl BedrockEventAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members_seen(&self) -> usize {
        self.members_seen
    }

    /// Stream error members are keyed like `throttlingException`.
    fn upstream_error(other: &BTreeMap<String, serde_json::Value>) -> Option<AdapterError> {
        other
            .iter()
            .find(|(key, _)| key.ends_with("Exception"))
            .map(|(key, value)| {
                let message = value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("no message");
                AdapterError::UpstreamError(format!("{}: {}", key, message))
            })
    }
}

impl StreamAdapter for BedrockEventAdapter {
    fn provider_name(&self) -> &'static str {
        "bedrock-agent"
    }

    fn adapt(&mut self, input: &str) -> Result<Vec<AgentStreamEvent>, AdapterError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(vec![]);
        }

        let member: ResponseStreamMember =
            serde_json::from_str(trimmed).map_err(|e| AdapterError::ParseError(e.to_string()))?;
        self.members_seen += 1;

        if let Some(err) = Self::upstream_error(&member.other) {
            return Err(err);
        }

        let mut events = Vec::new();

        if let Some(encoded) = member.chunk.and_then(|c| c.bytes) {
            let bytes = BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| AdapterError::InvalidFormat(format!("chunk bytes: {}", e)))?;
            events.push(AgentStreamEvent::Chunk { bytes });
        }

        let orchestration = member
            .trace
            .and_then(|t| t.trace)
            .and_then(|t| t.orchestration_trace);

        if let Some(orchestration) = orchestration {
            let content = orchestration
                .model_invocation_output
                .and_then(|m| m.raw_response)
                .and_then(|r| r.content)
                .filter(|c| !c.is_empty());
            if let Some(content) = content {
                events.push(AgentStreamEvent::RawResponse { content });
            }

            let references = orchestration
                .observation
                .and_then(|o| o.knowledge_base_lookup_output)
                .and_then(|k| k.retrieved_references);
            if let Some(references) = references {
                events.push(AgentStreamEvent::Retrieval {
                    references: references.into_iter().map(Into::into).collect(),
                });
            }
        }

        Ok(events)
    }

    fn reset(&mut self) {
        self.members_seen = 0;
    }
}
