//! Aggregation
//!
//! Reconciles one invocation's artifacts into a single answer.

use serde::Serialize;

use crate::dedup::{CitationIndex, CitationMap};
use crate::parser::{parse_structured_output, ParsedAnswer};
use crate::reader::StreamArtifacts;
use crate::rewriter::rewrite_segments;

/// Sole output of the aggregation core. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedResult {
    pub text: String,
    pub citation_map: CitationMap,
    pub has_live_data: bool,
}

impl AggregatedResult {
    fn plain(text: String) -> Self {
        Self {
            text,
            citation_map: CitationMap::new(),
            has_live_data: false,
        }
    }
}

pub fn aggregate(artifacts: &StreamArtifacts) -> AggregatedResult {
    let raw = artifacts.raw_structured_output.as_str();
    if raw.is_empty() {
        tracing::debug!("No raw structured output, using chunk text");
        return AggregatedResult::plain(artifacts.full_text.trim().to_string());
    }

    tracing::debug!(
        preview = %raw.chars().take(500).collect::<String>(),
        "Parsing raw structured output"
    );

    match parse_structured_output(raw) {
        ParsedAnswer::Structured(segments) => {
            let index = CitationIndex::from_references(&artifacts.retrieval_references);
            let rewritten = rewrite_segments(&segments, index.len());
            tracing::info!(
                segments = segments.len(),
                citations = index.len(),
                live_data = rewritten.has_live_data,
                "Aggregated structured answer"
            );
            AggregatedResult {
                text: rewritten.text,
                citation_map: index.into_citation_map(),
                has_live_data: rewritten.has_live_data,
            }
        }
        ParsedAnswer::Unstructured(text) => {
            if text.is_empty() && !artifacts.full_text.trim().is_empty() {
                tracing::warn!("Structured output stripped to nothing, using chunk text");
                return AggregatedResult::plain(artifacts.full_text.trim().to_string());
            }
            tracing::warn!("No answer parts in raw output, citations dropped");
            AggregatedResult::plain(text)
        }
    }
}
