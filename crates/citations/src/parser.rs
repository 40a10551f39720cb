//! Structured Answer Parser
//!
//! Splits the model's raw output into ordered answer segments:
//!
//! ```text
//! <answer>
//!   <answer_part>
//!     <text>Rates rose.</text>
//!     <sources><source>s3://kb/rates.pdf</source></sources>
//!   </answer_part>
//! </answer>
//! ```
//!
//! Malformed or missing markup never fails; it degrades to a tag-stripped
//! plain answer.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens marking a source as the live economic-data feed. Case-sensitive.
pub const LIVE_DATA_INDICATORS: [&str; 2] = ["FRED", "Federal Reserve Economic Data"];

static ANSWER_PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<answer_part>\s*<text>(.*?)</text>\s*<sources>(.*?)</sources>\s*</answer_part>",
    )
    .expect("answer part pattern is valid")
});

static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<source>(.*?)</source>").expect("source pattern is valid"));

static ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<answer>(.*?)</answer>").expect("answer pattern is valid"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// One `<answer_part>` in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSegment {
    /// Trimmed text body; may be empty
    pub text: String,
    /// Every `<source>` value in the part, duplicates kept
    pub source_locations: Vec<String>,
    /// Raw sources markup mentions a live-data indicator
    pub has_live_data_marker: bool,
}

/// Result of parsing raw structured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAnswer {
    /// At least one answer part was found
    Structured(Vec<AnswerSegment>),
    /// No answer parts: tag-stripped, trimmed text with no citation capability
    Unstructured(String),
}

impl ParsedAnswer {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Parse raw model output, falling back from answer parts to an outer
/// `<answer>` block to the whole input.
pub fn parse_structured_output(raw: &str) -> ParsedAnswer {
    let segments = parse_answer_parts(raw);
    if !segments.is_empty() {
        return ParsedAnswer::Structured(segments);
    }

    if let Some(content) = ANSWER_RE.captures(raw).and_then(|c| c.get(1)) {
        let content = content.as_str();
        // Unreachable after the unanchored match above; kept as the last step of the fallback chain.
        if ANSWER_PART_RE.is_match(content) {
            return parse_structured_output(content);
        }
        tracing::debug!("No answer parts inside <answer>, using stripped answer block");
        return ParsedAnswer::Unstructured(strip_tags(content));
    }

    tracing::debug!("No <answer> block, using stripped raw output");
    ParsedAnswer::Unstructured(strip_tags(raw))
}

fn parse_answer_parts(raw: &str) -> Vec<AnswerSegment> {
    ANSWER_PART_RE
        .captures_iter(raw)
        .enumerate()
        .map(|(i, caps)| {
            let text = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let sources = caps.get(2).map_or("", |m| m.as_str());

            let source_locations: Vec<String> = SOURCE_RE
                .captures_iter(sources)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .collect();
            let has_live_data_marker = LIVE_DATA_INDICATORS
                .iter()
                .any(|token| sources.contains(token));

            tracing::debug!(
                part = i + 1,
                sources = source_locations.len(),
                live_data = has_live_data_marker,
                "Parsed answer part"
            );

            AnswerSegment {
                text,
                source_locations,
                has_live_data_marker,
            }
        })
        .collect()
}

/// Remove every `<...>` tag and trim.
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").trim().to_string()
}
