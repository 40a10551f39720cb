//! Citation Rewriter / Live-Data Detector
//!
//! Marker numbers follow segment position: segment `i` (1-based) gets `[i]`
//! while `i` does not exceed the number of unique citable sources. The
//! number does not identify which source the segment itself cites.

use crate::parser::AnswerSegment;

/// Final answer text and live-data flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenAnswer {
    pub text: String,
    pub has_live_data: bool,
}

pub fn rewrite_segments(segments: &[AnswerSegment], unique_sources: usize) -> RewrittenAnswer {
    let mut has_live_data = false;
    let mut parts = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        let position = i + 1;
        if segment.has_live_data_marker {
            has_live_data = true;
        }

        // Empty text still gets its marker.
        if position <= unique_sources {
            parts.push(format!("{}[{}]", segment.text, position));
        } else {
            parts.push(segment.text.clone());
        }
    }

    if has_live_data {
        tracing::info!("Real-time data detected in cited sources");
    }

    RewrittenAnswer {
        text: parts.join(" ").trim().to_string(),
        has_live_data,
    }
}
