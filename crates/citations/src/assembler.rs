//! Response Assembler
//!
//! Pure shape assembly of the outbound payload.

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregatedResult;
use crate::dedup::CitationMap;

/// Outbound payload for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub response: String,
    pub citations: CitationMap,
    pub has_real_time_data: bool,
    pub session_id: String,
}

pub fn assemble(result: AggregatedResult, session_id: impl Into<String>) -> RelayResponse {
    RelayResponse {
        response: result.text,
        citations: result.citation_map,
        has_real_time_data: result.has_live_data,
        session_id: session_id.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let result = AggregatedResult {
            text: "Rates rose.[1]".to_string(),
            citation_map: serde_json::from_str(r#"{"1":"doc1"}"#).unwrap(),
            has_live_data: true,
        };
        let payload = assemble(result, "session-1");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "response": "Rates rose.[1]",
                "citations": {"1": "doc1"},
                "hasRealTimeData": true,
                "sessionId": "session-1"
            })
        );
    }
}
