//! Shared fixtures for the integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Recorded invocation: three retrieval references (one duplicate, one
/// resolved through metadata), a two-part structured answer and the chunk
/// text ("Rates rose. FRED confirms it.").
pub const RECORDED_INVOCATION: &str = concat!(
    r#"{"trace": {"trace": {"preProcessingTrace": {"modelInvocationInput": {"type": "PRE_PROCESSING"}}}}}"#,
    "\n",
    r#"{"trace": {"trace": {"orchestrationTrace": {"observation": {"knowledgeBaseLookupOutput": {"retrievedReferences": [{"content": {"text": "Rates rose in May."}, "location": {"s3Location": {"uri": "s3://kb/rates.pdf"}}}, {"metadata": {"x-amz-bedrock-kb-source-uri": "s3://kb/fred-series.csv"}}, {"location": {"s3Location": {"uri": "s3://kb/rates.pdf"}}}]}}}}}}"#,
    "\n",
    r#"{"trace": {"trace": {"orchestrationTrace": {"modelInvocationOutput": {"rawResponse": {"content": "<answer><answer_part><text>Rates rose.</text><sources><source>s3://kb/rates.pdf</source></sources></answer_part>\n<answer_part><text>FRED confirms it.</text><sources><source>FRED: FEDFUNDS</source></sources></answer_part></answer>"}}}}}}"#,
    "\n",
    r#"{"chunk": {"bytes": "UmF0ZXMgcm9zZS4g"}}"#,
    "\n",
    r#"{"chunk": {"bytes": "RlJFRCBjb25maXJtcyBpdC4="}}"#,
    "\n",
);

/// Plain answer with no trace events
pub const CHUNKS_ONLY: &str = concat!(
    r#"{"chunk": {"bytes": "SGVsbG8="}}"#,
    "\n",
    r#"{"chunk": {"bytes": "IHdvcmxk"}}"#,
);

/// Stream that fails after the first chunk
pub const THROTTLED: &str = concat!(
    r#"{"chunk": {"bytes": "SGVsbG8="}}"#,
    "\n",
    r#"{"throttlingException": {"message": "Rate exceeded"}}"#,
    "\n",
);

pub fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
