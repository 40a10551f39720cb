//! Relay Integration Tests
//!
//! Recorded event logs replayed through `RelayService`.

use std::sync::Arc;

use agent_relay::{AppConfig, AppError, AppState};
use agent_relay_agent::ReplayTransport;
use agent_relay_core::CoreError;

use crate::common::{write_log, CHUNKS_ONLY, RECORDED_INVOCATION, THROTTLED};

fn replay_state(path: &std::path::Path) -> AppState {
    AppState::with_transport(AppConfig::default(), Arc::new(ReplayTransport::new(path)))
}

#[tokio::test]
async fn test_recorded_invocation_resolves_citations() {
    let log = write_log(RECORDED_INVOCATION);
    let state = replay_state(log.path());

    let payload = state
        .relay()
        .invoke(Some("What happened to rates?"), Some("session-1"))
        .await
        .unwrap();

    assert_eq!(payload.response, "Rates rose.[1] FRED confirms it.[2]");
    assert_eq!(payload.citations.len(), 2);
    assert_eq!(payload.citations.get(1), Some("s3://kb/rates.pdf"));
    assert_eq!(payload.citations.get(2), Some("s3://kb/fred-series.csv"));
    assert!(payload.has_real_time_data);
    assert_eq!(payload.session_id, "session-1");
}

#[tokio::test]
async fn test_replay_is_repeatable() {
    let log = write_log(RECORDED_INVOCATION);
    let state = replay_state(log.path());

    let first = state.relay().invoke(Some("q"), Some("s")).await.unwrap();
    let second = state.relay().invoke(Some("q"), Some("s")).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_chunks_only_answer_passes_through() {
    let log = write_log(CHUNKS_ONLY);
    let state = replay_state(log.path());

    let payload = state.relay().invoke(Some("hi"), None).await.unwrap();
    assert_eq!(payload.response, "Hello world");
    assert!(payload.citations.is_empty());
    assert!(!payload.has_real_time_data);
    assert!(payload.session_id.starts_with("session-"));
}

#[tokio::test]
async fn test_upstream_exception_fails_invocation() {
    let log = write_log(THROTTLED);
    let state = replay_state(log.path());

    let err = state.relay().invoke(Some("hi"), None).await.unwrap_err();
    match err {
        AppError::Core(CoreError::StreamConsumption(message)) => {
            assert!(message.contains("Rate exceeded"), "unexpected message: {}", message);
        }
        other => panic!("Expected StreamConsumption, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_log_is_transport_error() {
    let state = replay_state(std::path::Path::new("/nonexistent/recorded.ndjson"));
    let err = state.relay().invoke(Some("hi"), None).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}
