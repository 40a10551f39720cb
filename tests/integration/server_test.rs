//! HTTP Surface Integration Tests
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use agent_relay::{build_router, AppConfig, AppState};
use agent_relay_agent::ReplayTransport;

use crate::common::{write_log, RECORDED_INVOCATION, THROTTLED};

fn router_for(path: &std::path::Path) -> Router {
    let config = AppConfig {
        agent_id: "AGENT42".to_string(),
        region: "eu-west-1".to_string(),
        ..Default::default()
    };
    build_router(AppState::with_transport(
        config,
        Arc::new(ReplayTransport::new(path)),
    ))
}

fn invoke_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/invoke-agent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// /invoke-agent
// ============================================================================

#[tokio::test]
async fn test_invoke_returns_payload_shape() {
    let log = write_log(RECORDED_INVOCATION);
    let response = router_for(log.path())
        .oneshot(invoke_request(
            r#"{"message": "What happened to rates?", "sessionId": "session-abc"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["response"], "Rates rose.[1] FRED confirms it.[2]");
    assert_eq!(body["citations"]["1"], "s3://kb/rates.pdf");
    assert_eq!(body["citations"]["2"], "s3://kb/fred-series.csv");
    assert_eq!(body["hasRealTimeData"], true);
    assert_eq!(body["sessionId"], "session-abc");
}

#[tokio::test]
async fn test_missing_message_is_bad_request() {
    let log = write_log(RECORDED_INVOCATION);

    for body in [r#"{}"#, r#"{"message": "  "}"#, r#"{"sessionId": "s"}"#] {
        let response = router_for(log.path())
            .oneshot(invoke_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Message is required"}));
    }
}

#[tokio::test]
async fn test_stream_failure_is_server_error() {
    let log = write_log(THROTTLED);
    let response = router_for(log.path())
        .oneshot(invoke_request(r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Rate exceeded"));
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let log = write_log(RECORDED_INVOCATION);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/invoke-agent")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router_for(log.path()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// ============================================================================
// /health
// ============================================================================

#[tokio::test]
async fn test_health_reports_agent_and_region() {
    let log = write_log(RECORDED_INVOCATION);
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router_for(log.path()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["agent"], "AGENT42");
    assert_eq!(body["region"], "eu-west-1");
    assert_eq!(body["transport"], "replay");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_without_replay_log() {
    let response = router_for(std::path::Path::new("/nonexistent/recorded.ndjson"))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "degraded");
}
