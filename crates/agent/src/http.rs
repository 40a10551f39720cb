//! HTTP Event Relay Transport
//!
//! Posts an invocation to an event relay endpoint that forwards the agent's
//! response-stream members as NDJSON, and adapts the body lazily.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::ndjson::ndjson_events;
use crate::streaming_adapters::BedrockEventAdapter;
use crate::transport::{parse_http_error, AgentTransport};
use crate::types::{AgentEventStream, InvocationRequest, TransportError, TransportResult};

/// Transport that reaches the agent through an HTTP event relay.
#[derive(Debug, Clone)]
pub struct HttpAgentTransport {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpAgentTransport {
    pub fn new(endpoint: &str, timeout: Duration) -> TransportResult<Self> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            TransportError::unavailable(format!("invalid endpoint {}: {}", endpoint, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::unavailable(format!("failed to build client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl AgentTransport for HttpAgentTransport {
    fn name(&self) -> &'static str {
        "http-relay"
    }

    async fn invoke(&self, request: InvocationRequest) -> TransportResult<AgentEventStream> {
        tracing::debug!(
            endpoint = %self.endpoint,
            session_id = %request.session_id,
            "Invoking agent over HTTP relay"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/x-ndjson")
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::network(e.to_string()))?;
            return Err(parse_http_error(status.as_u16(), &body));
        }

        Ok(ndjson_events(
            response.bytes_stream(),
            BedrockEventAdapter::new(),
        ))
    }

    async fn health_check(&self) -> TransportResult<()> {
        match self.endpoint.scheme() {
            "http" | "https" => Ok(()),
            other => Err(TransportError::unavailable(format!(
                "unsupported endpoint scheme: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let err = HttpAgentTransport::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, TransportError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_health_check_scheme() {
        let transport =
            HttpAgentTransport::new("http://127.0.0.1:9/invoke", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.name(), "http-relay");
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/invoke");
        assert!(transport.health_check().await.is_ok());

        let transport =
            HttpAgentTransport::new("ftp://example.com/events", Duration::from_secs(5)).unwrap();
        assert!(transport.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let transport =
            HttpAgentTransport::new("http://127.0.0.1:9/invoke", Duration::from_secs(2)).unwrap();
        let request = InvocationRequest {
            agent_id: "A".to_string(),
            agent_alias_id: "B".to_string(),
            session_id: "s".to_string(),
            input_text: "hi".to_string(),
            enable_trace: true,
        };
        let result = transport.invoke(request).await;
        assert!(matches!(result, Err(TransportError::NetworkError { .. })));
    }
}
