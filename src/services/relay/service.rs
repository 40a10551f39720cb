//! Relay Service
//!
//! One invocation is a single pass: nothing is retried and no partial answer
//! is returned when the stream fails.

use std::sync::Arc;

use agent_relay_agent::{AgentTransport, InvocationRequest};
use agent_relay_citations::{aggregate, assemble, consume_stream, RelayResponse};
use agent_relay_core::CoreError;

use crate::models::settings::AppConfig;
use crate::services::relay::session::resolve_session_id;
use crate::utils::error::AppResult;

/// Agent identity sent with every invocation
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSettings {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub enable_trace: bool,
}

impl From<&AppConfig> for AgentSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            agent_id: config.agent_id.clone(),
            agent_alias_id: config.agent_alias_id.clone(),
            enable_trace: config.enable_trace,
        }
    }
}

/// Relays messages to the agent and returns citation-annotated answers.
pub struct RelayService {
    transport: Arc<dyn AgentTransport>,
    agent: AgentSettings,
}

impl RelayService {
    pub fn new(transport: Arc<dyn AgentTransport>, agent: AgentSettings) -> Self {
        Self { transport, agent }
    }

    pub fn transport(&self) -> &Arc<dyn AgentTransport> {
        &self.transport
    }

    pub fn agent(&self) -> &AgentSettings {
        &self.agent
    }

    /// Run one invocation. A blank or missing message is rejected before the
    /// transport is touched.
    pub async fn invoke(
        &self,
        message: Option<&str>,
        session_id: Option<&str>,
    ) -> AppResult<RelayResponse> {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| CoreError::missing_input("Message is required"))?;
        let session_id = resolve_session_id(session_id);

        tracing::info!(
            session_id = %session_id,
            transport = self.transport.name(),
            message_chars = message.chars().count(),
            "Invoking agent"
        );

        let request = InvocationRequest {
            agent_id: self.agent.agent_id.clone(),
            agent_alias_id: self.agent.agent_alias_id.clone(),
            session_id: session_id.clone(),
            input_text: message.to_string(),
            enable_trace: self.agent.enable_trace,
        };

        let events = self.transport.invoke(request).await?;
        let artifacts = consume_stream(events).await.map_err(|e| {
            tracing::error!(session_id = %session_id, "Agent stream failed: {}", e);
            e
        })?;
        let result = aggregate(&artifacts);

        tracing::info!(
            session_id = %session_id,
            citations = result.citation_map.len(),
            has_real_time_data = result.has_live_data,
            "Agent response assembled"
        );
        Ok(assemble(result, session_id))
    }
}

impl std::fmt::Debug for RelayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayService")
            .field("transport", &self.transport.name())
            .field("agent", &self.agent)
            .finish()
    }
}
