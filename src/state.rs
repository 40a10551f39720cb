//! Application State
//!
//! Shared state handed to every HTTP handler.

use std::sync::Arc;
use std::time::Duration;

use agent_relay_agent::{AgentTransport, HttpAgentTransport, ReplayTransport};

use crate::models::settings::AppConfig;
use crate::services::relay::{AgentSettings, RelayService};
use crate::utils::error::{AppError, AppResult};

/// Application state shared across requests
#[derive(Clone)]
pub struct AppState {
    /// Validated configuration the server was started with
    config: Arc<AppConfig>,
    /// Relay service for agent invocations
    relay: Arc<RelayService>,
}

impl AppState {
    /// Build state from a validated config, choosing the transport it names
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::validation)?;
        let transport = build_transport(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Build state around an existing transport
    pub fn with_transport(config: AppConfig, transport: Arc<dyn AgentTransport>) -> Self {
        let relay = RelayService::new(transport, AgentSettings::from(&config));
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn relay(&self) -> &RelayService {
        &self.relay
    }

    pub fn transport(&self) -> &Arc<dyn AgentTransport> {
        self.relay.transport()
    }
}

fn build_transport(config: &AppConfig) -> AppResult<Arc<dyn AgentTransport>> {
    if let Some(path) = &config.replay_path {
        tracing::info!(path = %path.display(), "Using replay transport");
        return Ok(Arc::new(ReplayTransport::new(path.clone())));
    }

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let transport = HttpAgentTransport::new(&config.endpoint, timeout)?;
    tracing::info!(endpoint = %config.endpoint, "Using HTTP relay transport");
    Ok(Arc::new(transport))
}
