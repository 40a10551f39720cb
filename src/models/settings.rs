//! Settings Models
//!
//! Relay configuration and partial-update structures.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Relay configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to (host:port)
    pub bind_address: String,
    /// Remote agent identifier
    pub agent_id: String,
    /// Remote agent alias identifier
    pub agent_alias_id: String,
    /// Region the agent runs in (reported by /health)
    pub region: String,
    /// Event relay endpoint that streams the agent's response as NDJSON
    pub endpoint: String,
    /// Whole-request timeout for the HTTP transport
    pub request_timeout_secs: u64,
    /// Request trace events (required for citations)
    pub enable_trace: bool,
    /// Replay a recorded event log instead of calling the endpoint
    pub replay_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
            agent_id: "local-agent".to_string(),
            agent_alias_id: "TSTALIASID".to_string(),
            region: "us-west-2".to_string(),
            endpoint: "http://127.0.0.1:8787/invoke".to_string(),
            request_timeout_secs: 120,
            enable_trace: true,
            replay_path: None,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub bind_address: Option<String>,
    pub agent_id: Option<String>,
    pub agent_alias_id: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub enable_trace: Option<bool>,
    pub replay_path: Option<PathBuf>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(bind_address) = update.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(agent_id) = update.agent_id {
            self.agent_id = agent_id;
        }
        if let Some(alias) = update.agent_alias_id {
            self.agent_alias_id = alias;
        }
        if let Some(region) = update.region {
            self.region = region;
        }
        if let Some(endpoint) = update.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(enable_trace) = update.enable_trace {
            self.enable_trace = enable_trace;
        }
        if let Some(path) = update.replay_path {
            self.replay_path = Some(path);
        }
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address {}: {}", self.bind_address, e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;

        if self.agent_id.trim().is_empty() {
            return Err("agent_id must not be empty".to_string());
        }
        if self.agent_alias_id.trim().is_empty() {
            return Err("agent_alias_id must not be empty".to_string());
        }

        if !(1..=600).contains(&self.request_timeout_secs) {
            return Err(format!(
                "request_timeout_secs must be between 1 and 600, got {}",
                self.request_timeout_secs
            ));
        }

        // A replay log replaces the endpoint entirely.
        if self.replay_path.is_none()
            && !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"))
        {
            return Err(format!(
                "Invalid endpoint: {}. Must start with http:// or https://",
                self.endpoint
            ));
        }

        Ok(())
    }
}
