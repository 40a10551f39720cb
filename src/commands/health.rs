//! Health Check Commands
//!
//! Reports relay status and whether the configured transport is usable.

use axum::extract::State;
use axum::Json;

use crate::models::response::HealthResponse;
use crate::state::AppState;

/// Get the health status of the relay
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.config();
    let transport = state.transport();

    let mut health = HealthResponse {
        agent: config.agent_id.clone(),
        region: config.region.clone(),
        transport: transport.name().to_string(),
        ..Default::default()
    };

    match transport.health_check().await {
        Ok(()) => {
            health.message = "Relay is running and the agent transport is reachable".to_string();
        }
        Err(e) => {
            tracing::warn!(transport = transport.name(), "Transport health check failed: {}", e);
            health.status = "degraded".to_string();
            health.message = e.to_string();
        }
    }

    Json(health)
}
