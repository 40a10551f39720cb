//! HTTP Server
//!
//! Router construction and the serve loop.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::commands::{get_health, invoke_agent};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Build the relay router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/invoke-agent", post(invoke_agent))
        .route("/health", get(get_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(state: AppState) -> AppResult<()> {
    let addr = state.config().socket_addr().map_err(AppError::config)?;
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        agent = %state.config().agent_id,
        region = %state.config().region,
        "Agent relay listening on http://{}/invoke-agent",
        local_addr
    );

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
