//! Invocation Commands
//!
//! `POST /invoke-agent` and the mapping of application errors to HTTP
//! responses.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use agent_relay_core::CoreError;

use crate::models::response::{ErrorResponse, InvokeRequest, RelayResponse};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Relay one message to the agent
pub async fn invoke_agent(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> AppResult<Json<RelayResponse>> {
    let payload = state
        .relay()
        .invoke(request.message.as_deref(), request.session_id.as_deref())
        .await?;
    Ok(Json(payload))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::MissingInput(message)) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message.clone()))
            }
            err if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(err.to_string()))
            }
            err => {
                tracing::error!("Agent invocation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(err.to_string()).with_details(format!("{:?}", err)),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
