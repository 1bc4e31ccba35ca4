//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info, warn};

use super::{
    responses::{HealthResponse, ShutdownResponse},
    ApiState,
};
use crate::state::{ShutdownPhase, ShutdownStatus};

/// Handle POST /shutdown - Start graceful shutdown
///
/// Replies before the callbacks run; the session itself executes on a
/// blocking thread.
pub async fn shutdown_handler(
    State(state): State<Arc<ApiState>>,
) -> (StatusCode, Json<ShutdownResponse>) {
    let phase = state.shutdown.phase();
    if phase.is_shutting_down() {
        warn!("Shutdown endpoint called but shutdown is already {}", phase);
        return (
            StatusCode::CONFLICT,
            Json(ShutdownResponse::rejected(
                format!("Shutdown already {}", phase),
                phase,
            )),
        );
    }

    info!("Shutdown endpoint called - starting graceful shutdown");
    let shutdown = state.shutdown.clone();
    let origin = Arc::clone(&state.origin);
    tokio::spawn(async move {
        let reporter = shutdown.clone();
        let result = tokio::task::spawn_blocking(move || shutdown.start_shutdown(&*origin)).await;
        if let Err(e) = result {
            error!("API-initiated shutdown task failed: {}", e);
            reporter.report_error(anyhow::anyhow!("api shutdown task failed: {}", e));
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(ShutdownResponse::accepted(
            "Graceful shutdown started".to_string(),
            ShutdownPhase::ShuttingDown,
        )),
    )
}

/// Handle GET /status - Coordinator phase and registrations
pub async fn status_handler(State(state): State<Arc<ApiState>>) -> Json<ShutdownStatus> {
    Json(state.shutdown.status())
}

/// Handle GET /health - Health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
