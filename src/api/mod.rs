//! HTTP API module
//!
//! This module contains the control endpoint handlers and response structures
//! served by [`HttpTrigger`](crate::triggers::HttpTrigger).

pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{coordinator::GracefulShutdown, triggers::Trigger};
use handlers::*;

/// Shared state behind the control endpoint
pub struct ApiState {
    pub shutdown: GracefulShutdown,
    /// Trigger reported as the origin of API-initiated shutdowns
    pub origin: Arc<dyn Trigger>,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/shutdown", post(shutdown_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
