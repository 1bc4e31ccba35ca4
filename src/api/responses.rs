//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::ShutdownPhase;

/// Response to `POST /shutdown`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub phase: ShutdownPhase,
}

impl ShutdownResponse {
    pub fn new(status: String, message: String, phase: ShutdownPhase) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            phase,
        }
    }

    /// Shutdown was initiated by this request
    pub fn accepted(message: String, phase: ShutdownPhase) -> Self {
        Self::new("accepted".to_string(), message, phase)
    }

    /// Shutdown had already begun
    pub fn rejected(message: String, phase: ShutdownPhase) -> Self {
        Self::new("rejected".to_string(), message, phase)
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
