//! Point-in-time view of a coordinator

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShutdownPhase;

/// Record of the shutdown session that won the gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownSession {
    /// Name of the trigger that initiated shutdown
    pub origin: String,
    pub started_at: DateTime<Utc>,
}

/// Snapshot of the coordinator, as served by `GET /status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownStatus {
    pub phase: ShutdownPhase,
    pub origin: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub triggers: Vec<String>,
    pub callbacks: usize,
    pub uptime: String,
}

/// Format an elapsed duration as e.g. `1h 2m 3s`
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
