//! Coordinator lifecycle phase

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a coordinator. Phases only ever move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownPhase {
    /// Triggers and callbacks are being registered
    #[default]
    Idle,
    /// `start` has run; triggers are watching
    Running,
    /// The shutdown session is executing
    ShuttingDown,
    /// The origin's end hook has returned
    Complete,
}

impl ShutdownPhase {
    /// Whether a shutdown session has begun (or finished)
    pub fn is_shutting_down(&self) -> bool {
        *self >= ShutdownPhase::ShuttingDown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownPhase::Idle => "idle",
            ShutdownPhase::Running => "running",
            ShutdownPhase::ShuttingDown => "shutting_down",
            ShutdownPhase::Complete => "complete",
        }
    }
}

impl fmt::Display for ShutdownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
