//! State management module
//!
//! This module contains the coordinator's lifecycle phase and status snapshots.

pub mod shutdown_phase;
pub mod shutdown_status;

// Re-export main types
pub use shutdown_phase::ShutdownPhase;
pub use shutdown_status::{format_uptime, ShutdownSession, ShutdownStatus};
