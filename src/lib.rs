//! Graceful Shutdown - coordinate process termination across subsystems
//!
//! Triggers (signals, timers, an HTTP endpoint, or anything implementing
//! [`Trigger`]) decide when to shut down; callbacks registered on the
//! [`GracefulShutdown`] coordinator do the cleanup. Whichever trigger fires
//! first runs the shutdown session exactly once, and every error raised along
//! the way is routed to a single [`ErrorHandler`].

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod state;
pub mod triggers;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{ErrorHandler, GracefulShutdown, LogErrorHandler, ShutdownCallback};
pub use error::TriggerError;
pub use state::{ShutdownPhase, ShutdownStatus};
pub use triggers::{HttpTrigger, PosixSignalTrigger, TimerTrigger, Trigger};
pub use utils::ExitAction;

#[cfg(test)]
mod tests;
