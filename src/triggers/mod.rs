//! Shutdown triggers
//!
//! A trigger watches for some condition (a signal, a deadline, a request) and
//! calls back into the coordinator when it occurs. This module defines the
//! trait and the built-in implementations.

pub mod http;
pub mod signal;
pub mod timer;

use std::sync::Arc;

use crate::coordinator::GracefulShutdown;

pub use http::HttpTrigger;
pub use signal::PosixSignalTrigger;
pub use timer::TimerTrigger;

/// A source of shutdown initiation plus the hooks run around the session it
/// starts.
pub trait Trigger: Send + Sync {
    /// Name used for diagnostics and passed to every callback
    fn name(&self) -> &str;

    /// Begin watching. Must not block: long-running work belongs on a task
    /// spawned here, which calls `shutdown.start_shutdown(..)` when the
    /// condition is met. An error aborts `GracefulShutdown::start`.
    fn start(self: Arc<Self>, shutdown: GracefulShutdown) -> anyhow::Result<()>;

    /// Runs once when this trigger's shutdown begins, before any callback
    fn on_shutdown_begin(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once after every callback has returned. May end the process.
    fn on_shutdown_end(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
