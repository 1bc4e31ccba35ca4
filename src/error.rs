//! Error types produced by the built-in triggers

use std::io;

use thiserror::Error;

/// Failures raised by the triggers shipped with this crate
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("failed to register signal handler for {signals:?}: {source}")]
    SignalRegistration {
        signals: Vec<i32>,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind shutdown endpoint on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("{name} must be started from within a tokio runtime")]
    NoRuntime { name: &'static str },

    #[error("unknown signal name: {0}")]
    UnknownSignal(String),
}
