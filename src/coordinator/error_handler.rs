//! Error sink receiving every error produced during shutdown

use tracing::error;

/// Destination for errors that have no caller to be returned to.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, err: anyhow::Error);
}

impl<F> ErrorHandler for F
where
    F: Fn(anyhow::Error) + Send + Sync,
{
    fn handle(&self, err: anyhow::Error) {
        self(err)
    }
}

/// Default handler: logs the error and carries on
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorHandler;

impl ErrorHandler for LogErrorHandler {
    fn handle(&self, err: anyhow::Error) {
        error!("Shutdown error: {:#}", err);
    }
}
