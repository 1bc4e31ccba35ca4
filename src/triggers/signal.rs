//! Shutdown on POSIX signals

use std::sync::Arc;

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tokio::runtime::Handle;
use tracing::{error, info};

use super::Trigger;
use crate::{
    coordinator::GracefulShutdown,
    error::TriggerError,
    utils::{signal_name, ExitAction, DEFAULT_SIGNALS},
};

/// Name reported by [`PosixSignalTrigger`]
pub const NAME: &str = "PosixSignalTrigger";

/// Starts shutdown on the first of a set of signals (SIGINT and SIGTERM by
/// default), then exits the process with status 0 once callbacks are done.
#[derive(Debug)]
pub struct PosixSignalTrigger {
    signals: Vec<i32>,
    exit: ExitAction,
}

impl PosixSignalTrigger {
    pub fn new() -> Self {
        Self::with_signals(DEFAULT_SIGNALS)
    }

    /// Watch the given signals instead of the defaults. An empty set falls
    /// back to the defaults.
    pub fn with_signals(signals: impl IntoIterator<Item = i32>) -> Self {
        let mut signals: Vec<i32> = signals.into_iter().collect();
        if signals.is_empty() {
            signals = DEFAULT_SIGNALS.to_vec();
        }

        Self {
            signals,
            exit: ExitAction::process(),
        }
    }

    /// Replace what happens once shutdown completes
    pub fn with_exit_action(mut self, exit: ExitAction) -> Self {
        self.exit = exit;
        self
    }

    pub fn signals(&self) -> &[i32] {
        &self.signals
    }
}

impl Default for PosixSignalTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger for PosixSignalTrigger {
    fn name(&self) -> &str {
        NAME
    }

    fn start(self: Arc<Self>, shutdown: GracefulShutdown) -> anyhow::Result<()> {
        let runtime = Handle::try_current().map_err(|_| TriggerError::NoRuntime { name: NAME })?;

        // Register before returning so a signal sent right after start is seen.
        let mut signals = {
            let _guard = runtime.enter();
            Signals::new(&self.signals).map_err(|source| TriggerError::SignalRegistration {
                signals: self.signals.clone(),
                source,
            })?
        };
        let handle = signals.handle();

        let watched: Vec<String> = self.signals.iter().map(|s| signal_name(*s)).collect();
        info!("Listening for signals: {}", watched.join(", "));

        runtime.spawn(async move {
            if let Some(signal) = signals.next().await {
                info!("Received signal: {}", signal_name(signal));
                handle.close();

                let reporter = shutdown.clone();
                let result =
                    tokio::task::spawn_blocking(move || shutdown.start_shutdown(&*self)).await;
                if let Err(e) = result {
                    error!("Signal-initiated shutdown task failed: {}", e);
                    reporter.report_error(anyhow::anyhow!("signal shutdown task failed: {}", e));
                }
            }
        });

        Ok(())
    }

    fn on_shutdown_end(&self) -> anyhow::Result<()> {
        self.exit.run(0);
        Ok(())
    }
}
