//! Shutdown after a fixed delay

use std::{sync::Arc, time::Duration};

use tokio::{runtime::Handle, time::sleep};
use tracing::{error, info};

use super::Trigger;
use crate::{coordinator::GracefulShutdown, error::TriggerError, utils::ExitAction};

/// Name reported by [`TimerTrigger`]
pub const NAME: &str = "TimerTrigger";

/// Starts shutdown once `duration` has elapsed since `start`
#[derive(Debug)]
pub struct TimerTrigger {
    duration: Duration,
    exit: ExitAction,
}

impl TimerTrigger {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            exit: ExitAction::process(),
        }
    }

    /// Replace what happens once shutdown completes
    pub fn with_exit_action(mut self, exit: ExitAction) -> Self {
        self.exit = exit;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Trigger for TimerTrigger {
    fn name(&self) -> &str {
        NAME
    }

    fn start(self: Arc<Self>, shutdown: GracefulShutdown) -> anyhow::Result<()> {
        let runtime = Handle::try_current().map_err(|_| TriggerError::NoRuntime { name: NAME })?;
        info!("Shutdown timer armed for {:?}", self.duration);

        runtime.spawn(async move {
            sleep(self.duration).await;

            info!("Shutdown timer expired after {:?}", self.duration);
            let reporter = shutdown.clone();
            let result = tokio::task::spawn_blocking(move || shutdown.start_shutdown(&*self)).await;
            if let Err(e) = result {
                error!("Timer-initiated shutdown task failed: {}", e);
                reporter.report_error(anyhow::anyhow!("timer shutdown task failed: {}", e));
            }
        });

        Ok(())
    }

    fn on_shutdown_end(&self) -> anyhow::Result<()> {
        self.exit.run(0);
        Ok(())
    }
}
