//! Graceful Shutdown - demo daemon
//!
//! Runs until one of the configured triggers fires, then executes its
//! cleanup callbacks and exits.

use std::time::Instant;

use tracing::info;

use graceful_shutdown::{
    config::Config,
    coordinator::GracefulShutdown,
    triggers::{HttpTrigger, PosixSignalTrigger, TimerTrigger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "graceful_shutdown={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting graceful-shutdown v{}", env!("CARGO_PKG_VERSION"));

    // Errors raised during shutdown are logged by the default handler
    let shutdown = GracefulShutdown::new();

    shutdown.add_trigger(PosixSignalTrigger::with_signals(config.signal_numbers()?));
    if !config.no_http {
        shutdown.add_trigger(HttpTrigger::new(config.address()));
    }
    if let Some(duration) = config.timer_duration() {
        shutdown.add_trigger(TimerTrigger::new(duration));
    }

    let started = Instant::now();
    shutdown.add_callback(|origin: &str| -> anyhow::Result<()> {
        info!("Shutdown requested by {}", origin);
        Ok(())
    });
    shutdown.add_callback(move |_: &str| -> anyhow::Result<()> {
        info!("Ran for {:?}", started.elapsed());
        Ok(())
    });

    shutdown.start()?;
    info!("Triggers: {}", shutdown.trigger_names().join(", "));

    // The built-in triggers end the process from their end hook, so this only
    // returns for custom triggers that leave it running.
    shutdown.wait_for_completion().await;

    info!("Shutdown complete");
    Ok(())
}
