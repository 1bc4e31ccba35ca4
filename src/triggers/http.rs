//! Shutdown on request over HTTP

use std::{
    net::{SocketAddr, TcpListener as StdTcpListener},
    sync::{Arc, OnceLock},
};

use tokio::{net::TcpListener, runtime::Handle};
use tracing::{error, info};

use super::Trigger;
use crate::{
    api::{create_router, ApiState},
    coordinator::GracefulShutdown,
    error::TriggerError,
    utils::ExitAction,
};

/// Name reported by [`HttpTrigger`]
pub const NAME: &str = "HttpTrigger";

/// Default bind address for the control endpoint
pub const DEFAULT_ADDR: &str = "127.0.0.1:20553";

/// Serves a small control API and starts shutdown on `POST /shutdown`.
///
/// The server stops accepting connections as soon as shutdown begins,
/// whichever trigger started it.
#[derive(Debug)]
pub struct HttpTrigger {
    addr: String,
    exit: ExitAction,
    local_addr: OnceLock<SocketAddr>,
}

impl HttpTrigger {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            exit: ExitAction::process(),
            local_addr: OnceLock::new(),
        }
    }

    /// Replace what happens once shutdown completes
    pub fn with_exit_action(mut self, exit: ExitAction) -> Self {
        self.exit = exit;
        self
    }

    /// Address actually bound, available once started
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr.get().copied()
    }

    fn bind(&self) -> Result<StdTcpListener, TriggerError> {
        let bind_error = |source| TriggerError::Bind {
            addr: self.addr.clone(),
            source,
        };

        let listener = StdTcpListener::bind(&self.addr).map_err(bind_error)?;
        listener.set_nonblocking(true).map_err(bind_error)?;
        Ok(listener)
    }
}

impl Default for HttpTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR)
    }
}

impl Trigger for HttpTrigger {
    fn name(&self) -> &str {
        NAME
    }

    fn start(self: Arc<Self>, shutdown: GracefulShutdown) -> anyhow::Result<()> {
        let runtime = Handle::try_current().map_err(|_| TriggerError::NoRuntime { name: NAME })?;

        let std_listener = self.bind()?;
        let local_addr = std_listener.local_addr()?;
        let _ = self.local_addr.set(local_addr);
        let listener = {
            let _guard = runtime.enter();
            TcpListener::from_std(std_listener)?
        };

        let state = Arc::new(ApiState {
            shutdown: shutdown.clone(),
            origin: self,
        });
        let app = create_router(state);
        let mut phase_rx = shutdown.subscribe();

        info!("Shutdown endpoint running on http://{}", local_addr);
        info!("Endpoints:");
        info!("  POST /shutdown - Start graceful shutdown");
        info!("  GET  /status   - Coordinator phase and registrations");
        info!("  GET  /health   - Health check");

        runtime.spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = phase_rx.wait_for(|phase| phase.is_shutting_down()).await;
            });

            if let Err(e) = server.await {
                error!("Shutdown endpoint error: {}", e);
                shutdown.report_error(e.into());
            }
            info!("Shutdown endpoint stopped");
        });

        Ok(())
    }

    fn on_shutdown_end(&self) -> anyhow::Result<()> {
        self.exit.run(0);
        Ok(())
    }
}
