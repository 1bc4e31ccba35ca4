//! The shutdown coordinator

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError, RwLock,
    },
    time::Instant,
};

use anyhow::anyhow;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{ErrorHandler, LogErrorHandler, ShutdownCallback};
use crate::{
    state::{format_uptime, ShutdownPhase, ShutdownSession, ShutdownStatus},
    triggers::Trigger,
};

/// Coordinates shutdown between any number of triggers and cleanup callbacks.
///
/// Cloning is cheap; every clone refers to the same coordinator. Triggers
/// receive a clone in [`Trigger::start`] and call [`start_shutdown`] on it.
///
/// [`start_shutdown`]: GracefulShutdown::start_shutdown
#[derive(Clone)]
pub struct GracefulShutdown {
    inner: Arc<Inner>,
}

struct Inner {
    triggers: Mutex<Vec<Arc<dyn Trigger>>>,
    callbacks: Mutex<Vec<Arc<dyn ShutdownCallback>>>,
    error_handler: RwLock<Arc<dyn ErrorHandler>>,
    /// One-time gate guarding the shutdown body
    shutdown_started: AtomicBool,
    session: Mutex<Option<ShutdownSession>>,
    phase_tx: watch::Sender<ShutdownPhase>,
    created_at: Instant,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run one step of the session, turning a panic into an error
fn run_step<F>(step: &str, f: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(anyhow!("{} panicked: {}", step, panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

impl GracefulShutdown {
    /// Create an idle coordinator that logs errors until told otherwise
    pub fn new() -> Self {
        let (phase_tx, _) = watch::channel(ShutdownPhase::Idle);

        Self {
            inner: Arc::new(Inner {
                triggers: Mutex::new(Vec::new()),
                callbacks: Mutex::new(Vec::new()),
                error_handler: RwLock::new(Arc::new(LogErrorHandler)),
                shutdown_started: AtomicBool::new(false),
                session: Mutex::new(None),
                phase_tx,
                created_at: Instant::now(),
            }),
        }
    }

    /// Register a trigger.
    ///
    /// Before `start` the trigger is simply queued. While running it is
    /// started straight away and a start failure goes to the error handler.
    /// Once shutdown has begun the trigger is dropped.
    pub fn add_trigger<T: Trigger + 'static>(&self, trigger: T) {
        self.add_shared_trigger(Arc::new(trigger));
    }

    /// Register a trigger the caller keeps a handle to
    pub fn add_shared_trigger(&self, trigger: Arc<dyn Trigger>) {
        let phase = {
            let mut triggers = lock(&self.inner.triggers);
            let phase = self.phase();
            if phase.is_shutting_down() {
                warn!("Ignoring trigger {} added after shutdown began", trigger.name());
                return;
            }
            triggers.push(Arc::clone(&trigger));
            phase
        };

        if phase == ShutdownPhase::Running {
            info!("Starting late trigger: {}", trigger.name());
            if let Err(e) = trigger.start(self.clone()) {
                self.report_error(e);
            }
        }
    }

    /// Append a cleanup callback. Callbacks run in the order they were added.
    pub fn add_callback<C: ShutdownCallback + 'static>(&self, callback: C) {
        let mut callbacks = lock(&self.inner.callbacks);
        if self.phase().is_shutting_down() {
            warn!("Ignoring callback added after shutdown began");
            return;
        }
        callbacks.push(Arc::new(callback));
    }

    /// Replace the active error handler
    pub fn set_error_handler<H: ErrorHandler + 'static>(&self, handler: H) {
        let mut slot = self
            .inner
            .error_handler
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(handler);
    }

    /// Hand an error to the active error handler
    pub fn report_error(&self, err: anyhow::Error) {
        // Invoke outside the lock so the handler may report or swap itself.
        let handler = Arc::clone(
            &self
                .inner
                .error_handler
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        );
        handler.handle(err);
    }

    /// Start every registered trigger, in registration order.
    ///
    /// The first trigger to fail aborts startup; later triggers are not
    /// started and the error is returned as-is. Calling this a second time is
    /// a no-op.
    pub fn start(&self) -> anyhow::Result<()> {
        let triggers = {
            let triggers = lock(&self.inner.triggers);
            let became_running = self.inner.phase_tx.send_if_modified(|phase| {
                if *phase == ShutdownPhase::Idle {
                    *phase = ShutdownPhase::Running;
                    true
                } else {
                    false
                }
            });
            if !became_running {
                warn!("Coordinator already started ({}), ignoring start", self.phase());
                return Ok(());
            }
            triggers.clone()
        };

        info!("Starting {} shutdown triggers", triggers.len());
        for trigger in triggers {
            debug!("Starting trigger: {}", trigger.name());
            let name = trigger.name().to_string();
            if let Err(e) = trigger.start(self.clone()) {
                warn!("Trigger {} failed to start: {:#}", name, e);
                return Err(e);
            }
        }

        Ok(())
    }

    /// Run the shutdown session on behalf of `origin`.
    ///
    /// Only the first call ever runs the session and returns `true`; every
    /// other call, concurrent or later, returns `false` and does nothing.
    /// Errors from hooks and callbacks go to the error handler; a panicking
    /// hook or callback is reported the same way and the session carries on.
    pub fn start_shutdown(&self, origin: &dyn Trigger) -> bool {
        if self
            .inner
            .shutdown_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Shutdown already in progress, ignoring {}", origin.name());
            return false;
        }

        let origin_name = origin.name().to_string();
        *lock(&self.inner.session) = Some(ShutdownSession {
            origin: origin_name.clone(),
            started_at: Utc::now(),
        });
        self.inner.phase_tx.send_replace(ShutdownPhase::ShuttingDown);
        info!("Shutdown started by {}", origin_name);

        if let Err(e) = run_step("shutdown begin hook", || origin.on_shutdown_begin()) {
            debug!("Shutdown begin hook of {} failed", origin_name);
            self.report_error(e);
        }

        let callbacks = lock(&self.inner.callbacks).clone();
        for (index, callback) in callbacks.iter().enumerate() {
            debug!("Running shutdown callback {}/{}", index + 1, callbacks.len());
            let step = format!("shutdown callback {}", index + 1);
            if let Err(e) = run_step(&step, || callback.run(&origin_name)) {
                debug!("Shutdown callback {} failed", index + 1);
                self.report_error(e);
            }
        }
        info!("All {} shutdown callbacks finished", callbacks.len());

        if let Err(e) = run_step("shutdown end hook", || origin.on_shutdown_end()) {
            debug!("Shutdown end hook of {} failed", origin_name);
            self.report_error(e);
        }
        self.inner.phase_tx.send_replace(ShutdownPhase::Complete);

        true
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ShutdownPhase {
        *self.inner.phase_tx.borrow()
    }

    /// Receiver notified on every phase change
    pub fn subscribe(&self) -> watch::Receiver<ShutdownPhase> {
        self.inner.phase_tx.subscribe()
    }

    /// Resolve once the shutdown session has fully finished.
    ///
    /// Never resolves if the origin's end hook terminates the process.
    pub async fn wait_for_completion(&self) {
        let mut phase_rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = phase_rx
            .wait_for(|phase| *phase == ShutdownPhase::Complete)
            .await;
    }

    /// The session that won the gate, if any
    pub fn session(&self) -> Option<ShutdownSession> {
        lock(&self.inner.session).clone()
    }

    pub fn trigger_names(&self) -> Vec<String> {
        lock(&self.inner.triggers)
            .iter()
            .map(|trigger| trigger.name().to_string())
            .collect()
    }

    pub fn callback_count(&self) -> usize {
        lock(&self.inner.callbacks).len()
    }

    /// Snapshot of the coordinator for status reporting
    pub fn status(&self) -> ShutdownStatus {
        let session = self.session();
        ShutdownStatus {
            phase: self.phase(),
            origin: session.as_ref().map(|s| s.origin.clone()),
            started_at: session.map(|s| s.started_at),
            triggers: self.trigger_names(),
            callbacks: self.callback_count(),
            uptime: format_uptime(self.inner.created_at.elapsed()),
        }
    }
}

impl Default for GracefulShutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GracefulShutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GracefulShutdown")
            .field("phase", &self.phase())
            .field("triggers", &self.trigger_names())
            .field("callbacks", &self.callback_count())
            .finish()
    }
}
