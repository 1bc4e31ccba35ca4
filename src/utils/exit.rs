//! Process termination as a swappable value

use std::{fmt, sync::Arc};

use tracing::info;

/// The terminal action a trigger runs once shutdown completes.
///
/// Defaults to ending the process; tests substitute a recording closure.
#[derive(Clone)]
pub struct ExitAction(Arc<dyn Fn(i32) + Send + Sync>);

impl ExitAction {
    /// Terminate the process with the given status code
    pub fn process() -> Self {
        Self(Arc::new(|code: i32| {
            info!("Exiting with status {}", code);
            std::process::exit(code)
        }))
    }

    /// Do nothing, leaving the process running
    pub fn noop() -> Self {
        Self(Arc::new(|_: i32| {}))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn run(&self, code: i32) {
        (self.0)(code)
    }
}

impl Default for ExitAction {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for ExitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExitAction")
    }
}
