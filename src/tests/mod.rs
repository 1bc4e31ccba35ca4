mod config;
mod signal;

use std::sync::{Arc, Mutex};

use crate::{coordinator::GracefulShutdown, triggers::Trigger};

pub(crate) const TEST_TRIGGER: &str = "test-trigger";
pub(crate) const BOOM: &str = "boom";

type Hook = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

fn ok_hook() -> Hook {
    Box::new(|| Ok(()))
}

/// Trigger whose hooks are supplied by the test
pub(crate) struct TestTrigger {
    name: String,
    start: Hook,
    begin: Hook,
    end: Hook,
}

impl TestTrigger {
    pub(crate) fn new() -> Self {
        Self::named(TEST_TRIGGER)
    }

    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: ok_hook(),
            begin: ok_hook(),
            end: ok_hook(),
        }
    }

    pub(crate) fn on_start<F>(mut self, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.start = Box::new(f);
        self
    }

    pub(crate) fn on_begin<F>(mut self, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.begin = Box::new(f);
        self
    }

    pub(crate) fn on_end<F>(mut self, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.end = Box::new(f);
        self
    }
}

impl Trigger for TestTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(self: Arc<Self>, _shutdown: GracefulShutdown) -> anyhow::Result<()> {
        (self.start)()
    }

    fn on_shutdown_begin(&self) -> anyhow::Result<()> {
        (self.begin)()
    }

    fn on_shutdown_end(&self) -> anyhow::Result<()> {
        (self.end)()
    }
}

/// Install an error handler that records every message it receives
pub(crate) fn capture_errors(shutdown: &GracefulShutdown) -> Arc<Mutex<Vec<String>>> {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    shutdown.set_error_handler(move |err: anyhow::Error| {
        sink.lock().unwrap().push(err.to_string());
    });
    errors
}
