//! Cleanup callbacks run during shutdown

/// A unit of cleanup work, run once when shutdown begins.
///
/// Receives the name of the trigger that initiated shutdown. Closures of the
/// form `|origin: &str| -> anyhow::Result<()> { .. }` implement this directly.
pub trait ShutdownCallback: Send + Sync {
    fn run(&self, origin: &str) -> anyhow::Result<()>;
}

impl<F> ShutdownCallback for F
where
    F: Fn(&str) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, origin: &str) -> anyhow::Result<()> {
        self(origin)
    }
}
