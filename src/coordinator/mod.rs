//! Shutdown coordination module
//!
//! This module contains the coordinator together with the callback and error
//! handler capabilities it consumes.

pub mod callback;
pub mod error_handler;
pub mod graceful_shutdown;

// Re-export main types
pub use callback::ShutdownCallback;
pub use error_handler::{ErrorHandler, LogErrorHandler};
pub use graceful_shutdown::GracefulShutdown;
