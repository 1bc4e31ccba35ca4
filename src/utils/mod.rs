//! Utility functions module
//!
//! This module contains helpers shared by the built-in triggers.

pub mod exit;
pub mod signals;

// Re-export main items
pub use exit::ExitAction;
pub use signals::{parse_signal, signal_name, DEFAULT_SIGNALS};
