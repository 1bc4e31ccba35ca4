//! Signal name handling

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGUSR1, SIGUSR2};

use crate::error::TriggerError;

/// Signals watched when none are configured
pub const DEFAULT_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

const NAMED_SIGNALS: [(&str, i32); 6] = [
    ("INT", SIGINT),
    ("TERM", SIGTERM),
    ("HUP", SIGHUP),
    ("QUIT", SIGQUIT),
    ("USR1", SIGUSR1),
    ("USR2", SIGUSR2),
];

/// Parse a signal name such as `SIGTERM`, `term` or `Int`
pub fn parse_signal(name: &str) -> Result<i32, TriggerError> {
    let upper = name.trim().to_ascii_uppercase();
    let short = upper.strip_prefix("SIG").unwrap_or(&upper);

    NAMED_SIGNALS
        .iter()
        .find(|(candidate, _)| *candidate == short)
        .map(|(_, signal)| *signal)
        .ok_or_else(|| TriggerError::UnknownSignal(name.to_string()))
}

/// Display name for a signal number, e.g. `SIGTERM`
pub fn signal_name(signal: i32) -> String {
    NAMED_SIGNALS
        .iter()
        .find(|(_, candidate)| *candidate == signal)
        .map(|(name, _)| format!("SIG{}", name))
        .unwrap_or_else(|| format!("signal {}", signal))
}
