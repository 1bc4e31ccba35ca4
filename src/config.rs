//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{error::TriggerError, utils::parse_signal};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "graceful-shutdown")]
#[command(about = "Runs until a signal, timer or HTTP request shuts it down gracefully")]
#[command(version)]
pub struct Config {
    /// Port for the HTTP shutdown endpoint
    #[arg(short, long, default_value = "20553")]
    pub port: u16,

    /// Host address for the HTTP shutdown endpoint
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Disable the HTTP shutdown endpoint
    #[arg(long)]
    pub no_http: bool,

    /// Shut down automatically after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Signals that start shutdown, e.g. SIGINT,SIGTERM
    #[arg(short, long, value_delimiter = ',', default_values = ["SIGINT", "SIGTERM"])]
    pub signals: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the HTTP endpoint address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Delay for the timer trigger, if one is configured
    pub fn timer_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Resolve the configured signal names to signal numbers
    pub fn signal_numbers(&self) -> Result<Vec<i32>, TriggerError> {
        self.signals.iter().map(|name| parse_signal(name)).collect()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
