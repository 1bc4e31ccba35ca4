use std::time::Duration;

use clap::Parser;
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR2};

use crate::{
    config::Config,
    error::TriggerError,
    utils::{parse_signal, signal_name},
};

#[test]
fn given_no_arguments_when_parsed_then_defaults_applied() {
    let config = Config::try_parse_from(["graceful-shutdown"]).unwrap();

    assert_eq!(config.address(), "127.0.0.1:20553");
    assert!(!config.no_http);
    assert_eq!(config.timer_duration(), None);
    assert_eq!(config.signal_numbers().unwrap(), vec![SIGINT, SIGTERM]);
    assert_eq!(config.log_level(), "info");
}

#[test]
fn given_all_flags_when_parsed_then_reflected() {
    let config = Config::try_parse_from([
        "graceful-shutdown",
        "--port",
        "8080",
        "--host",
        "0.0.0.0",
        "--no-http",
        "--timeout",
        "30",
        "--signals",
        "hup,SIGUSR2",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(config.address(), "0.0.0.0:8080");
    assert!(config.no_http);
    assert_eq!(config.timer_duration(), Some(Duration::from_secs(30)));
    assert_eq!(config.signal_numbers().unwrap(), vec![SIGHUP, SIGUSR2]);
    assert_eq!(config.log_level(), "debug");
}

#[test]
fn given_unknown_signal_when_resolved_then_error_names_it() {
    let config =
        Config::try_parse_from(["graceful-shutdown", "--signals", "SIGINT,SIGBOGUS"]).unwrap();

    let err = config.signal_numbers().unwrap_err();

    assert!(matches!(&err, TriggerError::UnknownSignal(name) if name == "SIGBOGUS"));
    assert_eq!(err.to_string(), "unknown signal name: SIGBOGUS");
}

#[test]
fn given_signal_name_variants_when_parsed_then_same_number() {
    for name in ["SIGTERM", "TERM", "term", " sigterm "] {
        assert_eq!(parse_signal(name).unwrap(), SIGTERM, "{}", name);
    }
}

#[test]
fn given_signal_number_when_named_then_canonical_name() {
    assert_eq!(signal_name(SIGINT), "SIGINT");
    assert_eq!(signal_name(SIGUSR2), "SIGUSR2");
    assert_eq!(signal_name(-1), "signal -1");
}
