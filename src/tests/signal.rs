use std::{sync::Arc, time::Duration};

use signal_hook::consts::signal::{SIGINT, SIGTERM, SIGUSR1};
use tokio::{sync::mpsc, time::timeout};

use crate::{
    coordinator::GracefulShutdown,
    error::TriggerError,
    triggers::{signal::NAME, PosixSignalTrigger, Trigger},
    utils::ExitAction,
};

#[test]
fn given_no_signals_when_created_then_watches_interrupt_and_terminate() {
    assert_eq!(PosixSignalTrigger::new().signals(), &[SIGINT, SIGTERM]);
    assert_eq!(PosixSignalTrigger::with_signals([]).signals(), &[SIGINT, SIGTERM]);
    assert_eq!(PosixSignalTrigger::new().name(), NAME);
}

#[test]
fn given_no_runtime_when_started_then_startup_fails() {
    let shutdown = GracefulShutdown::new();
    shutdown.add_trigger(PosixSignalTrigger::new().with_exit_action(ExitAction::noop()));

    let err = shutdown.start().unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TriggerError>(),
        Some(TriggerError::NoRuntime { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_started_trigger_when_signal_raised_then_shutdown_runs_and_exits_zero() {
    let (exit_tx, mut exit_rx) = mpsc::unbounded_channel();
    let trigger = PosixSignalTrigger::with_signals([SIGUSR1])
        .with_exit_action(ExitAction::from_fn(move |code| {
            let _ = exit_tx.send(code);
        }));

    let shutdown = GracefulShutdown::new();
    shutdown.add_trigger(trigger);
    let (origin_tx, mut origin_rx) = mpsc::unbounded_channel();
    shutdown.add_callback(move |origin: &str| -> anyhow::Result<()> {
        let _ = origin_tx.send(origin.to_string());
        Ok(())
    });
    shutdown.start().unwrap();

    signal_hook::low_level::raise(SIGUSR1).unwrap();

    let code = timeout(Duration::from_secs(5), exit_rx.recv()).await;
    assert_eq!(code.unwrap(), Some(0));
    let origin = timeout(Duration::from_secs(1), origin_rx.recv()).await;
    assert_eq!(origin.unwrap().as_deref(), Some(NAME));

    timeout(Duration::from_secs(1), shutdown.wait_for_completion())
        .await
        .unwrap();
}

#[test]
fn given_other_origin_when_shutdown_ends_then_signal_trigger_does_not_exit() {
    let (exit_tx, mut exit_rx) = mpsc::unbounded_channel::<i32>();
    let signal_trigger = Arc::new(PosixSignalTrigger::new().with_exit_action(
        ExitAction::from_fn(move |code| {
            let _ = exit_tx.send(code);
        }),
    ));
    let shutdown = GracefulShutdown::new();
    shutdown.add_shared_trigger(signal_trigger);

    shutdown.start_shutdown(&super::TestTrigger::new());

    assert!(exit_rx.try_recv().is_err());
}
