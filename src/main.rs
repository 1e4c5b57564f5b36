//! Tomato Bell - a state-machine driven Pomodoro countdown timer
//!
//! This is the main entry point for the tomato-bell application.

use tokio::sync::mpsc;
use tracing::info;

use tomato_bell::{
    config::Config,
    console::{command_loop, render_loop},
    services::{DesktopNotifier, MonotonicClock, Notifier, NullNotifier},
    state::TimerMachine,
    tasks::timer_loop,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_bell={}", config.log_level()))
        .init();

    info!("Starting tomato-bell v0.2.0");

    let notifier: Box<dyn Notifier> = if config.quiet {
        Box::new(NullNotifier)
    } else {
        Box::new(DesktopNotifier)
    };

    let machine = TimerMachine::new(MonotonicClock, notifier);
    let snapshots = machine.subscribe();
    let (command_tx, command_rx) = mpsc::channel(16);

    // The driver task owns the machine and its tick source
    tokio::spawn(timer_loop(machine, command_rx));

    // The renderer follows the snapshot channel
    tokio::spawn(render_loop(snapshots, config.json));

    info!("Commands:");
    info!("  work   - start a 25 minute work run");
    info!("  break  - start a 5 minute break run");
    info!("  stop   - cancel the current run");
    info!("  quit   - exit");

    tokio::select! {
        _ = command_loop(command_tx) => {
            info!("Console closed");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Timer shutdown complete");
    Ok(())
}
