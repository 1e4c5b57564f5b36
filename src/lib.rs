//! Tomato Bell - a state-machine driven Pomodoro countdown timer
//!
//! This library provides a small finite-state machine (idle vs running)
//! with 25-minute work and 5-minute break presets, a 100ms tick driver,
//! and injected time-source and notification capabilities.

pub mod config;
pub mod console;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use services::{Clock, DesktopNotifier, MonotonicClock, Notifier, NullNotifier};
pub use state::{Event, Snapshot, TimerMachine, TimerState};
pub use tasks::{timer_loop, Command};
pub use utils::shutdown_signal;
