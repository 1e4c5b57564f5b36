//! Core state machine module
//!
//! This module contains the timer context, the state machine and its
//! transition function, and the snapshots it publishes.

pub mod context;
pub mod machine;
pub mod snapshot;

// Re-export main types
pub use context::{TimerContext, BREAK_DURATION_MS, WORK_DURATION_MS};
pub use machine::{transition, Effect, Event, TimerMachine, TimerState};
pub use snapshot::Snapshot;
