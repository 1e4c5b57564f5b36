//! Background tasks module
//!
//! This module contains the timer driver task that runs alongside the
//! console view.

pub mod tick_driver;

// Re-export main functions
pub use tick_driver::{timer_loop, Command, TICK_INTERVAL};
