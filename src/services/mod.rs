//! Injected capabilities module
//!
//! This module contains the capabilities the machine depends on but does
//! not own: the monotonic time source and the announcement sink.

pub mod clock;
pub mod notify;

// Re-export main types
pub use clock::{Clock, MonotonicClock};
pub use notify::{DesktopNotifier, Notifier, NullNotifier};

#[cfg(test)]
pub use clock::ManualClock;
#[cfg(test)]
pub use notify::RecordingNotifier;
