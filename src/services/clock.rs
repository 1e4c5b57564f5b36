//! Monotonic time source capability

use std::time::Instant;

/// Injectable "now" source for elapsed-time computation.
///
/// Always monotonic, so the countdown is immune to wall-clock adjustments;
/// tests substitute a hand-advanced implementation.
pub trait Clock: Send + 'static {
    fn now(&self) -> Instant;
}

/// Production clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Test clock that only moves when advanced by hand
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: std::sync::Arc<std::sync::Mutex<std::time::Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Default::default(),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: std::time::Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}
