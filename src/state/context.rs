//! Timer context bookkeeping for the current run

use std::time::Instant;

/// Work preset: 25 minutes
pub const WORK_DURATION_MS: u64 = 1_500_000;
/// Break preset: 5 minutes
pub const BREAK_DURATION_MS: u64 = 300_000;
/// Remaining time at which the reminder announcement fires
pub const REMINDER_THRESHOLD_MS: u64 = 300_000;

/// Mutable bookkeeping for the current countdown run.
///
/// Lives for the duration of one run; starting a new run fully replaces it
/// via [`TimerContext::reset`].
#[derive(Debug, Clone)]
pub struct TimerContext {
    /// Monotonic instant the current run began
    pub started_at: Instant,
    /// Configured duration of the current run in milliseconds
    pub total_ms: u64,
    /// Cached remaining time, recomputed on each tick
    pub remaining_ms: u64,
    /// True once the five-minute reminder has fired for this run
    pub reminder_fired: bool,
}

impl TimerContext {
    /// Create a fresh context with the work preset
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            total_ms: WORK_DURATION_MS,
            remaining_ms: WORK_DURATION_MS,
            reminder_fired: false,
        }
    }

    /// Re-initialize for a fresh run, keeping the configured duration
    pub fn reset(&mut self, now: Instant) {
        self.started_at = now;
        self.remaining_ms = self.total_ms;
        self.reminder_fired = false;
    }
}

/// Remaining time in milliseconds, rounded up to whole seconds.
///
/// May go negative once the run has overshot its duration; callers treat
/// any value `<= 0` as the end of the run.
pub fn compute_remaining(total_ms: u64, started_at: Instant, now: Instant) -> i64 {
    let elapsed_ms = now.saturating_duration_since(started_at).as_millis() as i64;
    let raw = total_ms as i64 - elapsed_ms;
    (raw + 999).div_euclid(1000) * 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn remaining_after(total_ms: u64, elapsed_ms: u64) -> i64 {
        let start = Instant::now();
        compute_remaining(total_ms, start, start + Duration::from_millis(elapsed_ms))
    }

    #[test]
    fn remaining_is_full_duration_at_start() {
        assert_eq!(remaining_after(WORK_DURATION_MS, 0), 1_500_000);
    }

    #[test]
    fn remaining_rounds_up_to_whole_seconds() {
        assert_eq!(remaining_after(WORK_DURATION_MS, 100), 1_500_000);
        assert_eq!(remaining_after(WORK_DURATION_MS, 999), 1_500_000);
        assert_eq!(remaining_after(WORK_DURATION_MS, 1_000), 1_499_000);
        assert_eq!(remaining_after(WORK_DURATION_MS, 1_001), 1_499_000);
    }

    #[test]
    fn remaining_reaches_zero_exactly_at_the_full_duration() {
        assert_eq!(remaining_after(BREAK_DURATION_MS, 299_001), 1_000);
        assert_eq!(remaining_after(BREAK_DURATION_MS, 300_000), 0);
    }

    #[test]
    fn remaining_goes_negative_past_the_duration() {
        assert_eq!(remaining_after(BREAK_DURATION_MS, 300_999), 0);
        assert_eq!(remaining_after(BREAK_DURATION_MS, 301_000), -1_000);
    }

    #[test]
    fn reset_restores_the_configured_duration() {
        let start = Instant::now();
        let mut context = TimerContext::new(start);
        context.total_ms = BREAK_DURATION_MS;
        context.remaining_ms = 42_000;
        context.reminder_fired = true;

        let later = start + Duration::from_secs(10);
        context.reset(later);

        assert_eq!(context.started_at, later);
        assert_eq!(context.remaining_ms, BREAK_DURATION_MS);
        assert!(!context.reminder_fired);
    }
}
