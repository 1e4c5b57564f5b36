//! State snapshots published to the view layer

use serde::Serialize;

use super::context::TimerContext;
use super::machine::TimerState;

/// Immutable view of the machine after one processed event. The view layer
/// renders `remaining_ms` as mm:ss and picks its controls from `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: TimerState,
    pub remaining_ms: u64,
    pub total_ms: u64,
    pub reminder_fired: bool,
}

impl Snapshot {
    pub(crate) fn of(state: TimerState, context: &TimerContext) -> Self {
        Self {
            state,
            remaining_ms: context.remaining_ms,
            total_ms: context.total_ms,
            reminder_fired: context.reminder_fired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn snapshot_serializes_with_lowercase_state() {
        let context = TimerContext::new(Instant::now());
        let snapshot = Snapshot::of(TimerState::Idle, &context);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["state"], "idle");
        assert_eq!(json["remaining_ms"], 1_500_000);
        assert_eq!(json["reminder_fired"], false);
    }
}
