//! The Pomodoro state machine and its transition function

use std::time::Instant;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::services::{Clock, Notifier};

use super::context::{
    compute_remaining, TimerContext, BREAK_DURATION_MS, REMINDER_THRESHOLD_MS, WORK_DURATION_MS,
};
use super::snapshot::Snapshot;

/// Announcement text for the end of a run
pub const TIMER_ENDED_MESSAGE: &str = "Stop working!! Pomodoro Timer ended";
/// Announcement text for the five-minute reminder
pub const REMINDER_MESSAGE: &str = "Five minutes remaining";

/// The two machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

impl TimerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
        }
    }
}

/// Events accepted by the machine. `Tick` is internal, emitted by the
/// timer driver while the machine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    StartWork,
    StartBreak,
    Stop,
    Tick,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Announce(&'static str),
}

/// Transition function: takes the current state and context and returns the
/// next pair plus the side effects to run. Events a state has no handler
/// for leave everything untouched.
pub fn transition(
    state: TimerState,
    mut context: TimerContext,
    event: Event,
    now: Instant,
) -> (TimerState, TimerContext, Vec<Effect>) {
    let mut effects = Vec::new();

    let next = match (state, event) {
        (TimerState::Idle, Event::StartWork) => {
            context.total_ms = WORK_DURATION_MS;
            context.reset(now);
            TimerState::Running
        }
        (TimerState::Idle, Event::StartBreak) => {
            context.total_ms = BREAK_DURATION_MS;
            context.reset(now);
            TimerState::Running
        }
        (TimerState::Running, Event::Tick) => {
            let remaining = compute_remaining(context.total_ms, context.started_at, now);
            if remaining > 0 {
                context.remaining_ms = remaining as u64;
                // The reminder only applies to runs longer than the
                // threshold; a break run rounds up to exactly 5:00 on its
                // first tick and must stay silent.
                if !context.reminder_fired
                    && context.total_ms > REMINDER_THRESHOLD_MS
                    && context.remaining_ms == REMINDER_THRESHOLD_MS
                {
                    context.reminder_fired = true;
                    effects.push(Effect::Announce(REMINDER_MESSAGE));
                }
                TimerState::Running
            } else {
                // Reset keeps the configured duration, so the idle display
                // shows the full countdown again.
                context.reset(now);
                effects.push(Effect::Announce(TIMER_ENDED_MESSAGE));
                TimerState::Idle
            }
        }
        (TimerState::Running, Event::Stop) => {
            context.reset(now);
            TimerState::Idle
        }
        (state, _) => state,
    };

    (next, context, effects)
}

/// The timer machine: owns the context and the injected capabilities, and
/// processes one event at a time to completion.
///
/// Every processed event publishes a [`Snapshot`] on a watch channel for
/// the view layer; [`TimerMachine::send`] also returns it synchronously.
pub struct TimerMachine<C: Clock, N: Notifier> {
    state: TimerState,
    context: TimerContext,
    clock: C,
    notifier: N,
    snapshot_tx: watch::Sender<Snapshot>,
    /// Keep one receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<Snapshot>,
}

impl<C: Clock, N: Notifier> TimerMachine<C, N> {
    /// Create an idle machine with the work preset loaded
    pub fn new(clock: C, notifier: N) -> Self {
        let context = TimerContext::new(clock.now());
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::of(TimerState::Idle, &context));

        Self {
            state: TimerState::Idle,
            context,
            clock,
            notifier,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Subscribe to the snapshots published after every processed event
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Current machine state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Current (state, context) snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.state, &self.context)
    }

    /// Process a single event to completion: apply the transition, run the
    /// requested effects through the notifier, publish and return the
    /// resulting snapshot.
    pub fn send(&mut self, event: Event) -> Snapshot {
        let now = self.clock.now();
        let (next, context, effects) = transition(self.state, self.context.clone(), event, now);

        if next != self.state {
            debug!("{} --{:?}--> {}", self.state.as_str(), event, next.as_str());
        }
        self.state = next;
        self.context = context;

        for effect in effects {
            match effect {
                // Fire-and-forget: the notifier swallows its own failures
                Effect::Announce(message) => self.notifier.announce(message),
            }
        }

        let snapshot = self.snapshot();
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to publish snapshot: {}", e);
        }
        snapshot
    }
}
