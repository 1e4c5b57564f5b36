//! Timer driver task: owns the machine and its periodic tick source

use tokio::sync::mpsc;
use tokio::time::{interval, Duration, Interval};
use tracing::{debug, info};

use crate::services::{Clock, Notifier};
use crate::state::{Event, TimerMachine, TimerState};

/// How often the machine is ticked while running
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Commands the view layer may issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartWork,
    StartBreak,
    Stop,
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        match command {
            Command::StartWork => Event::StartWork,
            Command::StartBreak => Event::StartBreak,
            Command::Stop => Event::Stop,
        }
    }
}

/// Background task that drives the timer machine.
///
/// Admits one event at a time: commands from the view layer and, while the
/// machine is running, ticks from a periodic tick source. The tick source
/// exists exactly while the machine is in the running state, so repeated
/// start/stop cycles never accumulate timers. Returns when the command
/// channel closes.
pub async fn timer_loop<C: Clock, N: Notifier>(
    mut machine: TimerMachine<C, N>,
    mut commands: mpsc::Receiver<Command>,
) {
    info!("Starting timer driver task");

    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    debug!("Received command: {:?}", command);
                    machine.send(command.into());
                }
                None => break,
            },
            _ = next_tick(&mut ticker), if ticker.is_some() => {
                machine.send(Event::Tick);
            }
        }

        match machine.state() {
            TimerState::Running => {
                if ticker.is_none() {
                    let mut tick = interval(TICK_INTERVAL);
                    // An interval yields immediately on its first tick;
                    // consume it so the first machine tick lands one
                    // period after the run starts.
                    tick.tick().await;
                    ticker = Some(tick);
                    debug!("Tick source started");
                }
            }
            TimerState::Idle => {
                if ticker.take().is_some() {
                    debug!("Tick source stopped");
                }
            }
        }
    }

    info!("Command channel closed, timer driver task exiting");
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(tick) => {
            tick.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MonotonicClock, NullNotifier, RecordingNotifier};

    #[tokio::test(start_paused = true)]
    async fn start_and_stop_cycles_round_trip_through_running() {
        let notifier = RecordingNotifier::new();
        let machine = TimerMachine::new(MonotonicClock, notifier.clone());
        let mut snapshots = machine.subscribe();
        let (tx, rx) = mpsc::channel(8);
        let driver = tokio::spawn(timer_loop(machine, rx));

        for _ in 0..3 {
            tx.send(Command::StartBreak).await.unwrap();
            snapshots
                .wait_for(|s| s.state == TimerState::Running)
                .await
                .unwrap();

            tx.send(Command::Stop).await.unwrap();
            snapshots
                .wait_for(|s| s.state == TimerState::Idle)
                .await
                .unwrap();
        }

        assert!(notifier.messages().is_empty());

        // A leaked ticker would keep publishing snapshots while idle
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!snapshots.has_changed().unwrap());

        drop(tx);
        driver.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn running_machine_receives_ticks() {
        let machine = TimerMachine::new(MonotonicClock, NullNotifier);
        let mut snapshots = machine.subscribe();
        let (tx, rx) = mpsc::channel(8);
        let driver = tokio::spawn(timer_loop(machine, rx));

        tx.send(Command::StartWork).await.unwrap();
        snapshots
            .wait_for(|s| s.state == TimerState::Running)
            .await
            .unwrap();

        // Each tick republishes the snapshot even when nothing changed
        snapshots.changed().await.unwrap();

        drop(tx);
        driver.await.unwrap();
    }

    #[tokio::test]
    async fn driver_exits_when_command_channel_closes() {
        let machine = TimerMachine::new(MonotonicClock, NullNotifier);
        let (tx, rx) = mpsc::channel::<Command>(1);
        let driver = tokio::spawn(timer_loop(machine, rx));

        drop(tx);
        driver.await.unwrap();
    }
}
