/// Countdown scheduling: one tick per fixed interval, a finish event at
/// the end, and reliable cancellation.
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Notification emitted by a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One interval elapsed.
    Tick,
    /// All intervals elapsed.
    Finished,
}

/// Interval scheduler behind the round engine. `begin` emits `Tick` into
/// the sink once per `interval`, `ticks` times, then a single `Finished`.
///
/// `cancel` stops the schedule and must be idempotent. After it returns no
/// new events are produced; events already queued in the sink may still be
/// drained by the receiver, so consumers discard events that arrive
/// outside a running round.
pub trait CountdownTimer: Send {
    fn begin(&mut self, interval: Duration, ticks: u64, events: UnboundedSender<CountdownEvent>);
    fn cancel(&mut self);
}

/// Countdown driven by `tokio::time::interval` on a spawned task.
#[derive(Debug, Default)]
pub struct TokioCountdown {
    task: Option<JoinHandle<()>>,
}

impl CountdownTimer for TokioCountdown {
    fn begin(&mut self, interval: Duration, ticks: u64, events: UnboundedSender<CountdownEvent>) {
        self.cancel();
        self.task = Some(tokio::spawn(async move {
            let mut clock = tokio::time::interval(interval);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; swallow it so
            // the first emitted tick lands a full interval after begin().
            clock.tick().await;
            for _ in 0..ticks {
                clock.tick().await;
                if events.send(CountdownEvent::Tick).is_err() {
                    return;
                }
            }
            let _ = events.send(CountdownEvent::Finished);
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioCountdown {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn emits_each_tick_then_finished() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioCountdown::default();
        timer.begin(Duration::from_secs(1), 3, tx);

        let mut events = Vec::new();
        while let Some(ev) = rx.recv().await {
            events.push(ev);
        }
        assert_eq!(
            events,
            vec![
                CountdownEvent::Tick,
                CountdownEvent::Tick,
                CountdownEvent::Tick,
                CountdownEvent::Finished,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioCountdown::default();
        timer.begin(Duration::from_secs(1), 5, tx);
        timer.cancel();

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let mut timer = TokioCountdown::default();
        timer.cancel();

        let (tx, mut rx) = mpsc::unbounded_channel();
        timer.begin(Duration::from_secs(1), 1, tx);
        timer.cancel();
        timer.cancel();

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn begin_replaces_a_previous_schedule() {
        let (old_tx, mut old_rx) = mpsc::unbounded_channel();
        let (new_tx, mut new_rx) = mpsc::unbounded_channel();
        let mut timer = TokioCountdown::default();
        timer.begin(Duration::from_secs(1), 10, old_tx);
        timer.begin(Duration::from_secs(1), 1, new_tx);

        assert!(old_rx.recv().await.is_none());
        assert_eq!(new_rx.recv().await, Some(CountdownEvent::Tick));
        assert_eq!(new_rx.recv().await, Some(CountdownEvent::Finished));
    }
}
