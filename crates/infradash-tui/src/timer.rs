//! Tokio-backed auto-scroll timers.

use crate::event::Event;
use infradash_core::{TimerGuard, TimerId, TimerSource};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Runs each timer as a task that posts [`Event::AutoScroll`] into the event
/// loop. Dropping the guard aborts the task.
#[derive(Debug, Clone)]
pub struct TokioTimers {
    tx: mpsc::UnboundedSender<Event>,
}

impl TokioTimers {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self { tx }
    }
}

impl TimerSource for TokioTimers {
    fn start_repeating(&mut self, id: TimerId, period: Duration) -> TimerGuard {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Event::AutoScroll(id)).is_err() {
                    break;
                }
            }
        });

        TimerGuard::new(id, move || handle.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_guard_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = TokioTimers::new(tx);

        let guard = timers.start_repeating(TimerId(7), Duration::from_millis(100));
        for _ in 0..3 {
            match rx.recv().await {
                Some(Event::AutoScroll(id)) => assert_eq!(id, TimerId(7)),
                other => panic!("unexpected event: {other:?}"),
            }
        }

        guard.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;
        // Anything still queued was sent before the abort
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, Event::AutoScroll(TimerId(7))));
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
