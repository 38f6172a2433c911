//! Deferred session transitions.
//!
//! A scheduled transition runs as a background tokio task that sleeps for the
//! requested delay and then posts [`AppEvent::Timer`] back into the main event
//! channel. At most one transition is pending at a time. Scheduling a new one
//! or calling [`Scheduler::cancel_all`] cancels the previous task's token.
//! The session epoch carried in the event also guards against a timer that
//! raced past cancellation.

use crate::app::event::AppEvent;
use crate::quiz::session::TimerTask;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<CancellationToken>,
}

impl Scheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, task: TimerTask, epoch: u64, delay: Duration) {
        self.cancel_all();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.event_tx.clone();
        debug!(?task, epoch, delay_ms = delay.as_millis() as u64, "timer scheduled");

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(AppEvent::Timer { task, epoch });
                }
            }
        });

        self.pending = Some(token);
    }

    pub fn cancel_all(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(TimerTask::Advance, 4, Duration::from_secs(3));

        let event = timeout(Duration::from_secs(10), rx.recv()).await.unwrap();
        assert!(matches!(
            event,
            Some(AppEvent::Timer {
                task: TimerTask::Advance,
                epoch: 4
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(TimerTask::Restart, 1, Duration::from_secs(5));
        scheduler.cancel_all();

        assert!(timeout(Duration::from_secs(30), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(TimerTask::Advance, 1, Duration::from_secs(3));
        scheduler.schedule(TimerTask::Restart, 2, Duration::from_secs(5));

        let event = timeout(Duration::from_secs(10), rx.recv()).await.unwrap();
        assert!(matches!(
            event,
            Some(AppEvent::Timer {
                task: TimerTask::Restart,
                epoch: 2
            })
        ));
        assert!(timeout(Duration::from_secs(30), rx.recv()).await.is_err());
    }
}
