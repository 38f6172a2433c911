use crate::quiz::session::TimerTask;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A scheduled session transition came due
    Timer { task: TimerTask, epoch: u64 },

    /// Tick for UI refresh
    Tick,
}
