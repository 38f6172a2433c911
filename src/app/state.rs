use crate::config::AppConfig;
use crate::quiz::bank::QuestionBank;
use crate::quiz::session::{Phase, QuizSession};
use std::time::Instant;

pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    /// Option under the keyboard cursor while awaiting an answer.
    pub highlighted: usize,
    /// When the pending auto-restart is due, for the countdown.
    pub restart_at: Option<Instant>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, bank: QuestionBank) -> Self {
        let session = QuizSession::new(bank, config.round.length);
        Self::with_session(config, session)
    }

    pub fn with_session(config: AppConfig, session: QuizSession) -> Self {
        Self {
            config,
            session,
            highlighted: 0,
            restart_at: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn move_highlight(&mut self, down: bool) {
        let count = self.session.current().options.len();
        if count == 0 {
            return;
        }
        self.highlighted = if down {
            (self.highlighted + 1) % count
        } else if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
        self.dirty = true;
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
        self.dirty = true;
    }

    /// Whole seconds left before the automatic restart, rounded up.
    pub fn restart_countdown(&self, now: Instant) -> Option<u64> {
        self.restart_at.map(|at| {
            let left = at.saturating_duration_since(now);
            left.as_millis().div_ceil(1000) as u64
        })
    }

    pub fn status_line(&self) -> &'static str {
        match self.session.phase() {
            Phase::Idle => "1-4 answer  ↑/↓ move  Enter select  r restart  q quit",
            Phase::Answered => "Next question coming up...  r restart  q quit",
            Phase::RoundComplete => "Enter play again  q quit",
        }
    }
}
