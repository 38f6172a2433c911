//! Quiz session controller.
//!
//! Owns the state of one running quiz and enforces the round rules. The
//! controller never sleeps or spawns anything itself. Operations that need a
//! deferred transition return a [`Pending`] describing it, and the caller is
//! expected to feed it back through [`QuizSession::on_timer`] once the delay
//! has elapsed. Every transition that consumes or invalidates a pending timer
//! bumps the session epoch, so a timer carrying an older epoch is ignored.

use super::bank::QuestionBank;
use super::question::Question;
use super::select;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{debug, info, warn};

pub const DEFAULT_ROUND_LENGTH: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Awaiting a selection.
    Idle,
    /// Answer locked, feedback on screen.
    Answered,
    RoundComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Move past the feedback to the next question (or the completion screen).
    Advance,
    /// Start a new round from the completion screen.
    Restart,
}

/// A deferred transition the caller must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub task: TimerTask,
    pub epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Stale,
    NextQuestion,
    RoundComplete(Pending),
    Restarted,
}

pub struct QuizSession {
    bank: QuestionBank,
    round_length: u32,
    rng: StdRng,
    current: Question,
    selected: Option<usize>,
    score: u32,
    attempts: u32,
    feedback: Feedback,
    round_complete: bool,
    epoch: u64,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, round_length: u32) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_rng(bank, round_length, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bank: QuestionBank, round_length: u32, mut rng: StdRng) -> Self {
        let current = select::draw(&bank, None, &mut rng);
        info!(question = current.id, bank = bank.len(), "quiz session started");
        Self {
            bank,
            round_length: round_length.max(1),
            rng,
            current,
            selected: None,
            score: 0,
            attempts: 0,
            feedback: Feedback::None,
            round_complete: false,
            epoch: 0,
        }
    }

    pub fn current(&self) -> &Question {
        &self.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn is_round_complete(&self) -> bool {
        self.round_complete
    }

    pub fn round_length(&self) -> u32 {
        self.round_length
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> Phase {
        if self.round_complete {
            Phase::RoundComplete
        } else if self.selected.is_some() {
            Phase::Answered
        } else {
            Phase::Idle
        }
    }

    /// One-based number of the question on screen, for the header counter.
    pub fn question_number(&self) -> u32 {
        (self.attempts + 1).min(self.round_length)
    }

    /// Lock in an answer for the current question.
    ///
    /// Returns `None` without touching any state if an answer is already
    /// locked, the round is over, or `index` is not an option position.
    pub fn select_answer(&mut self, index: usize) -> Option<Pending> {
        if self.selected.is_some() || self.round_complete {
            return None;
        }
        if index >= self.current.options.len() {
            warn!(
                index,
                options = self.current.options.len(),
                "ignoring out-of-range answer"
            );
            return None;
        }

        self.selected = Some(index);
        let correct = self.current.is_correct(index);
        self.feedback = if correct {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.attempts += 1;
        debug!(
            question = self.current.id,
            index,
            correct,
            score = self.score,
            attempts = self.attempts,
            "answer locked"
        );

        Some(Pending {
            task: TimerTask::Advance,
            epoch: self.epoch,
        })
    }

    /// Apply a timer that has fired. Timers from an older epoch are dropped.
    pub fn on_timer(&mut self, task: TimerTask, epoch: u64) -> TimerOutcome {
        if epoch != self.epoch {
            return TimerOutcome::Stale;
        }

        match task {
            TimerTask::Advance => {
                if self.selected.is_none() || self.round_complete {
                    return TimerOutcome::Stale;
                }
                self.epoch = self.epoch.wrapping_add(1);
                if self.attempts >= self.round_length {
                    self.round_complete = true;
                    info!(
                        score = self.score,
                        out_of = self.round_length,
                        "round complete"
                    );
                    return TimerOutcome::RoundComplete(Pending {
                        task: TimerTask::Restart,
                        epoch: self.epoch,
                    });
                }
                self.current = select::draw(&self.bank, Some(self.current.id), &mut self.rng);
                self.selected = None;
                self.feedback = Feedback::None;
                if self.current.is_sentinel() {
                    warn!("no eligible question left, showing sentinel");
                } else {
                    debug!(question = self.current.id, "next question");
                }
                TimerOutcome::NextQuestion
            }
            TimerTask::Restart => {
                if !self.round_complete {
                    return TimerOutcome::Stale;
                }
                self.restart();
                TimerOutcome::Restarted
            }
        }
    }

    /// Begin a new round. Any timer still pending becomes stale.
    pub fn restart(&mut self) {
        self.current = select::draw(&self.bank, None, &mut self.rng);
        self.selected = None;
        self.feedback = Feedback::None;
        self.score = 0;
        self.attempts = 0;
        self.round_complete = false;
        self.epoch = self.epoch.wrapping_add(1);
        info!(question = self.current.id, "new round");
    }
}
