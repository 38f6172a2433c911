//! Per-option display classification, derived from the session on every draw.

use super::session::{Feedback, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Unselected,
    CorrectSelected,
    IncorrectSelected,
    /// The right answer, revealed after a wrong pick.
    OtherCorrect,
    /// A wrong option, dimmed after a right pick.
    OtherIncorrect,
}

pub fn classify(session: &QuizSession, index: usize) -> OptionState {
    classify_parts(
        session.selected(),
        session.feedback(),
        session.current().correct_option,
        index,
    )
}

pub fn classify_all(session: &QuizSession) -> Vec<OptionState> {
    (0..session.current().options.len())
        .map(|i| classify(session, i))
        .collect()
}

fn classify_parts(
    selected: Option<usize>,
    feedback: Feedback,
    correct: usize,
    index: usize,
) -> OptionState {
    let Some(selected) = selected else {
        return OptionState::Unselected;
    };
    match feedback {
        Feedback::Correct if index == selected => OptionState::CorrectSelected,
        Feedback::Incorrect if index == selected => OptionState::IncorrectSelected,
        Feedback::Incorrect if index == correct => OptionState::OtherCorrect,
        Feedback::Correct if index != correct => OptionState::OtherIncorrect,
        _ => OptionState::Unselected,
    }
}
