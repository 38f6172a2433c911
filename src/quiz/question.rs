//! Question records and bank validation errors.

use thiserror::Error;

/// Id reserved for [`Question::sentinel`].
pub const SENTINEL_ID: i32 = -1;

/// Number of options every bank question must carry.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Fact,
    Riddle,
}

impl QuestionKind {
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Fact => "Fun Fact",
            QuestionKind::Riddle => "Riddle",
        }
    }

    pub fn badge(self) -> char {
        match self {
            QuestionKind::Fact => 'F',
            QuestionKind::Riddle => 'R',
        }
    }
}

/// A multiple-choice question. Option order is display order and defines
/// the answer index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(
        id: i32,
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_option: usize,
        explanation: Option<&str>,
    ) -> Self {
        Self {
            id,
            kind,
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option,
            explanation: explanation.map(str::to_string),
        }
    }

    /// Fallback returned when no eligible question remains to draw.
    pub fn sentinel() -> Self {
        Self {
            id: SENTINEL_ID,
            kind: QuestionKind::Fact,
            prompt: "No more questions available!".to_string(),
            options: vec!["Restart the game".to_string()],
            correct_option: 0,
            explanation: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option
    }

    /// Check the record invariants that a bank relies on.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.id == SENTINEL_ID {
            return Err(BankError::ReservedId);
        }
        if self.options.len() != OPTION_COUNT {
            return Err(BankError::OptionCount {
                id: self.id,
                found: self.options.len(),
            });
        }
        if self.correct_option >= self.options.len() {
            return Err(BankError::CorrectOutOfRange {
                id: self.id,
                index: self.correct_option,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question id -1 is reserved for the sentinel")]
    ReservedId,
    #[error("duplicate question id {0}")]
    DuplicateId(i32),
    #[error("question {id} has {found} options, expected 4")]
    OptionCount { id: i32, found: usize },
    #[error("question {id} marks option {index} correct, which does not exist")]
    CorrectOutOfRange { id: i32, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_shape() {
        let q = Question::sentinel();
        assert!(q.is_sentinel());
        assert_eq!(q.options, vec!["Restart the game".to_string()]);
        assert!(q.is_correct(0));
        assert_eq!(q.validate(), Err(BankError::ReservedId));
    }

    #[test]
    fn test_validate_rejects_bad_correct_index() {
        let q = Question::new(3, QuestionKind::Fact, "?", ["a", "b", "c", "d"], 4, None);
        assert_eq!(
            q.validate(),
            Err(BankError::CorrectOutOfRange { id: 3, index: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut q = Question::new(3, QuestionKind::Riddle, "?", ["a", "b", "c", "d"], 0, None);
        q.options.pop();
        assert_eq!(q.validate(), Err(BankError::OptionCount { id: 3, found: 3 }));
    }
}
