//! The built-in question bank.
//!
//! The bank is fixed at build time and never mutated at runtime. Custom banks
//! can still be assembled through [`QuestionBank::new`], which enforces the
//! record invariants (exactly four options, valid correct index, unique ids,
//! no use of the sentinel id).

use super::question::{BankError, Question, QuestionKind};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::new();
        for q in &questions {
            q.validate()?;
            if !seen.insert(q.id) {
                return Err(BankError::DuplicateId(q.id));
            }
        }
        Ok(Self { questions })
    }

    /// The ten questions the quiz ships with.
    pub fn builtin() -> Result<Self, BankError> {
        Self::new(builtin_questions())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

fn builtin_questions() -> Vec<Question> {
    use QuestionKind::{Fact, Riddle};
    vec![
        Question::new(
            1,
            Fact,
            "What is the shortest bone in the human body?",
            ["Stapes", "Fibula", "Ulna", "Radius"],
            0,
            Some("The stapes bone is one of the bones in the middle ear and is crucial for hearing."),
        ),
        Question::new(
            2,
            Riddle,
            "I am light as a feather, yet even the strongest man cannot hold me for much more than a minute. What am I?",
            ["Air", "A feather", "Breath", "Wind"],
            2,
            Some("Breath is light as air, but even the strongest person can't hold their breath for more than a couple of minutes."),
        ),
        Question::new(
            3,
            Fact,
            "Which planet in our solar system is known as the \"Red Planet\"?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
            Some("Mars is called the Red Planet due to its reddish appearance caused by iron oxide on its surface."),
        ),
        Question::new(
            4,
            Riddle,
            "I have a head, a tail, but no body. What am I?",
            ["A coin", "A tree", "A river", "A mountain"],
            0,
            Some("A coin has a head on one side and a tail on the other, but it doesn't have a body."),
        ),
        Question::new(
            5,
            Fact,
            "What is the largest organ in the human body?",
            ["Skin", "Brain", "Heart", "Lungs"],
            0,
            Some("Skin is the largest organ and serves as the body's protective barrier."),
        ),
        Question::new(
            6,
            Riddle,
            "What has keys but can't open locks?",
            ["A piano", "A computer", "A safe", "A door"],
            0,
            Some("A piano has keys that are used to make music, not open locks."),
        ),
        Question::new(
            7,
            Fact,
            "Which element has the chemical symbol \"O\"?",
            ["Gold", "Oxygen", "Osmium", "Oganesson"],
            1,
            Some("Oxygen is a vital element for life, making up a large part of the Earth's atmosphere."),
        ),
        Question::new(
            8,
            Riddle,
            "What starts with an E, ends with an E, but only contains one letter?",
            ["An envelope", "A letter", "A word", "A sentence"],
            0,
            Some("An envelope starts and ends with \"E\" and contains a letter inside."),
        ),
        Question::new(
            9,
            Fact,
            "How many bones does an adult human have?",
            ["206", "208", "210", "212"],
            0,
            Some("Adult humans have 206 bones, while babies are born with more that fuse as they grow."),
        ),
        Question::new(
            10,
            Riddle,
            "What is always coming but never arrives?",
            ["Tomorrow", "Yesterday", "Today", "Forever"],
            0,
            Some("Tomorrow is always coming, but it never actually arrives, because when it does, it becomes today."),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_is_valid() {
        let builtin = QuestionBank::builtin().unwrap();
        assert_eq!(builtin.len(), 10);
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(QuestionBank::new(vec![]).unwrap_err(), BankError::Empty);

        let q = Question::new(4, QuestionKind::Fact, "?", ["a", "b", "c", "d"], 1, None);
        let err = QuestionBank::new(vec![q.clone(), q]).unwrap_err();
        assert_eq!(err, BankError::DuplicateId(4));
    }

    #[test]
    fn test_rejects_sentinel_id() {
        let err = QuestionBank::new(vec![Question::sentinel()]).unwrap_err();
        assert_eq!(err, BankError::ReservedId);
    }

    #[test]
    fn test_builtin_kinds_alternate() {
        let bank = QuestionBank::builtin().unwrap();
        for q in bank.questions() {
            let expected = if q.id % 2 == 1 {
                QuestionKind::Fact
            } else {
                QuestionKind::Riddle
            };
            assert_eq!(q.kind, expected, "question {}", q.id);
        }
    }
}
