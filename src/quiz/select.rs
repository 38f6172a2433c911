use super::bank::QuestionBank;
use super::question::Question;
use rand::RngExt;

/// Draw a question uniformly at random, skipping `exclude` if given.
///
/// Falls back to [`Question::sentinel`] when the exclusion leaves nothing to
/// draw from (a single-question bank).
pub fn draw<R>(bank: &QuestionBank, exclude: Option<i32>, rng: &mut R) -> Question
where
    R: RngExt + ?Sized,
{
    let candidates: Vec<&Question> = bank
        .questions()
        .iter()
        .filter(|q| Some(q.id) != exclude)
        .collect();

    if candidates.is_empty() {
        return Question::sentinel();
    }

    let idx = rng.random_range(0..candidates.len());
    candidates[idx].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::{QuestionKind, SENTINEL_ID};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single(id: i32) -> QuestionBank {
        QuestionBank::new(vec![Question::new(
            id,
            QuestionKind::Riddle,
            "?",
            ["a", "b", "c", "d"],
            2,
            None,
        )])
        .unwrap()
    }

    #[test]
    fn test_exclusion_is_honored() {
        let bank = QuestionBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for id in 1..=10 {
            for _ in 0..50 {
                assert_ne!(draw(&bank, Some(id), &mut rng).id, id);
            }
        }
    }

    #[test]
    fn test_every_question_reachable() {
        let bank = QuestionBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(draw(&bank, None, &mut rng).id);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_single_bank_falls_back_to_sentinel() {
        let bank = single(7);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(draw(&bank, None, &mut rng).id, 7);
        assert_eq!(draw(&bank, Some(7), &mut rng).id, SENTINEL_ID);
        // Excluding the sentinel id leaves the real question eligible.
        assert_eq!(draw(&bank, Some(SENTINEL_ID), &mut rng).id, 7);
    }
}
