//! Reward computation for finished quizzes

use crate::domain::Quiz;

/// XP and stones earned from one quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reward {
    pub experience: u32,
    pub currency: u32,
}

impl Reward {
    /// Scale the quiz's maximum rewards by `correct / total`
    pub fn for_score(quiz: &Quiz, correct: usize) -> Self {
        let total = quiz.question_count();
        Self {
            experience: scale_reward(correct, total, quiz.xp_reward),
            currency: scale_reward(correct, total, quiz.stone_reward),
        }
    }
}

/// `round(correct / total * max)` with halves rounded up.
///
/// Computed in integers so a perfect score yields exactly `max`.
/// Returns 0 when `total` is 0.
pub fn scale_reward(correct: usize, total: usize, max: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    let scaled = (correct * u64::from(max) * 2 + total) / (2 * total);
    // correct <= total, so scaled <= max
    scaled as u32
}

/// Summary of a completed quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub quiz_id: String,
    pub quiz_title: String,
    pub score: usize,
    pub total: usize,
    pub reward: Reward,
}

impl QuizOutcome {
    /// Fraction of questions answered correctly (0.0-1.0)
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f32 / self.total as f32
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}
