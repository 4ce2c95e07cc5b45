use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    /// Exact index match, no partial credit
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// A challenge: an ordered list of questions plus the maximum rewards
///
/// `xp_reward` and `stone_reward` are only granted in full on a perfect score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    pub xp_reward: u32,
    pub stone_reward: u32,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
