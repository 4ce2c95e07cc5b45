//! Structural checks applied to every loaded catalog

use std::collections::HashSet;

use super::ContentError;
use crate::domain::{Quiz, StudyModule};

/// Check that a quiz can be played and rewarded
pub fn validate_quiz(quiz: &Quiz) -> Result<(), ContentError> {
    if quiz.questions.is_empty() {
        return Err(ContentError::EmptyQuiz(quiz.id.clone()));
    }
    if quiz.xp_reward == 0 || quiz.stone_reward == 0 {
        return Err(ContentError::ZeroReward(quiz.id.clone()));
    }

    let mut seen = HashSet::new();
    for question in &quiz.questions {
        if !seen.insert(question.id.as_str()) {
            return Err(ContentError::DuplicateId {
                kind: "question",
                id: format!("{}/{}", quiz.id, question.id),
            });
        }
        if question.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                quiz: quiz.id.clone(),
                question: question.id.clone(),
            });
        }
        if question.correct_answer >= question.options.len() {
            return Err(ContentError::AnswerOutOfRange {
                quiz: quiz.id.clone(),
                question: question.id.clone(),
                index: question.correct_answer,
                options: question.options.len(),
            });
        }
    }
    Ok(())
}

pub(super) fn validate_module(module: &StudyModule) -> Result<(), ContentError> {
    if module.progress > 100 {
        return Err(ContentError::InvalidProgress {
            module: module.id.clone(),
            progress: module.progress,
        });
    }
    Ok(())
}

/// Fail on the first id that appears twice
pub(super) fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
