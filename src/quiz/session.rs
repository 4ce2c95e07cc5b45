//! Quiz session state machine
//!
//! ```text
//! InProgress(0) --select/confirm--> Answered(0, ok) --advance--> InProgress(1) ...
//!                                   Answered(last, ok) --advance--> Completed(score)
//! ```
//!
//! Cancelling is done by dropping the session (see [`QuizSession::cancel`]);
//! nothing is rewarded until the controller consumes a completed session.

use tracing::{debug, info};
use uuid::Uuid;

use super::reward::{QuizOutcome, Reward};
use crate::content::{validate_quiz, ContentError};
use crate::domain::{Question, Quiz};

/// Externally visible state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress { index: usize },
    Answered { index: usize, correct: bool },
    Completed { score: usize },
}

/// One run through a quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    quiz: Quiz,
    current_index: usize,
    selected_option: Option<usize>,
    is_answered: bool,
    last_correct: bool,
    correct_count: usize,
    is_complete: bool,
}

impl QuizSession {
    /// Start a session at the first question.
    ///
    /// Fails if the quiz is malformed (no questions, bad answer index, ...).
    pub fn new(quiz: Quiz) -> Result<Self, ContentError> {
        validate_quiz(&quiz)?;

        let id = Uuid::new_v4();
        info!(session = %id, quiz = %quiz.id, questions = quiz.question_count(), "Quiz started");

        Ok(Self {
            id,
            quiz,
            current_index: 0,
            selected_option: None,
            is_answered: false,
            last_correct: false,
            correct_count: 0,
            is_complete: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete {
            SessionState::Completed {
                score: self.correct_count,
            }
        } else if self.is_answered {
            SessionState::Answered {
                index: self.current_index,
                correct: self.last_correct,
            }
        } else {
            SessionState::InProgress {
                index: self.current_index,
            }
        }
    }

    /// The question being shown (the last one once completed)
    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.question_count()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.total_questions()
    }

    /// Position through the quiz as 0.0-1.0, counting the current question
    pub fn progress_fraction(&self) -> f32 {
        (self.current_index + 1) as f32 / self.total_questions() as f32
    }

    /// Store a tentative answer. No-op once the question is answered, after
    /// completion, or for an index that is not one of the options.
    ///
    /// Returns whether the selection was stored.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.is_answered || self.is_complete {
            return false;
        }
        if option >= self.current_question().options.len() {
            debug!(session = %self.id, option, "Ignoring out-of-range option");
            return false;
        }
        self.selected_option = Some(option);
        true
    }

    /// Lock in the selected answer and score it.
    ///
    /// Returns `Some(correct)` on the transition to answered, `None` when
    /// there is nothing to confirm.
    pub fn confirm(&mut self) -> Option<bool> {
        if self.is_answered || self.is_complete {
            return None;
        }
        let selected = self.selected_option?;

        let correct = self.current_question().is_correct(selected);
        self.is_answered = true;
        self.last_correct = correct;
        if correct {
            self.correct_count += 1;
        }

        debug!(
            session = %self.id,
            question = self.current_index,
            correct,
            "Answer confirmed"
        );
        Some(correct)
    }

    /// Move past an answered question, completing the quiz after the last one.
    ///
    /// Returns whether the session moved.
    pub fn advance(&mut self) -> bool {
        if !self.is_answered || self.is_complete {
            return false;
        }

        if self.is_last_question() {
            self.is_complete = true;
            info!(
                session = %self.id,
                score = self.correct_count,
                total = self.total_questions(),
                "Quiz completed"
            );
        } else {
            self.current_index += 1;
            self.selected_option = None;
            self.is_answered = false;
            self.last_correct = false;
        }
        true
    }

    /// Score and reward, available once completed
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if !self.is_complete {
            return None;
        }
        Some(QuizOutcome {
            quiz_id: self.quiz.id.clone(),
            quiz_title: self.quiz.title.clone(),
            score: self.correct_count,
            total: self.total_questions(),
            reward: Reward::for_score(&self.quiz, self.correct_count),
        })
    }

    /// Abandon the session. Accumulated answers are discarded unrewarded.
    pub fn cancel(self) {
        info!(
            session = %self.id,
            quiz = %self.quiz.id,
            question = self.current_index,
            "Quiz cancelled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct_answer: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {}", id),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer,
            explanation: String::new(),
        }
    }

    fn two_question_quiz() -> Quiz {
        Quiz {
            id: "quiz".into(),
            title: "Quiz".into(),
            description: String::new(),
            questions: vec![question("q1", 1), question("q2", 2)],
            xp_reward: 500,
            stone_reward: 50,
        }
    }

    #[test]
    fn test_initial_state() {
        let session = QuizSession::new(two_question_quiz()).unwrap();
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
        assert_eq!(session.selected_option(), None);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        assert_eq!(session.confirm(), None);
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
    }

    #[test]
    fn test_select_after_confirm_is_noop() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        session.select_option(1);
        assert_eq!(session.confirm(), Some(true));

        assert!(!session.select_option(0));
        assert_eq!(session.selected_option(), Some(1));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(
            session.state(),
            SessionState::Answered {
                index: 0,
                correct: true
            }
        );
    }

    #[test]
    fn test_reselect_before_confirm() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        session.select_option(0);
        session.select_option(1);
        assert_eq!(session.selected_option(), Some(1));
    }

    #[test]
    fn test_out_of_range_option_ignored() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        assert!(!session.select_option(3));
        assert_eq!(session.selected_option(), None);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        assert!(!session.advance());
        session.select_option(0);
        assert!(!session.advance());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_advance_clears_selection() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        session.select_option(0);
        session.confirm();
        assert!(session.advance());

        assert_eq!(session.state(), SessionState::InProgress { index: 1 });
        assert_eq!(session.selected_option(), None);
        assert!(!session.is_answered());
    }

    #[test]
    fn test_advance_on_last_question_completes() {
        let mut session = QuizSession::new(two_question_quiz()).unwrap();
        session.select_option(1);
        session.confirm();
        session.advance();
        session.select_option(0);
        assert_eq!(session.confirm(), Some(false));
        assert!(session.advance());

        assert_eq!(session.state(), SessionState::Completed { score: 1 });
        assert!(!session.advance());

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 2);
        assert_eq!(
            outcome.reward,
            Reward {
                experience: 250,
                currency: 25
            }
        );
    }

    #[test]
    fn test_empty_quiz_rejected() {
        let mut quiz = two_question_quiz();
        quiz.questions.clear();
        assert!(matches!(
            QuizSession::new(quiz),
            Err(ContentError::EmptyQuiz(_))
        ));
    }
}
