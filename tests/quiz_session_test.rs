//! Quiz session state machine and reward scaling

mod common;

use common::{answer, question, quiz_with_questions};
use drstone::content::ContentError;
use drstone::quiz::{scale_reward, QuizSession, Reward, SessionState};

#[test]
fn test_full_walkthrough() {
    let mut session = QuizSession::new(quiz_with_questions(3, 300, 30)).unwrap();
    assert_eq!(session.state(), SessionState::InProgress { index: 0 });

    assert!(session.select_option(2));
    assert_eq!(session.confirm(), Some(false));
    assert_eq!(
        session.state(),
        SessionState::Answered {
            index: 0,
            correct: false
        }
    );
    assert!(session.advance());
    assert_eq!(session.state(), SessionState::InProgress { index: 1 });
    assert_eq!(session.selected_option(), None);

    assert_eq!(answer(&mut session, 0), Some(true));
    assert_eq!(answer(&mut session, 0), Some(true));
    assert_eq!(session.state(), SessionState::Completed { score: 2 });

    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.reward, Reward { experience: 200, currency: 20 });
    assert!(!outcome.is_perfect());
}

#[test]
fn test_selection_can_change_until_confirmed() {
    let mut session = QuizSession::new(quiz_with_questions(1, 10, 1)).unwrap();
    session.select_option(3);
    session.select_option(0);
    assert_eq!(session.confirm(), Some(true));

    // Locked once answered
    assert!(!session.select_option(2));
    assert_eq!(session.selected_option(), Some(0));
    assert_eq!(session.confirm(), None);
    assert_eq!(session.correct_count(), 1);
}

#[test]
fn test_confirm_without_selection_is_noop() {
    let mut session = QuizSession::new(quiz_with_questions(2, 10, 1)).unwrap();
    assert_eq!(session.confirm(), None);
    assert!(!session.is_answered());
    assert!(!session.advance());
    assert_eq!(session.state(), SessionState::InProgress { index: 0 });
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let mut session = QuizSession::new(quiz_with_questions(1, 10, 1)).unwrap();
    assert!(!session.select_option(4));
    assert_eq!(session.selected_option(), None);
}

#[test]
fn test_completed_session_ignores_input() {
    let mut session = QuizSession::new(quiz_with_questions(1, 10, 1)).unwrap();
    answer(&mut session, 0);
    assert!(session.is_complete());

    assert!(!session.select_option(1));
    assert_eq!(session.confirm(), None);
    assert!(!session.advance());
    assert_eq!(session.state(), SessionState::Completed { score: 1 });
}

#[test]
fn test_outcome_only_when_complete() {
    let mut session = QuizSession::new(quiz_with_questions(2, 10, 1)).unwrap();
    answer(&mut session, 0);
    assert!(session.outcome().is_none());
}

#[test]
fn test_empty_quiz_rejected() {
    let quiz = quiz_with_questions(0, 10, 1);
    assert!(matches!(
        QuizSession::new(quiz),
        Err(ContentError::EmptyQuiz(_))
    ));
}

#[test]
fn test_bad_answer_index_rejected() {
    let mut quiz = quiz_with_questions(1, 10, 1);
    quiz.questions.push(question("broken", 3, 3));
    assert!(matches!(
        QuizSession::new(quiz),
        Err(ContentError::AnswerOutOfRange { index: 3, options: 3, .. })
    ));
}

#[test]
fn test_scale_reward_rounding() {
    // 1/3 of 500 = 166.67
    assert_eq!(scale_reward(1, 3, 500), 167);
    // 2/3 of 50 = 33.33
    assert_eq!(scale_reward(2, 3, 50), 33);
    // 1/4 of 2 = 0.5, halves round up
    assert_eq!(scale_reward(1, 4, 2), 1);
    assert_eq!(scale_reward(0, 0, 500), 0);
}

#[test]
fn test_perfect_score_gets_full_reward() {
    for total in 1..=12 {
        let quiz = quiz_with_questions(total, 777, 77);
        let reward = Reward::for_score(&quiz, total);
        assert_eq!(reward, Reward { experience: 777, currency: 77 });
    }
}
