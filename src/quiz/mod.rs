//! Quiz engine: session state machine and score-proportional rewards

mod reward;
mod session;

pub use reward::{scale_reward, QuizOutcome, Reward};
pub use session::{QuizSession, SessionState};
