//! Progression ledger: XP, levels, stones, streaks and badges
//!
//! The ledger is created once from seed values and only ever mutated through
//! [`ProgressionState::apply_reward`]. Level-ups are surfaced to the front end
//! through a one-shot [`LevelUpNotice`].

mod ledger;
mod notice;
mod seed;

pub use ledger::{next_threshold, LevelUpOutcome, ProgressionState};
pub use notice::{LevelUp, LevelUpNotice};
pub use seed::{default_badges, ProgressionSeed};
