//! XP and level bookkeeping

use serde::Serialize;
use tracing::info;

use super::seed::{default_badges, ProgressionSeed};
use crate::domain::Badge;

/// Result of applying a reward to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelUpOutcome {
    NoChange,
    LeveledUp { new_level: u32 },
}

impl LevelUpOutcome {
    pub fn leveled_up(&self) -> bool {
        matches!(self, Self::LeveledUp { .. })
    }
}

/// Threshold for the level after one with threshold `current`.
///
/// `round(current * 1.5)` with halves rounded up, in integer arithmetic.
pub fn next_threshold(current: u32) -> u32 {
    let scaled = (u64::from(current) * 3 + 1) / 2;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// The player's progression: level, XP, stones, streak and badges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionState {
    pub level: u32,
    /// XP accumulated inside the current level
    pub experience: u32,
    /// XP needed to leave the current level
    pub experience_to_next_level: u32,
    /// Stones
    pub currency: u32,
    pub streak_days: u32,
    pub badges: Vec<Badge>,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::from_seed(&ProgressionSeed::default(), default_badges())
    }
}

impl ProgressionState {
    /// Build the ledger from seed values.
    ///
    /// Level and threshold are clamped to at least 1 so the ledger always
    /// starts on a valid level.
    pub fn from_seed(seed: &ProgressionSeed, badges: Vec<Badge>) -> Self {
        Self {
            level: seed.level.max(1),
            experience: seed.experience,
            experience_to_next_level: seed.experience_to_next_level.max(1),
            currency: seed.currency,
            streak_days: seed.streak_days,
            badges,
        }
    }

    /// Add XP and stones, resolving at most one level-up.
    ///
    /// If the new XP reaches the threshold, the level goes up by one, the old
    /// threshold is subtracted and the threshold grows by half. Any excess
    /// beyond a second threshold is carried over without another check.
    pub fn apply_reward(&mut self, experience_delta: u32, currency_delta: u32) -> LevelUpOutcome {
        self.currency = self.currency.saturating_add(currency_delta);
        self.experience = self.experience.saturating_add(experience_delta);

        if self.experience < self.experience_to_next_level {
            return LevelUpOutcome::NoChange;
        }

        let old_threshold = self.experience_to_next_level;
        self.level = self.level.saturating_add(1);
        self.experience -= old_threshold;
        self.experience_to_next_level = next_threshold(old_threshold);

        info!(
            level = self.level,
            experience = self.experience,
            next_level_xp = self.experience_to_next_level,
            "Level up"
        );

        LevelUpOutcome::LeveledUp {
            new_level: self.level,
        }
    }

    /// Progress toward the next level as 0.0-1.0 (capped)
    pub fn progress_to_next(&self) -> f32 {
        let ratio = self.experience as f32 / self.experience_to_next_level as f32;
        ratio.min(1.0)
    }

    /// XP still missing for the next level
    pub fn experience_remaining(&self) -> u32 {
        self.experience_to_next_level.saturating_sub(self.experience)
    }

    pub fn unlocked_badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|b| b.unlocked)
    }

    pub fn unlocked_badge_count(&self) -> usize {
        self.unlocked_badges().count()
    }
}
