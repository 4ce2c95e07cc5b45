//! Starting values for a fresh ledger

use serde::{Deserialize, Serialize};

use crate::domain::Badge;

/// Seed values for [`super::ProgressionState`]
///
/// Also the `[progression]` section of the config file, so every field has a
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSeed {
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_experience")]
    pub experience: u32,
    #[serde(default = "default_experience_to_next_level")]
    pub experience_to_next_level: u32,
    #[serde(default = "default_currency")]
    pub currency: u32,
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
}

fn default_level() -> u32 {
    1
}

fn default_experience() -> u32 {
    450
}

fn default_experience_to_next_level() -> u32 {
    1000
}

fn default_currency() -> u32 {
    120
}

fn default_streak_days() -> u32 {
    5
}

impl Default for ProgressionSeed {
    fn default() -> Self {
        Self {
            level: default_level(),
            experience: default_experience(),
            experience_to_next_level: default_experience_to_next_level(),
            currency: default_currency(),
            streak_days: default_streak_days(),
        }
    }
}

/// The badge shelf every player starts with
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::new(
            "b1",
            "First Discovery",
            "🧪",
            "Complete your first lesson.",
            true,
        ),
        Badge::new("b2", "Scholar", "📚", "Study for 3 days in a row.", true),
        Badge::new(
            "b3",
            "Surgeon",
            "🔪",
            "Score 100% on an Anatomy quiz.",
            false,
        ),
        Badge::new("b4", "Alchemist", "⚗️", "Unlock 5 medical modules.", false),
    ]
}
