//! Application state shared by the GUI and the terminal front end
//!
//! [`AppState`] owns the progression ledger, the content catalog, the
//! current view and at most one running quiz. Front ends only read from it
//! and call its operations; they hold no game state of their own.

mod tab;

pub use tab::Tab;

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::content::{Catalog, ContentError, ContentSource};
use crate::progression::{default_badges, LevelUp, LevelUpNotice, LevelUpOutcome, ProgressionState};
use crate::quiz::{QuizOutcome, QuizSession};

/// Result of handing a completed quiz to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedQuiz {
    pub outcome: QuizOutcome,
    pub level: LevelUpOutcome,
}

/// Top-level controller state
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    stats: ProgressionState,
    active_tab: Tab,
    active_quiz: Option<QuizSession>,
    level_up: LevelUpNotice,
}

impl AppState {
    pub fn new(catalog: Catalog, stats: ProgressionState) -> Self {
        Self {
            catalog,
            stats,
            active_tab: Tab::default(),
            active_quiz: None,
            level_up: LevelUpNotice::default(),
        }
    }

    /// Build the state from config: seed the ledger and load content.
    ///
    /// `content_override` wins over `config.content_path`.
    pub fn from_config(config: &Config, content_override: Option<&Path>) -> Result<Self, ContentError> {
        let content_path = content_override.or(config.content_path.as_deref());
        let catalog = Catalog::load(content_path)?;
        let stats = ProgressionState::from_seed(&config.progression, default_badges());
        Ok(Self::new(catalog, stats))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stats(&self) -> &ProgressionState {
        &self.stats
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_quiz(&self) -> Option<&QuizSession> {
        self.active_quiz.as_ref()
    }

    pub fn active_quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.active_quiz.as_mut()
    }

    /// Start the quiz with `id`, replacing (and cancelling) any running one
    pub fn launch_quiz(&mut self, id: &str) -> Result<&mut QuizSession, ContentError> {
        let quiz = self.catalog.quiz(id)?.clone();
        let session = QuizSession::new(quiz)?;

        if let Some(previous) = self.active_quiz.take() {
            previous.cancel();
        }
        Ok(self.active_quiz.insert(session))
    }

    /// Drop the running quiz without a reward. Returns whether one was running.
    pub fn cancel_quiz(&mut self) -> bool {
        match self.active_quiz.take() {
            Some(session) => {
                session.cancel();
                true
            }
            None => false,
        }
    }

    /// Apply the reward of a completed quiz and return to the dashboard.
    ///
    /// Does nothing and returns `None` unless the running quiz is completed.
    pub fn finish_quiz(&mut self) -> Option<FinishedQuiz> {
        let outcome = self.active_quiz.as_ref()?.outcome()?;
        self.active_quiz = None;

        let level = self
            .stats
            .apply_reward(outcome.reward.experience, outcome.reward.currency);
        if let LevelUpOutcome::LeveledUp { new_level } = level {
            self.level_up.raise(new_level);
        }

        info!(
            quiz = %outcome.quiz_id,
            score = outcome.score,
            total = outcome.total,
            xp = outcome.reward.experience,
            stones = outcome.reward.currency,
            "Quiz reward applied"
        );

        self.active_tab = Tab::Dashboard;
        Some(FinishedQuiz { outcome, level })
    }

    /// Pending level-up notification, if any
    pub fn level_up(&self) -> Option<LevelUp> {
        self.level_up.pending()
    }

    pub fn dismiss_level_up(&mut self) -> Option<LevelUp> {
        self.level_up.dismiss()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin(), ProgressionState::default())
    }
}
