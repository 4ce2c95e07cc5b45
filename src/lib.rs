//! DrStone - gamified medical study companion
//!
//! Players earn XP and stones by answering multiple-choice challenges, level
//! up along a growing XP curve, browse study modules, and can ask an AI
//! mentor ("Dr. Stone") to explain medical concepts.
//!
//! ## Core
//!
//! - [`progression`]: the ledger (level, XP, stones, streak, badges) and its
//!   single mutator, `apply_reward`.
//! - [`quiz`]: the quiz session state machine and score-proportional rewards.
//! - [`app`]: the controller tying both together for the front ends.
//!
//! ## Front Ends
//!
//! 1. **GUI (Primary)**: an egui window with dashboard, lab, challenges,
//!    trophies and the floating assistant.
//! 2. **Terminal**: `drstone quiz <id>`, `drstone ask <concept>` and friends.
//!
//! Nothing is persisted; every launch starts from the seed values.

pub mod app;
pub mod assistant;
pub mod config;
pub mod content;
pub mod domain;
pub mod gui;
pub mod progression;
pub mod quiz;

pub use domain::*;
