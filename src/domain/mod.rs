//! Core domain types for DrStone

mod badge;
mod quiz;
mod study;

pub use badge::Badge;
pub use quiz::{Question, Quiz};
pub use study::{Category, Difficulty, Lesson, StudyModule};
