//! Central panel views
//!
//! Views only read [`AppState`](crate::app::AppState). Clicks come back as a
//! [`ViewAction`] that the app applies after rendering.

mod challenges;
mod dashboard;
mod profile;
mod rewards;
mod study;

pub(super) use challenges::{render_quiz, render_quiz_list};
pub(super) use dashboard::render_dashboard;
pub(super) use profile::render_profile;
pub(super) use rewards::render_rewards;
pub(super) use study::render_study;

use eframe::egui::{self, RichText};

use super::theme::{TEXT_DIM, TEXT_PRIMARY};
use crate::app::Tab;

/// Player input on the running quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum QuizAction {
    Select(usize),
    Confirm,
    Advance,
    Cancel,
    Finish,
}

/// Something a view asked the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ViewAction {
    SelectTab(Tab),
    LaunchQuiz(String),
    Quiz(QuizAction),
}

/// Page title plus subtitle, shared by every view
fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).size(26.0).strong().color(TEXT_PRIMARY));
    ui.label(RichText::new(subtitle).color(TEXT_DIM));
    ui.add_space(16.0);
}
