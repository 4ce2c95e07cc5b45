//! Main GUI application using egui
//!
//! Layout:
//! - Navigation with level and stones (left)
//! - Current view, or the running quiz (center)
//! - Level-up overlay and the floating assistant on top

use eframe::egui::{self, RichText, Vec2};
use tracing::warn;

use super::assistant_panel::AssistantPanel;
use super::theme::{
    ACCENT_AMBER, ACCENT_EMERALD, ACCENT_RED, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use super::toast::{level_up_alpha, render_level_up};
use super::views::{self, QuizAction, ViewAction};
use crate::app::{AppState, Tab};
use crate::assistant::Assistant;

/// The DrStone window
pub struct DrStoneApp {
    state: AppState,
    assistant: AssistantPanel,
    commonmark_cache: egui_commonmark::CommonMarkCache,
    /// Last error worth showing in the status bar
    status: Option<String>,
}

impl DrStoneApp {
    pub fn new(state: AppState, assistant: Assistant) -> Self {
        Self {
            state,
            assistant: AssistantPanel::new(assistant),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            status: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SelectTab(tab) => self.state.select_tab(tab),
            ViewAction::LaunchQuiz(id) => match self.state.launch_quiz(&id) {
                Ok(_) => self.status = None,
                Err(e) => {
                    warn!(quiz = %id, error = %e, "Failed to start quiz");
                    self.status = Some(e.to_string());
                }
            },
            ViewAction::Quiz(action) => self.apply_quiz(action),
        }
    }

    fn apply_quiz(&mut self, action: QuizAction) {
        match action {
            QuizAction::Cancel => {
                self.state.cancel_quiz();
            }
            QuizAction::Finish => {
                self.state.finish_quiz();
            }
            QuizAction::Select(option) => {
                if let Some(session) = self.state.active_quiz_mut() {
                    session.select_option(option);
                }
            }
            QuizAction::Confirm => {
                if let Some(session) = self.state.active_quiz_mut() {
                    session.confirm();
                }
            }
            QuizAction::Advance => {
                if let Some(session) = self.state.active_quiz_mut() {
                    session.advance();
                }
            }
        }
    }

    fn render_navigation(&self, ui: &mut egui::Ui) -> Option<ViewAction> {
        let stats = self.state.stats();
        let mut action = None;

        ui.add_space(12.0);
        ui.label(
            RichText::new("DrStone")
                .size(22.0)
                .strong()
                .italics()
                .color(ACCENT_EMERALD),
        );
        ui.label(RichText::new("Medical Mastery").small().color(TEXT_MUTED));
        ui.add_space(20.0);

        // Navigation is locked while a quiz runs
        let enabled = self.state.active_quiz().is_none();
        ui.add_enabled_ui(enabled, |ui| {
            for tab in Tab::all() {
                let selected = self.state.active_tab() == *tab;
                let color = if selected { TEXT_PRIMARY } else { TEXT_DIM };
                let button = egui::Button::new(
                    RichText::new(format!("{}  {}", tab.icon(), tab.label())).color(color),
                )
                .fill(if selected { BG_HIGHLIGHT } else { BG_SECONDARY })
                .min_size(Vec2::new(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    action = Some(ViewAction::SelectTab(*tab));
                }
            }
        });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("💎 {}", stats.currency))
                    .strong()
                    .color(ACCENT_AMBER),
            );
            ui.add(
                egui::ProgressBar::new(stats.progress_to_next())
                    .fill(ACCENT_EMERALD)
                    .desired_height(6.0),
            );
            ui.label(
                RichText::new(format!("Level {}", stats.level))
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });

        action
    }

    fn render_central(&self, ui: &mut egui::Ui) -> Option<ViewAction> {
        if let Some(session) = self.state.active_quiz() {
            return views::render_quiz(ui, session);
        }

        match self.state.active_tab() {
            Tab::Dashboard => views::render_dashboard(ui, &self.state),
            Tab::Study => {
                views::render_study(ui, &self.state);
                None
            }
            Tab::Quizzes => views::render_quiz_list(ui, &self.state),
            Tab::Rewards => {
                views::render_rewards(ui, &self.state);
                None
            }
            Tab::Profile => {
                views::render_profile(ui);
                None
            }
        }
    }
}

impl eframe::App for DrStoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.assistant.poll();
        if self.assistant.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let mut actions = Vec::new();

        egui::SidePanel::left("navigation")
            .exact_width(200.0)
            .resizable(false)
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(12.0))
            .show(ctx, |ui| {
                actions.extend(self.render_navigation(ui));
            });

        if let Some(status) = &self.status {
            let mut dismiss = false;
            egui::TopBottomPanel::bottom("status_bar")
                .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(6.0))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(status).color(ACCENT_RED));
                        dismiss = ui.small_button("✕").clicked();
                    });
                });
            if dismiss {
                self.status = None;
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(24.0))
            .show(ctx, |ui| {
                actions.extend(self.render_central(ui));
            });

        for action in actions {
            self.apply(action);
        }

        let level_up = self.state.level_up();
        let alpha = level_up_alpha(ctx, level_up.is_some());
        if let Some(level_up) = level_up {
            if render_level_up(ctx, level_up, alpha) {
                self.state.dismiss_level_up();
            }
        }

        self.assistant.show(ctx, &mut self.commonmark_cache);
    }
}
