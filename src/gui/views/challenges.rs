//! Challenges: the quiz list and the running quiz

use eframe::egui::{self, Color32, RichText, Vec2};

use super::{page_header, QuizAction, ViewAction};
use crate::app::AppState;
use crate::domain::Quiz;
use crate::gui::theme::{
    card_frame, ACCENT_AMBER, ACCENT_EMERALD, ACCENT_RED, BG_CARD, BG_HIGHLIGHT, BG_PRIMARY,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::quiz::{QuizSession, Reward, SessionState};

pub(in crate::gui) fn render_quiz_list(ui: &mut egui::Ui, state: &AppState) -> Option<ViewAction> {
    page_header(ui, "Challenges", "Test yourself. Every correct answer earns XP and stones.");

    let quizzes = &state.catalog().quizzes;
    if quizzes.is_empty() {
        ui.label(RichText::new("No challenges loaded.").color(TEXT_MUTED));
        return None;
    }

    let mut action = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for quiz in quizzes {
                if render_quiz_card(ui, quiz) {
                    action = Some(ViewAction::LaunchQuiz(quiz.id.clone()));
                }
                ui.add_space(10.0);
            }
        });
    action
}

/// Returns true when "Start" was clicked
fn render_quiz_card(ui: &mut egui::Ui, quiz: &Quiz) -> bool {
    let mut start = false;
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&quiz.title).size(18.0).strong().color(TEXT_PRIMARY));
                if !quiz.description.is_empty() {
                    ui.label(RichText::new(&quiz.description).color(TEXT_DIM));
                }
                ui.label(
                    RichText::new(format!(
                        "{} questions · up to {} XP · {} stones",
                        quiz.question_count(),
                        quiz.xp_reward,
                        quiz.stone_reward
                    ))
                    .small()
                    .color(TEXT_MUTED),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(RichText::new("Start").strong().color(BG_PRIMARY))
                    .fill(ACCENT_EMERALD)
                    .min_size(Vec2::new(88.0, 32.0));
                start = ui.add(button).clicked();
            });
        });
    });
    start
}

pub(in crate::gui) fn render_quiz(ui: &mut egui::Ui, session: &QuizSession) -> Option<ViewAction> {
    let action = match session.state() {
        SessionState::Completed { score } => render_results(ui, session, score),
        SessionState::InProgress { .. } | SessionState::Answered { .. } => {
            render_question(ui, session)
        }
    };
    action.map(ViewAction::Quiz)
}

fn render_question(ui: &mut egui::Ui, session: &QuizSession) -> Option<QuizAction> {
    let mut action = None;
    let question = session.current_question();
    let answered = session.is_answered();

    ui.horizontal(|ui| {
        if ui.button("✕ Leave").clicked() {
            action = Some(QuizAction::Cancel);
        }
        ui.label(RichText::new(&session.quiz().title).strong().color(TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "Question {} of {}",
                    session.current_index() + 1,
                    session.total_questions()
                ))
                .color(TEXT_DIM),
            );
        });
    });
    ui.add(
        egui::ProgressBar::new(session.progress_fraction())
            .fill(ACCENT_EMERALD)
            .desired_height(6.0),
    );
    ui.add_space(20.0);

    ui.label(RichText::new(&question.text).size(20.0).strong().color(TEXT_PRIMARY));
    ui.add_space(16.0);

    for (index, option) in question.options.iter().enumerate() {
        let selected = session.selected_option() == Some(index);
        let (fill, stroke) = option_colors(answered, selected, question.is_correct(index));

        let button = egui::Button::new(RichText::new(option).size(16.0).color(TEXT_PRIMARY))
            .fill(fill)
            .stroke(egui::Stroke::new(1.5, stroke))
            .corner_radius(8.0)
            .min_size(Vec2::new(ui.available_width(), 44.0));
        if ui.add(button).clicked() && !answered {
            action = Some(QuizAction::Select(index));
        }
        ui.add_space(6.0);
    }

    ui.add_space(12.0);
    if answered {
        let correct = matches!(session.state(), SessionState::Answered { correct: true, .. });
        let (title, color) = if correct {
            ("Correct!", ACCENT_EMERALD)
        } else {
            ("Not quite.", ACCENT_RED)
        };
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().color(color));
            ui.label(RichText::new(&question.explanation).color(TEXT_DIM));
        });
        ui.add_space(12.0);

        let label = if session.is_last_question() {
            "See results"
        } else {
            "Next question"
        };
        if ui.add(primary_button(label, ui.available_width())).clicked() {
            action = Some(QuizAction::Advance);
        }
    } else {
        let enabled = session.selected_option().is_some();
        if ui
            .add_enabled(enabled, primary_button("Confirm answer", ui.available_width()))
            .clicked()
        {
            action = Some(QuizAction::Confirm);
        }
    }

    action
}

/// Fill and border for an option button
fn option_colors(answered: bool, selected: bool, correct: bool) -> (Color32, Color32) {
    match (answered, selected, correct) {
        (true, _, true) => (ACCENT_EMERALD.gamma_multiply(0.25), ACCENT_EMERALD),
        (true, true, false) => (ACCENT_RED.gamma_multiply(0.25), ACCENT_RED),
        (true, false, false) => (BG_CARD, BG_CARD),
        (false, true, _) => (BG_HIGHLIGHT, ACCENT_EMERALD),
        (false, false, _) => (BG_CARD, BG_HIGHLIGHT),
    }
}

fn render_results(ui: &mut egui::Ui, session: &QuizSession, score: usize) -> Option<QuizAction> {
    let mut action = None;
    let total = session.total_questions();
    let reward = Reward::for_score(session.quiz(), score);

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🎓").size(56.0));
        ui.label(
            RichText::new("Challenge complete")
                .size(26.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
        ui.label(
            RichText::new(format!("You answered {} of {} correctly", score, total))
                .color(TEXT_DIM),
        );
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            // Center the two reward chips
            let width = 2.0 * 140.0 + ui.spacing().item_spacing.x;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
            reward_chip(ui, &format!("+{} XP", reward.experience), ACCENT_EMERALD);
            reward_chip(ui, &format!("+{} 💎", reward.currency), ACCENT_AMBER);
        });
        ui.add_space(20.0);

        if ui.add(primary_button("Claim rewards", 240.0)).clicked() {
            action = Some(QuizAction::Finish);
        }
    });
    action
}

fn reward_chip(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(116.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).size(18.0).strong().color(color));
            });
        });
}

fn primary_button(label: &str, width: f32) -> egui::Button<'_> {
    egui::Button::new(RichText::new(label).strong().color(BG_PRIMARY))
        .fill(ACCENT_EMERALD)
        .min_size(Vec2::new(width, 40.0))
}
