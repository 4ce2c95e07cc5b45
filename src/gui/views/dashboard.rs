//! Dashboard: level, XP bar, stones, streak and the badge shelf

use eframe::egui::{self, Color32, RichText};

use super::{page_header, ViewAction};
use crate::app::{AppState, Tab};
use crate::gui::theme::{
    card_frame, ACCENT_AMBER, ACCENT_EMERALD, ACCENT_ORANGE, BG_CARD, BG_HIGHLIGHT, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::progression::ProgressionState;

pub(in crate::gui) fn render_dashboard(ui: &mut egui::Ui, state: &AppState) -> Option<ViewAction> {
    let stats = state.stats();
    let mut action = None;

    page_header(ui, "Welcome back, Doctor", "Your studies continue where you left off.");

    render_level_card(ui, stats);
    ui.add_space(12.0);

    ui.columns(2, |cols| {
        stat_card(&mut cols[0], "Stones", &stats.currency.to_string(), "💎", ACCENT_AMBER);
        stat_card(
            &mut cols[1],
            "Streak",
            &format!("{} days", stats.streak_days),
            "🔥",
            ACCENT_ORANGE,
        );
    });
    ui.add_space(12.0);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("Trophies").strong().color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!(
                    "{}/{}",
                    stats.unlocked_badge_count(),
                    stats.badges.len()
                ))
                .color(TEXT_MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link("View all").clicked() {
                    action = Some(ViewAction::SelectTab(Tab::Rewards));
                }
            });
        });
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for badge in &stats.badges {
                let (fill, alpha) = if badge.unlocked {
                    (BG_HIGHLIGHT, 1.0)
                } else {
                    (BG_CARD, 0.35)
                };
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(24.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&badge.icon)
                                .size(24.0)
                                .color(Color32::WHITE.gamma_multiply(alpha)),
                        );
                    })
                    .response
                    .on_hover_text(format!("{} ({})", badge.name, badge.status_label()));
            }
        });
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("⚡ Take a challenge").color(ACCENT_EMERALD))
            .clicked()
        {
            action = Some(ViewAction::SelectTab(Tab::Quizzes));
        }
        if ui.button("📖 Open the lab").clicked() {
            action = Some(ViewAction::SelectTab(Tab::Study));
        }
    });

    action
}

fn render_level_card(ui: &mut egui::Ui, stats: &ProgressionState) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Level {}", stats.level))
                    .size(22.0)
                    .strong()
                    .color(ACCENT_EMERALD),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} / {} XP",
                        stats.experience, stats.experience_to_next_level
                    ))
                    .color(TEXT_DIM),
                );
            });
        });
        ui.add_space(6.0);
        ui.add(
            egui::ProgressBar::new(stats.progress_to_next())
                .fill(ACCENT_EMERALD)
                .desired_height(10.0)
                .corner_radius(5.0),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "{} XP until level {}",
                stats.experience_remaining(),
                stats.level + 1
            ))
            .small()
            .color(TEXT_MUTED),
        );
    });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str, icon: &str, color: Color32) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(28.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(TEXT_DIM));
                ui.label(RichText::new(value).size(20.0).strong().color(color));
            });
        });
    });
}
