//! Trophy room

use eframe::egui::{self, Color32, RichText};

use super::page_header;
use crate::app::AppState;
use crate::domain::Badge;
use crate::gui::theme::{card_frame, ACCENT_EMERALD, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

const CARD_WIDTH: f32 = 200.0;

pub(in crate::gui) fn render_rewards(ui: &mut egui::Ui, state: &AppState) {
    let stats = state.stats();
    page_header(
        ui,
        "Trophies",
        &format!(
            "{} of {} unlocked",
            stats.unlocked_badge_count(),
            stats.badges.len()
        ),
    );

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for badge in &stats.badges {
                    render_badge(ui, badge);
                }
            });
        });
}

fn render_badge(ui: &mut egui::Ui, badge: &Badge) {
    let (alpha, status_color) = if badge.unlocked {
        (1.0, ACCENT_EMERALD)
    } else {
        (0.4, TEXT_MUTED)
    };

    card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&badge.icon)
                    .size(40.0)
                    .color(Color32::WHITE.gamma_multiply(alpha)),
            );
            ui.label(
                RichText::new(&badge.name)
                    .strong()
                    .color(TEXT_PRIMARY.gamma_multiply(alpha)),
            );
            ui.label(RichText::new(&badge.description).small().color(TEXT_DIM));
            ui.add_space(4.0);
            ui.label(RichText::new(badge.status_label()).small().color(status_color));
        });
    });
}
