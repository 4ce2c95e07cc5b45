//! Level-up overlay
//!
//! Shown on top of everything while a level-up notice is pending, until the
//! player dismisses it.

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use super::theme::{ACCENT_EMERALD, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};
use crate::progression::LevelUp;

/// Fade-in duration in seconds
const FADE_DURATION: f32 = 0.3;

/// Overlay opacity for this frame.
///
/// Must be called every frame with whether a notice is pending, so the fade
/// falls back to zero after a dismissal and the next level-up fades in again.
pub(super) fn level_up_alpha(ctx: &egui::Context, visible: bool) -> f32 {
    ctx.animate_bool_with_time(Id::new("level_up_fade"), visible, FADE_DURATION)
}

/// Render the overlay at `alpha`. Returns true when the player dismissed it.
pub(super) fn render_level_up(ctx: &egui::Context, level_up: LevelUp, alpha: f32) -> bool {
    let mut dismissed = false;

    // Dim the app behind the overlay
    let screen = ctx.screen_rect();
    egui::Area::new(Id::new("level_up_backdrop"))
        .fixed_pos(screen.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen,
                0.0,
                Color32::from_rgba_unmultiplied(
                    BG_PRIMARY.r(),
                    BG_PRIMARY.g(),
                    BG_PRIMARY.b(),
                    (alpha * 200.0) as u8,
                ),
            );
        });

    egui::Area::new(Id::new("level_up_card"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(BG_SECONDARY)
                .stroke(egui::Stroke::new(2.0, ACCENT_EMERALD.gamma_multiply(alpha)))
                .corner_radius(16.0)
                .inner_margin(32.0)
                .show(ui, |ui| {
                    ui.set_width(320.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🏆").size(48.0));
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new("LEVEL UP!")
                                .color(TEXT_PRIMARY)
                                .strong()
                                .italics()
                                .size(32.0),
                        );
                        ui.label(
                            RichText::new(format!("You reached level {}", level_up.new_level))
                                .color(ACCENT_EMERALD)
                                .strong()
                                .size(18.0),
                        );
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(
                                "Your medical expertise is growing. New modules have been unlocked in the Lab.",
                            )
                            .color(TEXT_DIM),
                        );
                        ui.add_space(16.0);
                        let button = egui::Button::new(
                            RichText::new("Continue the journey")
                                .color(BG_PRIMARY)
                                .strong()
                                .size(16.0),
                        )
                        .fill(ACCENT_EMERALD)
                        .min_size(Vec2::new(ui.available_width(), 40.0));
                        if ui.add(button).clicked() {
                            dismissed = true;
                        }
                    });
                });
        });

    dismissed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ctx: &egui::Context, visible: bool) -> f32 {
        let mut alpha = 0.0;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            alpha = level_up_alpha(ctx, visible);
        });
        alpha
    }

    #[test]
    fn test_every_level_up_fades_in() {
        let ctx = egui::Context::default();
        assert_eq!(frame(&ctx, false), 0.0);

        for _ in 0..2 {
            let first = frame(&ctx, true);
            assert!(first > 0.0 && first < 1.0);
            for _ in 0..30 {
                frame(&ctx, true);
            }
            assert_eq!(frame(&ctx, true), 1.0);

            // Dismissed: the next notice starts from transparent again
            for _ in 0..30 {
                frame(&ctx, false);
            }
            assert_eq!(frame(&ctx, false), 0.0);
        }
    }
}
