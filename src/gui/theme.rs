//! GUI Theme: "Stone Lab" - weathered stone with emerald instrument glow
//!
//! Color constants for the DrStone GUI.

use eframe::egui::{self, Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: near-black stone
pub const BG_PRIMARY: Color32 = Color32::from_rgb(12, 10, 9);
/// Panels and navigation
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 25, 23);
/// Cards inside panels
pub const BG_CARD: Color32 = Color32::from_rgb(41, 37, 36);
/// Hover/selection highlight
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(56, 52, 50);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 244);
pub const TEXT_DIM: Color32 = Color32::from_rgb(168, 162, 158);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 113, 108);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// XP, progress and correct answers
pub const ACCENT_EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
/// Stones
pub const ACCENT_AMBER: Color32 = Color32::from_rgb(245, 158, 11);
/// Streak flame
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
/// Wrong answers
pub const ACCENT_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(96, 165, 250);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(192, 132, 252);

/// Apply the dark stone theme to the egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_CARD;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.bg_fill = ACCENT_EMERALD.gamma_multiply(0.25);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_EMERALD);
    ctx.set_style(style);
}

/// Standard card frame used by every view
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, BG_HIGHLIGHT))
        .corner_radius(12.0)
        .inner_margin(16.0)
}
