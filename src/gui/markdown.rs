//! Markdown rendering helpers for assistant replies

use eframe::egui;

use super::theme::{ACCENT_EMERALD, BG_CARD, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Apply stone theme visuals for markdown rendering
#[inline]
fn apply_markdown_theme(ui: &mut egui::Ui) {
    let visuals = &mut ui.style_mut().visuals;
    visuals.override_text_color = Some(TEXT_DIM);
    visuals.weak_text_color = Some(TEXT_MUTED);
    visuals.hyperlink_color = ACCENT_EMERALD;
    visuals.code_bg_color = BG_CARD;
    visuals.extreme_bg_color = BG_CARD;
    visuals.widgets.active.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.hovered.fg_stroke.color = TEXT_PRIMARY;
}

/// Render markdown content with themed scroll area
pub(super) fn render_markdown_scroll(
    ui: &mut egui::Ui,
    text: &str,
    commonmark_cache: &mut egui_commonmark::CommonMarkCache,
    max_height: f32,
) {
    egui::ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.scope(|ui| {
                apply_markdown_theme(ui);
                egui_commonmark::CommonMarkViewer::new().show(ui, commonmark_cache, text);
            });
        });
}
