use eframe::egui::{self, RichText};

use super::page_header;
use crate::gui::theme::TEXT_MUTED;

pub(in crate::gui) fn render_profile(ui: &mut egui::Ui) {
    page_header(ui, "Profile", "Your study record.");
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("👤").size(48.0));
        ui.label(RichText::new("Coming soon...").size(18.0).color(TEXT_MUTED));
    });
}
