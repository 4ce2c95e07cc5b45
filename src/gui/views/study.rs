//! Study lab: module cards with category, difficulty and progress

use eframe::egui::{self, Color32, RichText};

use super::page_header;
use crate::app::AppState;
use crate::domain::{Category, StudyModule};
use crate::gui::theme::{
    card_frame, ACCENT_AMBER, ACCENT_BLUE, ACCENT_EMERALD, ACCENT_PURPLE, ACCENT_RED, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};

fn category_color(category: Category) -> Color32 {
    match category {
        Category::Anatomy => ACCENT_RED,
        Category::Physiology => ACCENT_BLUE,
        Category::Pathology => ACCENT_PURPLE,
        Category::Pharmacology => ACCENT_EMERALD,
        Category::Clinical => ACCENT_AMBER,
    }
}

pub(in crate::gui) fn render_study(ui: &mut egui::Ui, state: &AppState) {
    page_header(ui, "The Lab", "Study modules, from first principles to the bedside.");

    let modules = &state.catalog().modules;
    if modules.is_empty() {
        ui.label(RichText::new("No study modules loaded.").color(TEXT_MUTED));
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for module in modules {
                render_module_card(ui, module);
                ui.add_space(10.0);
            }
        });
}

fn render_module_card(ui: &mut egui::Ui, module: &StudyModule) {
    let color = category_color(module.category);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            egui::Frame::NONE
                .fill(color.gamma_multiply(0.2))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(module.category.as_str()).small().color(color));
                });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(module.difficulty.pips()).color(ACCENT_AMBER))
                    .on_hover_text(format!("Difficulty {}/5", module.difficulty.get()));
            });
        });

        ui.add_space(6.0);
        ui.label(RichText::new(&module.title).size(18.0).strong().color(TEXT_PRIMARY));
        ui.label(
            RichText::new(format!(
                "{} lessons · {} completed",
                module.lessons.len(),
                module.completed_lessons()
            ))
            .small()
            .color(TEXT_DIM),
        );

        ui.add_space(6.0);
        ui.add(
            egui::ProgressBar::new(module.progress_fraction())
                .fill(color)
                .desired_height(6.0)
                .text(RichText::new(format!("{}%", module.progress.min(100))).small()),
        );

        if !module.lessons.is_empty() {
            egui::CollapsingHeader::new(RichText::new("Lessons").color(TEXT_DIM))
                .id_salt(&module.id)
                .show(ui, |ui| {
                    for lesson in &module.lessons {
                        let mark = if lesson.completed { "✔" } else { "○" };
                        ui.label(
                            RichText::new(format!("{} {}", mark, lesson.title)).color(TEXT_PRIMARY),
                        );
                        if !lesson.content.is_empty() {
                            ui.label(RichText::new(&lesson.content).small().color(TEXT_MUTED));
                        }
                    }
                });
        }
    });
}
