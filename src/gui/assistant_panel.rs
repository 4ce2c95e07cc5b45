//! Floating "Dr. Stone" assistant window
//!
//! Requests run on a short-lived worker thread and report back over an mpsc
//! channel, polled once per frame.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use chrono::Local;
use eframe::egui::{self, Align2, Color32, Key, RichText, Vec2};
use tracing::warn;

use super::markdown::render_markdown_scroll;
use super::theme::{ACCENT_EMERALD, ACCENT_RED, BG_PRIMARY, TEXT_DIM, TEXT_MUTED};
use crate::assistant::{Assistant, Exchange, Reply};

pub(super) struct AssistantPanel {
    assistant: Assistant,
    open: bool,
    query: String,
    pending: Option<Receiver<Option<Exchange>>>,
    last: Option<Exchange>,
}

impl AssistantPanel {
    pub(super) fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            open: false,
            query: String::new(),
            pending: None,
            last: None,
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn can_submit(&self) -> bool {
        !self.is_loading() && !self.query.trim().is_empty()
    }

    fn submit(&mut self, ctx: &egui::Context) {
        if !self.can_submit() {
            return;
        }

        self.last = None;
        let (tx, rx) = mpsc::channel();
        let assistant = self.assistant.clone();
        let query = self.query.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let _ = tx.send(assistant.ask(&query));
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    /// Pick up a finished request, if any
    pub(super) fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(exchange) => {
                self.last = exchange;
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("Assistant worker exited without a reply");
                self.last = Some(Exchange {
                    query: self.query.trim().to_string(),
                    reply: Reply::Unavailable,
                    asked_at: Local::now(),
                });
                self.pending = None;
            }
        }
    }

    /// Clear the reply and the question for a fresh one
    fn reset(&mut self) {
        self.last = None;
        self.query.clear();
    }

    pub(super) fn show(
        &mut self,
        ctx: &egui::Context,
        commonmark_cache: &mut egui_commonmark::CommonMarkCache,
    ) {
        self.render_toggle(ctx);

        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new(RichText::new("✨ Dr. Stone").color(ACCENT_EMERALD).strong())
            .open(&mut open)
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -88.0))
            .default_width(380.0)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Medical Mentor")
                        .color(TEXT_MUTED)
                        .small(),
                );
                ui.separator();
                self.render_body(ui, commonmark_cache);
                ui.separator();
                self.render_input(ui);
            });
        self.open = open;
    }

    fn render_toggle(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("assistant_toggle"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = egui::Button::new(RichText::new("✨").size(22.0).color(BG_PRIMARY))
                    .fill(ACCENT_EMERALD)
                    .corner_radius(24.0)
                    .min_size(Vec2::splat(48.0));
                if ui.add(button).on_hover_text("Ask Dr. Stone").clicked() {
                    self.open = !self.open;
                }
            });
    }

    fn render_body(
        &mut self,
        ui: &mut egui::Ui,
        commonmark_cache: &mut egui_commonmark::CommonMarkCache,
    ) {
        let mut reset = false;
        if let Some(exchange) = &self.last {
            let color = match exchange.reply {
                Reply::Explanation(_) => TEXT_DIM,
                Reply::Unavailable => ACCENT_RED,
            };
            ui.label(
                RichText::new(format!(
                    "{} · {}",
                    exchange.query,
                    exchange.asked_at.format("%H:%M")
                ))
                .color(TEXT_MUTED)
                .small(),
            );
            if exchange.reply.is_unavailable() {
                ui.label(RichText::new(exchange.reply.text()).color(color));
            } else {
                render_markdown_scroll(ui, exchange.reply.text(), commonmark_cache, 320.0);
            }
            ui.add_space(8.0);
            reset = ui.button("Ask another question").clicked();
        } else if self.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Consulting the archives...").color(TEXT_DIM));
            });
        } else {
            ui.label(
                RichText::new(
                    "Ask me anything about anatomy, physiology or clinical medicine.",
                )
                .color(TEXT_DIM),
            );
        }

        if reset {
            self.reset();
        }
    }

    fn render_input(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("e.g. Warfarin mechanism of action")
                    .desired_width(ui.available_width() - 56.0),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let ask = ui.add_enabled(
                self.can_submit(),
                egui::Button::new(RichText::new("Ask").color(Color32::BLACK)).fill(ACCENT_EMERALD),
            );

            if enter || ask.clicked() {
                self.submit(&ctx);
            }
        });
    }
}
