//! GUI runner - launches the DrStone window

mod fonts;

use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;
use tracing::info;

use super::app::DrStoneApp;
use super::theme::apply_theme;
use crate::app::AppState;
use crate::assistant::{Assistant, GeminiClient};
use crate::config::Config;

use fonts::configure_fonts;

/// Minimum window size; the dashboard grid needs about this much room
const MIN_WINDOW_SIZE: [f32; 2] = [760.0, 480.0];

/// Run the GUI until the window is closed
pub fn run_gui(config: &Config, content_override: Option<&Path>) -> Result<()> {
    let state = AppState::from_config(config, content_override)
        .context("Failed to load study content")?;
    info!(
        modules = state.catalog().modules.len(),
        quizzes = state.catalog().quizzes.len(),
        "[drstone] Content loaded"
    );

    let client = GeminiClient::from_settings(&config.assistant);
    if config.assistant.resolved_api_key().is_none() {
        info!("[drstone] No assistant API key configured, Dr. Stone will be unavailable");
    }
    let app = DrStoneApp::new(state, Assistant::new(client));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DrStone")
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    info!("[drstone] Starting GUI");
    eframe::run_native(
        "drstone",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
