//! Font configuration for the GUI

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

/// System fonts tried as fallbacks for the symbols used in badges and
/// navigation (🧪 ⚗️ 🔪 ...). Missing files are skipped.
#[cfg(target_os = "macos")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
    (
        "arial_unicode",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ),
];

#[cfg(target_os = "windows")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("emoji", "C:\\Windows\\Fonts\\seguiemj.ttf"),
    ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    (
        "symbols",
        "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
    ),
    ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

/// Append every available fallback font to the proportional family
pub(super) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let mut loaded = 0usize;

    for (name, path) in FONT_FALLBACKS {
        let Ok(font_data) = std::fs::read(path) else {
            debug!("[drstone] Fallback font '{}' not found at {}", name, path);
            continue;
        };

        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(font_data).into());
        if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
            family.push((*name).to_owned());
        }
        loaded += 1;
    }

    info!("[drstone] Loaded {} fallback font(s)", loaded);
    ctx.set_fonts(fonts);
}
