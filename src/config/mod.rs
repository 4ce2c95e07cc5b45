//! Configuration loading and management

mod io;
mod settings;
mod template;

pub use settings::{AssistantSettings, GuiSettings};
pub use template::DEFAULT_CONFIG;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progression::ProgressionSeed;

/// Main configuration structure (`~/.drstone/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional YAML/TOML content catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Concept assistant settings
    #[serde(default)]
    pub assistant: AssistantSettings,

    /// Starting values for the progression ledger
    #[serde(default)]
    pub progression: ProgressionSeed,

    /// Window settings
    #[serde(default)]
    pub gui: GuiSettings,
}
