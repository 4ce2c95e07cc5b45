//! Configuration file I/O operations

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{Config, DEFAULT_CONFIG};

impl Config {
    /// Get the global config directory path (~/.drstone/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".drstone")
    }

    /// Get the global config file path (~/.drstone/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from an explicit path, or from the global config if it exists.
    ///
    /// An explicit path must exist; a missing global config means defaults.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        if let Some(path) = path_override {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            debug!("No config at {}, using defaults", global_path.display());
            Ok(Self::default())
        }
    }

    /// Write the commented default configuration to `path`.
    pub fn write_default(path: &Path) -> Result<()> {
        write_atomic(path, DEFAULT_CONFIG)
    }
}

/// Write a temp file next to the target and rename it into place, so a crash
/// never leaves a half-written config behind.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = std::fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_write_default_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::write_default(&path).unwrap();
        std::fs::write(&path, "[progression]\ncurrency = 999\n").unwrap();
        Config::write_default(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\nmodel = \"gemini-2.5-flash\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.assistant.model, "gemini-2.5-flash");
        assert_eq!(config.assistant.timeout_secs, 60);
        assert_eq!(config.progression.experience_to_next_level, 1000);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
