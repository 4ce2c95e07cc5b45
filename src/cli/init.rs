//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use drstone::config::Config;

/// Write the default configuration.
///
/// Creates the global config at ~/.drstone/config.toml unless `config_path`
/// is given.
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_default(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_command(Some(&path), false).unwrap();
        assert!(path.exists());
        assert!(init_command(Some(&path), false).is_err());
        init_command(Some(&path), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            drstone::config::DEFAULT_CONFIG
        );
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
