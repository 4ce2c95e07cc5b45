//! Config files feeding the controller

mod common;

use common::{write_temp_file, SAMPLE_YAML};
use drstone::app::AppState;
use drstone::config::Config;

#[test]
fn test_config_file_seeds_ledger_and_content() {
    let (dir, content_path) = write_temp_file("content.yaml", SAMPLE_YAML);
    let config_toml = format!(
        r#"
content_path = "{}"

[assistant]
language = "Brazilian Portuguese"

[progression]
level = 4
currency = 10

[gui]
window_width = 800.0
"#,
        content_path.display().to_string().replace('\\', "\\\\")
    );
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, config_toml).unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    assert_eq!(config.assistant.language, "Brazilian Portuguese");
    assert_eq!(config.assistant.model, "gemini-3-flash-preview");
    assert_eq!(config.gui.window_width, 800.0);
    assert_eq!(config.gui.window_height, 720.0);

    let state = AppState::from_config(&config, None).unwrap();
    let stats = state.stats();
    assert_eq!(stats.level, 4);
    assert_eq!(stats.currency, 10);
    assert_eq!(stats.experience, 450);
    assert_eq!(state.catalog().modules[0].id, "pharm-01");
}

#[test]
fn test_init_template_loads_as_defaults() {
    let (dir, _) = write_temp_file("placeholder", "");
    let path = dir.path().join("config.toml");

    Config::write_default(&path).unwrap();
    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
}

#[test]
fn test_unknown_section_is_ignored() {
    let (_dir, path) = write_temp_file("config.toml", "[telemetry]\nenabled = true\n");
    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
}
