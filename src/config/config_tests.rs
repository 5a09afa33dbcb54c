use super::*;
use crate::widget::WidgetCategory;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = NudgeConfig::default();
    assert_eq!(config.tool_window_buttons, DEFAULT_TOOL_WINDOW_BUTTONS);
    assert!(!config.all_buttons);
    assert!(config.menus);
    assert!(config.toolbar_buttons);
    assert_eq!(config.display_time_ms, DEFAULT_DISPLAY_TIME_MS);
    assert_eq!(config.flash_interval_ms, DEFAULT_FLASH_INTERVAL_MS);
    assert_eq!(config.propose_every, DEFAULT_PROPOSE_EVERY);
}

#[test]
fn test_category_toggles() {
    let config = NudgeConfig {
        tool_window_buttons: false,
        all_buttons: true,
        ..NudgeConfig::default()
    };
    assert!(!config.category_enabled(WidgetCategory::ToolWindowButton));
    assert!(config.category_enabled(WidgetCategory::GenericButton));
    assert!(config.category_enabled(WidgetCategory::MenuItem));
    assert!(config.category_enabled(WidgetCategory::ToolbarButton));
    assert!(!config.category_enabled(WidgetCategory::Other));
}

#[test]
fn test_durations_from_millis() {
    let config = NudgeConfig {
        display_time_ms: 1000,
        flash_interval_ms: 250,
        ..NudgeConfig::default()
    };
    assert_eq!(config.display_time(), Duration::from_millis(1000));
    assert_eq!(config.flash_interval(), Duration::from_millis(250));
}

#[test]
fn test_config_serialization_round_trip() {
    let config = NudgeConfig {
        tool_window_buttons: false,
        all_buttons: true,
        menus: false,
        toolbar_buttons: true,
        display_time_ms: 1500,
        flash_interval_ms: 0,
        propose_every: 5,
    };

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: NudgeConfig = serde_json::from_str(&json).unwrap();

    assert!(!deserialized.tool_window_buttons);
    assert!(deserialized.all_buttons);
    assert_eq!(deserialized.display_time_ms, 1500);
    assert_eq!(deserialized.flash_interval_ms, 0);
    assert_eq!(deserialized.propose_every, 5);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: NudgeConfig = serde_json::from_str(r#"{"proposeEvery": 9}"#).unwrap();
    assert_eq!(config.propose_every, 9);
    assert_eq!(config.display_time_ms, DEFAULT_DISPLAY_TIME_MS);
    assert!(config.menus);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("does-not-exist.json"));
    assert_eq!(config.display_time_ms, DEFAULT_DISPLAY_TIME_MS);
}

#[test]
fn test_load_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{{ not json").unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.propose_every, DEFAULT_PROPOSE_EVERY);
}

#[test]
fn test_load_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"displayTimeMs": 2000, "allButtons": true}}"#).unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.display_time_ms, 2000);
    assert!(config.all_buttons);
    assert_eq!(config.flash_interval_ms, DEFAULT_FLASH_INTERVAL_MS);
}
