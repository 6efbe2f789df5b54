use super::{ConfigLoader, parse_settings};
use crate::config::{ConfigError, Settings};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("hostpick-settings-{prefix}-{unique}"))
}

#[test]
fn missing_settings_file_uses_defaults() {
    let loader = ConfigLoader::with_path(temp_path("missing").join("hostpick.yaml"));
    let settings = loader.load_config().expect("defaults");
    assert_eq!(settings, Settings::default());
    assert!(!settings.settings.debug_mode);
    assert_eq!(settings.settings.terminal_app, "Terminal");
}

#[test]
fn partial_settings_fill_in_defaults() {
    let settings = parse_settings("settings:\n  debug_mode: true\n").expect("parse");
    assert!(settings.settings.debug_mode);
    assert_eq!(settings.settings.terminal_app, "Terminal");
}

#[test]
fn empty_settings_file_uses_defaults() {
    assert_eq!(parse_settings("  \n").expect("parse"), Settings::default());
}

#[test]
fn reads_settings_from_disk() {
    let dir = temp_path("disk");
    fs::create_dir_all(&dir).expect("create dir");
    let path = dir.join("hostpick.yaml");
    fs::write(&path, "settings:\n  terminal_app: iTerm\n").expect("write settings");

    let loader = ConfigLoader::with_path(&path);
    assert_eq!(loader.config_path(), path.as_path());
    let settings = loader.load_config().expect("load settings");
    assert_eq!(settings.settings.terminal_app, "iTerm");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = parse_settings("settings: [unterminated").expect_err("invalid yaml");
    assert!(matches!(err, ConfigError::ParseError(_)));
}
