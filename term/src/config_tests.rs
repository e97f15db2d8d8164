use std::fs;

use tempfile::{TempDir, tempdir};

use super::*;

fn setup() -> (TempDir, String) {
    let dir = tempdir().unwrap();
    let path = dir
        .path()
        .join("config.yml")
        .to_string_lossy()
        .to_string();
    (dir, path)
}

#[test]
fn creates_default_config_when_missing() {
    let (_dir, path) = setup();

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(manager.get(), Config::default());
    let written: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn loads_existing_config() {
    let (_dir, path) = setup();
    fs::write(&path, "theme: Emerald\nnotification_timeout: 5s\n").unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();

    let config = manager.get();
    assert_eq!(config.theme, "Emerald");
    assert_eq!(config.notification_timeout(), Duration::from_secs(5));
}

#[test]
fn falls_back_to_defaults_on_parse_error() {
    let (_dir, path) = setup();
    fs::write(&path, "::: not yaml [").unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();

    assert_eq!(manager.get(), Config::default());
}

#[test]
fn update_persists_config() {
    let (_dir, path) = setup();
    let mut manager =
        ConfigManager::builder().path(path.clone()).build().unwrap();

    let config = Config {
        theme: "Red".to_string(),
        ..Config::default()
    };
    manager.update(config.clone()).unwrap();

    assert_eq!(manager.get(), config);
    let reloaded = ConfigManager::builder().path(path).build().unwrap();
    assert_eq!(reloaded.get(), config);
}

#[test]
fn fails_to_build_without_path() {
    assert!(ConfigManager::builder().build().is_err());
}

#[test]
fn invalid_timeout_uses_default() {
    let config = Config {
        notification_timeout: "soon".to_string(),
        ..Config::default()
    };
    assert_eq!(config.notification_timeout(), DEFAULT_NOTIFICATION_TIMEOUT);
}
