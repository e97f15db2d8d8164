use std::fs;

use tempfile::{TempDir, tempdir};

use crate::store::{Dispatcher, StateGetter, action::Action};

use super::*;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yml");
    (dir, path)
}

fn default_args(config: Option<PathBuf>) -> Args {
    Args {
        debug: false,
        log_file: None,
        config,
        theme: None,
    }
}

#[test]
fn test_initialize_logger_without_log_file() {
    let args = default_args(None);
    initialize_logger(&args).unwrap();
}

#[test]
fn parses_cli_args() {
    let args = Args::try_parse_from([
        "shoplist",
        "--debug",
        "--log-file",
        "/tmp/shoplist.log",
        "--theme",
        "red",
    ])
    .unwrap();

    assert!(args.debug);
    assert_eq!(args.log_file, Some(PathBuf::from("/tmp/shoplist.log")));
    assert_eq!(args.theme, Some(Theme::Red));
    assert_eq!(args.config, None);
}

#[test]
fn rejects_unknown_theme() {
    assert!(Args::try_parse_from(["shoplist", "--theme", "plaid"]).is_err());
}

#[test]
fn resolves_config_path_from_args() {
    let (_dir, path) = setup();
    let args = default_args(Some(path.clone()));
    assert_eq!(
        resolve_config_path(&args).unwrap(),
        path.to_string_lossy().to_string()
    );
}

#[test]
fn theme_arg_overrides_saved_theme_without_writing() {
    let (_dir, path) = setup();
    let manager =
        create_config_manager(path.to_string_lossy().to_string()).unwrap();

    let mut args = default_args(Some(path.clone()));
    args.theme = Some(Theme::Indigo);

    let config = get_current_config(&manager, &args);
    assert_eq!(config.theme, "Indigo");

    let saved: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.theme, "Blue");
}

#[test]
fn test_init() {
    let (_dir, path) = setup();
    let store = init(&default_args(Some(path))).unwrap();
    let state = store.get_state();
    assert!(state.list.is_empty());
    assert_eq!(state.theme, Theme::Blue);
}

#[test]
fn cycling_theme_persists_config() {
    let (_dir, path) = setup();
    let store = init(&default_args(Some(path.clone()))).unwrap();

    store.dispatch(Action::CycleTheme);

    let saved: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.theme, "Emerald");
    assert_eq!(store.get_state().theme, Theme::Emerald);
}

#[test]
fn failed_save_is_reported_as_notification() {
    let (dir, path) = setup();
    let store = init(&default_args(Some(path))).unwrap();

    // removing the directory makes the next write fail
    dir.close().unwrap();
    store.dispatch(Action::CycleTheme);

    let state = store.get_state();
    assert_eq!(state.theme, Theme::Emerald);
    assert!(
        state
            .notification
            .as_ref()
            .is_some_and(|n| n.message.starts_with("Error:"))
    );
}
