//! Integration tests for Settings loading from an explicit config file.
//!
//! Note: these tests assume no global config and no TREESAME_* variables,
//! so the explicit file is layered directly over compiled defaults.

use std::fs;

use tempfile::TempDir;

use treesame::application::ApplicationError;
use treesame::config::Settings;

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treesame.toml");
    fs::write(
        &path,
        r#"
fixture_size = 4
seed = 99
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert: specified fields replaced, separator inherited from defaults
    assert_eq!(settings.fixture_size, 4);
    assert_eq!(settings.seed, Some(99));
    assert_eq!(settings.separator, " ");
}

#[test]
fn given_missing_config_file_when_load_then_returns_operation_failed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("nope.toml"), "got: {err}");
}

#[test]
fn given_malformed_config_file_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "fixture_size = \"many\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "got: {err:?}");
}

#[test]
fn given_loaded_settings_when_serialized_then_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treesame.toml");
    let original = Settings {
        fixture_size: 7,
        seed: Some(3),
        separator: ", ".to_string(),
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    let reloaded = Settings::load(Some(&path)).expect("reload");

    assert_eq!(reloaded, original);
}
