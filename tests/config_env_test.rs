//! Tests for TREESAME_* environment overrides.
//!
//! The process environment is shared by every test in this binary, so each
//! test holds `ENV_LOCK` while its variables are set.

use std::env;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use treesame::application::ApplicationError;
use treesame::config::Settings;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets variables for the lifetime of the guard and removes them on drop.
struct EnvGuard {
    keys: Vec<&'static str>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        Self {
            keys: vars.iter().map(|(key, _)| *key).collect(),
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

fn config_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("treesame.toml");
    fs::write(
        &path,
        r#"
fixture_size = 4
seed = 1
separator = ","
"#,
    )
    .unwrap();
    path
}

#[test]
fn given_env_and_config_file_when_load_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    let _env = EnvGuard::set(&[
        ("TREESAME_FIXTURE_SIZE", "12"),
        ("TREESAME_SEED", "77"),
        ("TREESAME_SEPARATOR", "|"),
    ]);

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(
        settings,
        Settings {
            fixture_size: 12,
            seed: Some(77),
            separator: "|".into(),
        }
    );
}

#[test]
fn given_one_env_variable_when_load_then_other_fields_come_from_file() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    let _env = EnvGuard::set(&[("TREESAME_SEED", "5")]);

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.fixture_size, 4);
    assert_eq!(settings.seed, Some(5));
    assert_eq!(settings.separator, ",");
}

#[test]
fn given_non_numeric_seed_in_env_when_load_then_config_error() {
    let _env = EnvGuard::set(&[("TREESAME_SEED", "abc")]);

    let err = Settings::load(None).unwrap_err();

    match err {
        ApplicationError::Config { message } => {
            assert!(message.contains("TREESAME_SEED"), "got: {message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_negative_fixture_size_in_env_when_load_then_config_error() {
    let _env = EnvGuard::set(&[("TREESAME_FIXTURE_SIZE", "-3")]);

    let err = Settings::load(None).unwrap_err();

    assert!(
        matches!(err, ApplicationError::Config { ref message } if message.contains("TREESAME_FIXTURE_SIZE")),
        "got: {err:?}"
    );
}
