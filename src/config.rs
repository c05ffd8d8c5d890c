//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treesame/treesame.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `TREESAME_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::DEFAULT_FIXTURE_SIZE;

/// Unified configuration for treesame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of values in a `fixture:K` tree (default: 10)
    pub fixture_size: usize,
    /// Seed for fixture shapes (default: OS entropy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Separator between walked values (default: single space)
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixture_size: DEFAULT_FIXTURE_SIZE,
            seed: None,
            separator: " ".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub fixture_size: Option<usize>,
    pub seed: Option<u64>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for treesame.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treesame").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treesame.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            fixture_size: overlay.fixture_size.unwrap_or(self.fixture_size),
            seed: overlay.seed.or(self.seed),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// The global config is skipped silently when missing.
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply TREESAME_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREESAME")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "fixture_size")? {
            settings.fixture_size = val;
        }
        if let Some(val) = env_value::<u64>(&config, "seed")? {
            settings.seed = Some(val);
        }
        if let Some(val) = env_value::<String>(&config, "separator")? {
            settings.separator = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treesame configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treesame/treesame.toml
#   File:   --config <path>
#   Env:    TREESAME_* environment variables (e.g. TREESAME_SEED=42)

# Number of values in a fixture:K tree (K, 2K, ..., fixture_size * K)
# fixture_size = 10

# Seed for fixture shapes; unset means a fresh random shape on every run
# seed = 42

# Separator printed between walked values
# separator = " "
"#
        .to_string()
    }
}

/// Read one env override: unset is `None`, an unparsable value is an error.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("TREESAME_{}: {e}", key.to_uppercase()),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overrides_when_default_then_matches_tour_fixture() {
        let settings = Settings::default();
        assert_eq!(settings.fixture_size, 10);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.separator, " ");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings {
            fixture_size: 5,
            seed: Some(1),
            separator: ",".into(),
        };
        let overlay = RawSettings {
            seed: Some(9),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.fixture_size, 5);
        assert_eq!(merged.seed, Some(9));
        assert_eq!(merged.separator, ",");
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.fixture_size.is_none());
        assert!(raw.seed.is_none());
    }

    #[test]
    fn given_settings_without_seed_when_serialized_then_omits_seed() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("fixture_size = 10"));
        assert!(!toml.contains("seed"));
    }
}
