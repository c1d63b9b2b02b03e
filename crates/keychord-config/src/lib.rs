//! keychord configuration system.
//!
//! Provides TOML-based configuration for the shortcut recorder: hit-test
//! margin, conflict lists, host menu bindings and logging. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use keychord_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{KeychordConfig, CONFIG_SCHEMA_VERSION};

use keychord_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` in the OS config directory if none exists.
/// An invalid config is an error here, unlike [`toml_loader::load_default`].
pub fn load_config() -> Result<KeychordConfig, ConfigError> {
    let config = toml_loader::read_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<KeychordConfig, ConfigError> {
    let config = toml_loader::read_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &KeychordConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = KeychordConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"recorder\""));
        assert!(json.contains("\"conflicts\""));
        assert!(json.contains("\"menu\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = KeychordConfig::default();
        let json = config_to_json(&config);
        let parsed: KeychordConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.recorder.click_margin, 3.0);
        assert_eq!(parsed.conflicts.system_reserved, config.conflicts.system_reserved);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recorder]\nclick_margin = -2.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn strict_and_lenient_loaders_disagree_only_on_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recorder]\nclick_margin = 500.0\n").unwrap();

        // The strict loader reports the problem instead of keeping the file.
        assert!(load_config_from(&path).is_err());
        let kept = toml_loader::load_from_path(&path).unwrap();
        assert_eq!(kept.recorder.click_margin, 500.0);

        std::fs::write(&path, "[recorder]\nclick_margin = 5.0\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().recorder.click_margin, 5.0);
    }
}
