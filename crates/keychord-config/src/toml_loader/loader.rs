//! Reading `config.toml`, from an explicit path or the per-user location.
//!
//! The `read_*` functions only parse. The public `load_*` functions also
//! validate, but keep an invalid config and log why; the strict entry
//! points in the crate root reject it instead.

use std::path::{Path, PathBuf};

use keychord_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;
use crate::schema::KeychordConfig;
use crate::validation;

const APP_DIR: &str = "keychord";
const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/keychord/config.toml`.
///
/// On macOS that is `~/Library/Application Support/keychord/config.toml`,
/// on Linux `~/.config/keychord/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::ParseError("no per-user config directory on this system".into())
        })
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| write_err("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| write_err("write", path, e))?;

    info!("wrote default recorder config to {}", path.display());
    Ok(())
}

/// Parse `path` without validating it.
pub(crate) fn read_from_path(path: &Path) -> Result<KeychordConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse the per-user config, writing the template first if it is missing.
pub(crate) fn read_default() -> Result<KeychordConfig, ConfigError> {
    let path = default_config_path()?;

    match read_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, using defaults", path.display());
            create_default_config(&path)?;
            Ok(KeychordConfig::default())
        }
        other => other,
    }
}

fn keep_with_warning(config: KeychordConfig) -> KeychordConfig {
    if let Err(e) = validation::validate(&config) {
        warn!("config is invalid, keeping it as parsed: {e}");
    }
    config
}

/// Parse and validate `path`. Validation problems are logged, not returned.
pub fn load_from_path(path: &Path) -> Result<KeychordConfig, ConfigError> {
    read_from_path(path).map(keep_with_warning)
}

/// Like [`load_from_path`] for the per-user config.
pub fn load_default() -> Result<KeychordConfig, ConfigError> {
    read_default().map(keep_with_warning)
}
