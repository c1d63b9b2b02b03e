//! Full configuration validation.
//!
//! Validates numeric ranges, menu titles and menu shortcut uniqueness.
//! Errors are collected into a single `ConfigError`.

mod helpers;
mod recorder;


use crate::keybinds;
use crate::schema::KeychordConfig;
use keychord_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KeychordConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.menu) {
        errors.push(e.to_string());
    }

    recorder::validate_recorder(&mut errors, config);
    recorder::validate_menu(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
