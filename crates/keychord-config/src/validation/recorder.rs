//! Recorder and menu validation.

use crate::schema::KeychordConfig;

use super::helpers::validate_range_f64;

/// Validate recorder hit-testing constraints.
pub(crate) fn validate_recorder(errors: &mut Vec<String>, config: &KeychordConfig) {
    validate_range_f64(
        errors,
        "recorder.click_margin",
        config.recorder.click_margin,
        0.0,
        50.0,
    );
}

/// Validate menu items carry a title and a shortcut.
pub(crate) fn validate_menu(errors: &mut Vec<String>, config: &KeychordConfig) {
    for (i, item) in config.menu.items.iter().enumerate() {
        if item.title.trim().is_empty() {
            errors.push(format!("menu.items[{i}].title is empty"));
        }
        if item.shortcut.trim().is_empty() {
            errors.push(format!("menu.items[{i}].shortcut is empty"));
        }
    }
}
