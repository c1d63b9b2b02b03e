//! Menu binding validation utilities.

use crate::schema::MenuConfig;
use keychord_common::ConfigError;
use std::collections::HashMap;

/// Returns all menu bindings as `(title, shortcut)` pairs.
pub fn all_menu_bindings(config: &MenuConfig) -> Vec<(&str, &str)> {
    config
        .items
        .iter()
        .map(|item| (item.title.as_str(), item.shortcut.as_str()))
        .collect()
}

/// Canonical name for a modifier token, or `None` if the token is a key.
fn canonical_modifier(token: &str) -> Option<&'static str> {
    match token {
        "cmd" | "command" | "super" | "meta" => Some("cmd"),
        "ctrl" | "control" => Some("ctrl"),
        "opt" | "option" | "alt" => Some("option"),
        "shift" => Some("shift"),
        "fn" | "function" | "globe" => Some("fn"),
        _ => None,
    }
}

/// Form used for duplicate detection: modifiers resolved through their
/// aliases and sorted, then the key. Case and whitespace are ignored.
fn normalize_binding(binding: &str) -> String {
    let mut modifiers: Vec<&str> = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for token in binding.split('+').map(|t| t.trim().to_lowercase()) {
        match canonical_modifier(&token) {
            Some(m) => modifiers.push(m),
            None => keys.push(token),
        }
    }
    modifiers.sort_unstable();
    modifiers.dedup();

    let mut parts: Vec<String> = modifiers.into_iter().map(str::to_string).collect();
    parts.extend(keys);
    parts.join("+")
}

/// Validate that no two menu items are bound to the same shortcut.
pub fn validate_no_duplicates(config: &MenuConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (title, binding) in all_menu_bindings(config) {
        let key = normalize_binding(binding);
        if let Some(existing_title) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate menu shortcut '{binding}': assigned to both '{existing_title}' and '{title}'"
            )));
        }
        seen.insert(key, title);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MenuItemConfig;

    fn item(title: &str, shortcut: &str) -> MenuItemConfig {
        MenuItemConfig {
            title: title.into(),
            shortcut: shortcut.into(),
        }
    }

    #[test]
    fn empty_menu_has_no_duplicates() {
        assert!(validate_no_duplicates(&MenuConfig::default()).is_ok());
    }

    #[test]
    fn distinct_bindings_pass() {
        let config = MenuConfig {
            items: vec![item("Quit", "Cmd+Q"), item("New", "Cmd+N")],
        };
        assert!(validate_no_duplicates(&config).is_ok());
        assert_eq!(all_menu_bindings(&config).len(), 2);
    }

    #[test]
    fn detects_duplicate_bindings() {
        let config = MenuConfig {
            items: vec![item("Quit", "Cmd+Q"), item("Close All", "Cmd+Q")],
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate menu shortcut"));
        assert!(err.contains("Quit"));
        assert!(err.contains("Close All"));
    }

    #[test]
    fn duplicate_detection_ignores_case_and_spacing() {
        let config = MenuConfig {
            items: vec![item("Quit", "Cmd+Q"), item("Other", "cmd + q")],
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn duplicate_detection_ignores_modifier_order_and_aliases() {
        let config = MenuConfig {
            items: vec![item("Quit", "Cmd+Shift+Q"), item("Log Out", "Shift+Command+Q")],
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("Quit"));
        assert!(err.contains("Log Out"));

        let config = MenuConfig {
            items: vec![item("Hide", "Alt+Ctrl+H"), item("Other", "control + opt + h")],
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn same_key_with_different_modifiers_is_distinct() {
        let config = MenuConfig {
            items: vec![item("Quit", "Cmd+Q"), item("Force Quit", "Cmd+Option+Q")],
        };
        assert!(validate_no_duplicates(&config).is_ok());
        assert_eq!(normalize_binding("Option + CMD + q"), "cmd+option+q");
    }
}
