//! Shortcut conflict sources: disallowed and system-reserved lists, and the
//! host application's menu bindings.
//!
//! Shortcuts are written as "Modifier+Key" strings, e.g. "Cmd+Shift+K".
//! Modifier-only shortcuts list just the modifiers: "Fn", "Ctrl+Option".

use serde::{Deserialize, Serialize};

/// Lists consulted when a candidate shortcut is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictsConfig {
    /// Reject a regular key whose only modifiers are Option or
    /// Option+Shift. macOS refuses to register those as hotkeys.
    pub disallow_option_only: bool,
    pub disallowed: Vec<String>,
    pub system_reserved: Vec<String>,
}

impl Default for ConflictsConfig {
    fn default() -> Self {
        Self {
            disallow_option_only: true,
            disallowed: Vec::new(),
            system_reserved: vec![
                "Cmd+Tab".into(),
                "Cmd+Shift+Tab".into(),
                "Cmd+Space".into(),
                "Ctrl+Space".into(),
                "Cmd+Shift+3".into(),
                "Cmd+Shift+4".into(),
                "Cmd+Shift+5".into(),
                "Cmd+Option+Escape".into(),
            ],
        }
    }
}

/// A single menu command binding in the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub title: String,
    pub shortcut: String,
}

/// Menu bindings owned by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub items: Vec<MenuItemConfig>,
}
