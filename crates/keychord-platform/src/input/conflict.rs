use serde::Serialize;

use crate::keymap::Shortcut;

use super::registry::ConflictRegistry;

/// Why a candidate shortcut cannot be committed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    /// Bound to a menu item of the host application.
    Menu { title: String },
    /// In the fixed disallowed set.
    Disallowed,
    /// Reserved by the operating system. The user may force it.
    System,
}

/// Check `shortcut` against the registry: menu first, then the disallowed
/// set, then the system. The first match wins.
pub fn resolve_conflicts<R>(shortcut: &Shortcut, registry: &R) -> Option<Conflict>
where
    R: ConflictRegistry + ?Sized,
{
    if let Some(title) = registry.menu_item_title(shortcut) {
        return Some(Conflict::Menu { title });
    }
    if registry.is_disallowed(shortcut) {
        return Some(Conflict::Disallowed);
    }
    if registry.is_reserved_by_system(shortcut) {
        return Some(Conflict::System);
    }
    None
}
