use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use keychord_config::KeychordConfig;

use crate::keymap::{keycodes, parse_shortcut, ModifierFlags, Shortcut};

/// Host-owned lookup of shortcuts that are already claimed.
///
/// Queries are synchronous and read-only. A slow implementation blocks the
/// caller; any timeout is the caller's business.
pub trait ConflictRegistry {
    /// Title of the menu item bound to `shortcut`, if any.
    fn menu_item_title(&self, shortcut: &Shortcut) -> Option<String>;

    /// Whether `shortcut` is in the fixed disallowed set.
    fn is_disallowed(&self, shortcut: &Shortcut) -> bool;

    /// Whether the operating system reserves `shortcut`.
    fn is_reserved_by_system(&self, shortcut: &Shortcut) -> bool;
}

/// A [`ConflictRegistry`] backed by in-memory tables.
///
/// Built from [`KeychordConfig`] at startup. Lookups ignore modifier bits
/// that cannot take part in a shortcut.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    menu: HashMap<Shortcut, String>,
    disallowed: HashSet<Shortcut>,
    system_reserved: HashSet<Shortcut>,
    disallow_option_only: bool,
}

impl ShortcutRegistry {
    /// An empty registry: nothing is claimed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the config's conflict and menu sections.
    ///
    /// Uses [`parse_shortcut`] on every entry. Invalid strings are logged as
    /// warnings and skipped.
    pub fn from_config(config: &KeychordConfig) -> Self {
        let mut registry = Self {
            disallow_option_only: config.conflicts.disallow_option_only,
            ..Self::default()
        };

        for item in &config.menu.items {
            match parse_shortcut(&item.shortcut) {
                Ok(shortcut) => registry.bind_menu_item(&item.title, shortcut),
                Err(e) => tracing::warn!(
                    "invalid menu shortcut '{}' for '{}': {e}",
                    item.shortcut,
                    item.title
                ),
            }
        }

        for binding in &config.conflicts.disallowed {
            match parse_shortcut(binding) {
                Ok(shortcut) => registry.disallow(shortcut),
                Err(e) => tracing::warn!("invalid disallowed shortcut '{binding}': {e}"),
            }
        }

        for binding in &config.conflicts.system_reserved {
            match parse_shortcut(binding) {
                Ok(shortcut) => registry.reserve_for_system(shortcut),
                Err(e) => tracing::warn!("invalid system shortcut '{binding}': {e}"),
            }
        }

        tracing::debug!(
            menu = registry.menu.len(),
            disallowed = registry.disallowed.len(),
            system = registry.system_reserved.len(),
            "built shortcut registry"
        );

        registry
    }

    /// Record a menu item's binding. The first title bound to a shortcut
    /// wins; later ones are logged and dropped.
    pub fn bind_menu_item(&mut self, title: &str, shortcut: Shortcut) {
        match self.menu.entry(shortcut.normalized()) {
            Entry::Occupied(existing) => tracing::warn!(
                %shortcut,
                "menu shortcut already bound to '{}', ignoring '{title}'",
                existing.get()
            ),
            Entry::Vacant(slot) => {
                slot.insert(title.to_string());
            }
        }
    }

    pub fn disallow(&mut self, shortcut: Shortcut) {
        self.disallowed.insert(shortcut.normalized());
    }

    pub fn reserve_for_system(&mut self, shortcut: Shortcut) {
        self.system_reserved.insert(shortcut.normalized());
    }

    pub fn set_disallow_option_only(&mut self, enabled: bool) {
        self.disallow_option_only = enabled;
    }

    /// Number of menu bindings.
    pub fn menu_len(&self) -> usize {
        self.menu.len()
    }

    /// Whether the registry claims nothing at all.
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
            && self.disallowed.is_empty()
            && self.system_reserved.is_empty()
            && !self.disallow_option_only
    }
}

/// Option or Option+Shift as the only modifiers of a regular key. macOS
/// no longer registers these because they type characters. F-keys are
/// exempt.
fn is_option_only(shortcut: &Shortcut) -> bool {
    let Some(code) = shortcut.key_code() else {
        return false;
    };
    let mods = shortcut.modifiers().relevant();
    !keycodes::is_function_key(code)
        && (mods == ModifierFlags::OPTION || mods == ModifierFlags::OPTION | ModifierFlags::SHIFT)
}

impl ConflictRegistry for ShortcutRegistry {
    fn menu_item_title(&self, shortcut: &Shortcut) -> Option<String> {
        self.menu.get(&shortcut.normalized()).cloned()
    }

    fn is_disallowed(&self, shortcut: &Shortcut) -> bool {
        self.disallowed.contains(&shortcut.normalized())
            || (self.disallow_option_only && is_option_only(shortcut))
    }

    fn is_reserved_by_system(&self, shortcut: &Shortcut) -> bool {
        self.system_reserved.contains(&shortcut.normalized())
    }
}
