//! Conflict registry: which shortcuts are already claimed by the host's
//! menus, a disallowed list, or the operating system.

mod conflict;
mod registry;

pub use conflict::{resolve_conflicts, Conflict};
pub use registry::{ConflictRegistry, ShortcutRegistry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{parse_shortcut, ModifierFlags, Shortcut};
    use keychord_config::schema::MenuItemConfig;
    use keychord_config::KeychordConfig;

    fn sc(s: &str) -> Shortcut {
        parse_shortcut(s).unwrap()
    }

    fn config_with_menu() -> KeychordConfig {
        let mut config = KeychordConfig::default();
        config.menu.items = vec![
            MenuItemConfig {
                title: "Quit".into(),
                shortcut: "Cmd+Q".into(),
            },
            MenuItemConfig {
                title: "Broken".into(),
                shortcut: "Cmd+Nope".into(),
            },
        ];
        config.conflicts.disallowed = vec!["Cmd+Q".into(), "Ctrl+K".into(), "Bad+K".into()];
        config
    }

    #[test]
    fn registry_from_config_skips_invalid_entries() {
        let registry = ShortcutRegistry::from_config(&config_with_menu());
        assert_eq!(registry.menu_len(), 1);
        assert!(registry.is_disallowed(&sc("Ctrl+K")));
    }

    #[test]
    fn first_menu_binding_wins() {
        let mut registry = ShortcutRegistry::new();
        registry.bind_menu_item("Quit", sc("Cmd+Shift+Q"));
        registry.bind_menu_item("Log Out", sc("Shift+Command+Q"));
        assert_eq!(registry.menu_len(), 1);
        assert_eq!(
            registry.menu_item_title(&sc("Cmd+Shift+Q")),
            Some("Quit".into())
        );
    }

    #[test]
    fn menu_lookup() {
        let registry = ShortcutRegistry::from_config(&config_with_menu());
        assert_eq!(registry.menu_item_title(&sc("Cmd+Q")), Some("Quit".into()));
        assert_eq!(registry.menu_item_title(&sc("Cmd+W")), None);
    }

    #[test]
    fn lookup_ignores_extra_modifier_bits() {
        let registry = ShortcutRegistry::from_config(&config_with_menu());
        let with_caps = Shortcut::new(
            sc("Cmd+Q").key_code(),
            ModifierFlags::COMMAND | ModifierFlags::CAPS_LOCK,
        )
        .unwrap();
        assert_eq!(registry.menu_item_title(&with_caps), Some("Quit".into()));
    }

    #[test]
    fn default_config_reserves_system_shortcuts() {
        let registry = ShortcutRegistry::from_config(&KeychordConfig::default());
        assert!(registry.is_reserved_by_system(&sc("Cmd+Tab")));
        assert!(registry.is_reserved_by_system(&sc("Cmd+Space")));
        assert!(!registry.is_reserved_by_system(&sc("Cmd+K")));
    }

    #[test]
    fn option_only_rule() {
        let registry = ShortcutRegistry::from_config(&KeychordConfig::default());
        assert!(registry.is_disallowed(&sc("Option+K")));
        assert!(registry.is_disallowed(&sc("Option+Shift+K")));
        assert!(!registry.is_disallowed(&sc("Option+Cmd+K")));
        assert!(!registry.is_disallowed(&sc("Option+F5")));
        // Modifier-only chords are never caught by the Option rule.
        assert!(!registry.is_disallowed(&sc("Option")));
    }

    #[test]
    fn option_only_rule_can_be_disabled() {
        let mut registry = ShortcutRegistry::new();
        assert!(registry.is_empty());
        registry.set_disallow_option_only(true);
        assert!(registry.is_disallowed(&sc("Option+K")));
        registry.set_disallow_option_only(false);
        assert!(!registry.is_disallowed(&sc("Option+K")));
    }

    #[test]
    fn menu_conflict_wins_over_disallowed() {
        let registry = ShortcutRegistry::from_config(&config_with_menu());
        assert!(registry.is_disallowed(&sc("Cmd+Q")));
        assert_eq!(
            resolve_conflicts(&sc("Cmd+Q"), &registry),
            Some(Conflict::Menu {
                title: "Quit".into()
            })
        );
    }

    #[test]
    fn disallowed_wins_over_system() {
        let mut registry = ShortcutRegistry::new();
        registry.disallow(sc("Cmd+Space"));
        registry.reserve_for_system(sc("Cmd+Space"));
        assert_eq!(
            resolve_conflicts(&sc("Cmd+Space"), &registry),
            Some(Conflict::Disallowed)
        );
    }

    #[test]
    fn system_conflict() {
        let registry = ShortcutRegistry::from_config(&KeychordConfig::default());
        assert_eq!(
            resolve_conflicts(&sc("Cmd+Tab"), &registry),
            Some(Conflict::System)
        );
    }

    #[test]
    fn no_conflict() {
        let registry = ShortcutRegistry::from_config(&KeychordConfig::default());
        assert_eq!(resolve_conflicts(&sc("Ctrl+Option+Cmd+K"), &registry), None);
        assert_eq!(resolve_conflicts(&sc("Fn"), &registry), None);
    }

    #[test]
    fn modifier_only_menu_binding() {
        let mut registry = ShortcutRegistry::new();
        registry.bind_menu_item("Dictation", sc("Fn"));
        assert_eq!(
            resolve_conflicts(&sc("Fn"), &registry),
            Some(Conflict::Menu {
                title: "Dictation".into()
            })
        );
    }
}
