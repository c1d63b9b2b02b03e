use keychord_common::ShortcutError;

use super::keycodes::{key_code_for_name, NO_KEY};
use super::shortcut::Shortcut;
use super::types::ModifierFlags;

/// Parses a human-readable shortcut like `"Cmd+Shift+K"`, `"Option+Period"`
/// or a modifier-only chord like `"Fn"` / `"Ctrl+Option"` into a [`Shortcut`].
///
/// Modifier names (case-insensitive):
/// - `"Cmd"` / `"Command"` / `"Super"` / `"Meta"` -> Command
/// - `"Ctrl"` / `"Control"` -> Control
/// - `"Opt"` / `"Option"` / `"Alt"` -> Option
/// - `"Shift"` -> Shift
/// - `"Fn"` / `"Function"` / `"Globe"` -> Function
///
/// The last token is the key unless it is itself a modifier, in which case
/// the result is modifier-only.
pub fn parse_shortcut(s: &str) -> Result<Shortcut, ShortcutError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(ShortcutError::EmptyBinding);
    }

    let mut modifiers = ModifierFlags::empty();
    let mut key: Option<u16> = None;

    for (i, token) in tokens.iter().enumerate() {
        let is_last = i == tokens.len() - 1;

        match normalize_modifier(token) {
            Some(modifier) => modifiers |= modifier,
            None if is_last => key = Some(resolve_key(token)?),
            None => return Err(ShortcutError::UnknownModifier((*token).to_string())),
        }
    }

    Shortcut::new(key, modifiers)
}

pub(super) fn normalize_modifier(token: &str) -> Option<ModifierFlags> {
    match token.to_lowercase().as_str() {
        "cmd" | "command" | "super" | "meta" => Some(ModifierFlags::COMMAND),
        "ctrl" | "control" => Some(ModifierFlags::CONTROL),
        "opt" | "option" | "alt" => Some(ModifierFlags::OPTION),
        "shift" => Some(ModifierFlags::SHIFT),
        "fn" | "function" | "globe" => Some(ModifierFlags::FUNCTION),
        _ => None,
    }
}

fn resolve_key(token: &str) -> Result<u16, ShortcutError> {
    match key_code_for_name(token) {
        // The A key shares code 0 with "no key" and cannot be bound.
        Some(NO_KEY) | None => Err(ShortcutError::UnknownKey(token.to_string())),
        Some(code) => Ok(code),
    }
}
