use std::fmt;

use super::keycodes::{self, key_name};
use super::shortcut::Shortcut;
use super::types::ModifierFlags;

/// `(flag, macOS symbol, text name)` in macOS menu order.
const MODIFIER_LABELS: [(ModifierFlags, &str, &str); 5] = [
    (ModifierFlags::CONTROL, "\u{2303}", "Ctrl"),   // ⌃
    (ModifierFlags::OPTION, "\u{2325}", "Option"),  // ⌥
    (ModifierFlags::SHIFT, "\u{21E7}", "Shift"),    // ⇧
    (ModifierFlags::COMMAND, "\u{2318}", "Cmd"),    // ⌘
    (ModifierFlags::FUNCTION, "fn", "Fn"),
];

/// Converts a [`Shortcut`] into a platform-appropriate display string.
///
/// On macOS, modifiers and special keys are displayed as symbols (`⌃⌥⇧⌘`).
/// On other platforms they are spelled out and joined with `+`, in a form
/// [`parse_shortcut`](super::parse_shortcut) accepts back.
pub fn shortcut_to_display(shortcut: &Shortcut) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (flag, symbol, text) in MODIFIER_LABELS {
        if shortcut.modifiers().contains(flag) {
            let label = if cfg!(target_os = "macos") { symbol } else { text };
            parts.push(label.to_string());
        }
    }

    if let Some(code) = shortcut.key_code() {
        parts.push(display_key(code));
    }

    join_display_parts(&parts)
}

fn display_key(code: u16) -> String {
    let name = key_name(code).map(str::to_string).unwrap_or_else(|| format!("<{code:#04x}>"));
    if !cfg!(target_os = "macos") {
        return name;
    }

    match code {
        keycodes::RETURN => "\u{21A9}".into(),         // ↩
        keycodes::DELETE => "\u{232B}".into(),         // ⌫
        keycodes::FORWARD_DELETE => "\u{2326}".into(), // ⌦
        keycodes::ESCAPE => "\u{238B}".into(),         // ⎋
        keycodes::TAB => "\u{21E5}".into(),            // ⇥
        keycodes::SPACE => "\u{2423}".into(),          // ␣
        keycodes::UP_ARROW => "\u{2191}".into(),       // ↑
        keycodes::DOWN_ARROW => "\u{2193}".into(),     // ↓
        keycodes::LEFT_ARROW => "\u{2190}".into(),     // ←
        keycodes::RIGHT_ARROW => "\u{2192}".into(),    // →
        _ => name,
    }
}

fn join_display_parts(parts: &[String]) -> String {
    if cfg!(target_os = "macos") {
        parts.join("")
    } else {
        parts.join("+")
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shortcut_to_display(self))
    }
}
