//! macOS virtual key codes (`kVK_*` from Carbon `Events.h`) and their names.
//!
//! Codes are layout-independent positions on an ANSI keyboard. Code `0`
//! (`kVK_ANSI_A`) doubles as "no key" in captured events, so the A key
//! can never be a primary key.

/// "No primary key" in a captured event.
pub const NO_KEY: u16 = 0x00;
/// Highest virtual key code a keyboard produces.
pub const MAX_KEY_CODE: u16 = 0x7F;

pub const RETURN: u16 = 0x24;
pub const TAB: u16 = 0x30;
pub const SPACE: u16 = 0x31;
/// Backspace.
pub const DELETE: u16 = 0x33;
pub const ESCAPE: u16 = 0x35;
pub const HELP: u16 = 0x72;
pub const HOME: u16 = 0x73;
pub const PAGE_UP: u16 = 0x74;
pub const FORWARD_DELETE: u16 = 0x75;
pub const END: u16 = 0x77;
pub const PAGE_DOWN: u16 = 0x79;
pub const LEFT_ARROW: u16 = 0x7B;
pub const RIGHT_ARROW: u16 = 0x7C;
pub const DOWN_ARROW: u16 = 0x7D;
pub const UP_ARROW: u16 = 0x7E;

const FUNCTION_KEYS: [u16; 20] = [
    0x7A, 0x78, 0x63, 0x76, 0x60, 0x61, 0x62, 0x64, 0x65, 0x6D, // F1-F10
    0x67, 0x6F, 0x69, 0x6B, 0x71, 0x6A, 0x40, 0x4F, 0x50, 0x5A, // F11-F20
];

/// Canonical key names, indexed by lookup rather than position.
const KEY_NAMES: &[(u16, &str)] = &[
    (0x00, "A"),
    (0x01, "S"),
    (0x02, "D"),
    (0x03, "F"),
    (0x04, "H"),
    (0x05, "G"),
    (0x06, "Z"),
    (0x07, "X"),
    (0x08, "C"),
    (0x09, "V"),
    (0x0B, "B"),
    (0x0C, "Q"),
    (0x0D, "W"),
    (0x0E, "E"),
    (0x0F, "R"),
    (0x10, "Y"),
    (0x11, "T"),
    (0x12, "1"),
    (0x13, "2"),
    (0x14, "3"),
    (0x15, "4"),
    (0x16, "6"),
    (0x17, "5"),
    (0x18, "="),
    (0x19, "9"),
    (0x1A, "7"),
    (0x1B, "-"),
    (0x1C, "8"),
    (0x1D, "0"),
    (0x1E, "]"),
    (0x1F, "O"),
    (0x20, "U"),
    (0x21, "["),
    (0x22, "I"),
    (0x23, "P"),
    (RETURN, "Enter"),
    (0x25, "L"),
    (0x26, "J"),
    (0x27, "'"),
    (0x28, "K"),
    (0x29, ";"),
    (0x2A, "\\"),
    (0x2B, ","),
    (0x2C, "/"),
    (0x2D, "N"),
    (0x2E, "M"),
    (0x2F, "."),
    (TAB, "Tab"),
    (SPACE, "Space"),
    (0x32, "`"),
    (DELETE, "Backspace"),
    (ESCAPE, "Escape"),
    (0x41, "Keypad."),
    (0x43, "Keypad*"),
    (0x45, "KeypadPlus"),
    (0x47, "Clear"),
    (0x4B, "Keypad/"),
    (0x4C, "KeypadEnter"),
    (0x4E, "Keypad-"),
    (0x51, "Keypad="),
    (0x52, "Keypad0"),
    (0x53, "Keypad1"),
    (0x54, "Keypad2"),
    (0x55, "Keypad3"),
    (0x56, "Keypad4"),
    (0x57, "Keypad5"),
    (0x58, "Keypad6"),
    (0x59, "Keypad7"),
    (0x5B, "Keypad8"),
    (0x5C, "Keypad9"),
    (0x7A, "F1"),
    (0x78, "F2"),
    (0x63, "F3"),
    (0x76, "F4"),
    (0x60, "F5"),
    (0x61, "F6"),
    (0x62, "F7"),
    (0x64, "F8"),
    (0x65, "F9"),
    (0x6D, "F10"),
    (0x67, "F11"),
    (0x6F, "F12"),
    (0x69, "F13"),
    (0x6B, "F14"),
    (0x71, "F15"),
    (0x6A, "F16"),
    (0x40, "F17"),
    (0x4F, "F18"),
    (0x50, "F19"),
    (0x5A, "F20"),
    (HELP, "Help"),
    (HOME, "Home"),
    (PAGE_UP, "PageUp"),
    (FORWARD_DELETE, "Delete"),
    (END, "End"),
    (PAGE_DOWN, "PageDown"),
    (LEFT_ARROW, "Left"),
    (RIGHT_ARROW, "Right"),
    (DOWN_ARROW, "Down"),
    (UP_ARROW, "Up"),
];

/// Canonical name of a key code, if it has one.
pub fn key_name(code: u16) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Resolve a key name (case-insensitive, common aliases accepted).
pub fn key_code_for_name(name: &str) -> Option<u16> {
    let lower = name.trim().to_lowercase();
    let canonical = match lower.as_str() {
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "backslash" => "\\",
        "semicolon" => ";",
        "quote" => "'",
        "grave" | "backtick" => "`",
        "minus" => "-",
        "equal" | "equals" => "=",
        "leftbracket" => "[",
        "rightbracket" => "]",
        "enter" | "return" => "enter",
        "keypad+" => "keypadplus",
        "escape" | "esc" => "escape",
        "backspace" => "backspace",
        "delete" | "del" | "forwarddelete" => "delete",
        "up" | "uparrow" => "up",
        "down" | "downarrow" => "down",
        "left" | "leftarrow" => "left",
        "right" | "rightarrow" => "right",
        other => other,
    };

    KEY_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(canonical))
        .map(|(code, _)| *code)
}

/// F1 through F20.
pub fn is_function_key(code: u16) -> bool {
    FUNCTION_KEYS.contains(&code)
}

/// Keys for which AppKit sets the Function flag on its own, whether or
/// not the fn key is held.
pub fn implies_function_flag(code: u16) -> bool {
    is_function_key(code)
        || matches!(
            code,
            HELP | HOME
                | PAGE_UP
                | FORWARD_DELETE
                | END
                | PAGE_DOWN
                | LEFT_ARROW
                | RIGHT_ARROW
                | DOWN_ARROW
                | UP_ARROW
        )
}
