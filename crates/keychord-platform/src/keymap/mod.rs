//! Shortcut values: native modifier flags, virtual key codes, parsing,
//! display, and the persisted record format.

mod display;
pub mod keycodes;
mod parse;
mod shortcut;
mod types;

pub use display::shortcut_to_display;
pub use parse::parse_shortcut;
pub use shortcut::{Shortcut, ShortcutRecord};
pub use types::ModifierFlags;
