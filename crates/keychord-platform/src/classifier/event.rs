use keychord_common::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::keymap::{keycodes, ModifierFlags};

/// Default extra units around the recorder that still count as inside.
pub const DEFAULT_CLICK_MARGIN: f64 = 3.0;

/// Kind of a captured input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    KeyDown,
    /// Left or right mouse button released.
    PointerUp,
}

/// One raw input event as delivered by the host's local event monitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedEvent {
    pub kind: EventKind,
    /// Virtual key code. Absent and `0` both mean "no primary key".
    #[serde(default)]
    pub key_code: Option<u16>,
    /// Raw modifier flags, including bits that never form shortcuts.
    #[serde(default)]
    pub modifiers: ModifierFlags,
    /// Pointer location in recorder-local coordinates.
    #[serde(default)]
    pub location: Option<Point>,
}

impl CapturedEvent {
    pub fn key_down(key_code: u16, modifiers: ModifierFlags) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key_code: Some(key_code),
            modifiers,
            location: None,
        }
    }

    /// A key-down carrying only modifiers.
    pub fn modifiers_only(modifiers: ModifierFlags) -> Self {
        Self::key_down(keycodes::NO_KEY, modifiers)
    }

    pub fn escape() -> Self {
        Self::key_down(keycodes::ESCAPE, ModifierFlags::empty())
    }

    pub fn tab() -> Self {
        Self::key_down(keycodes::TAB, ModifierFlags::empty())
    }

    /// Backspace (`kVK_Delete`).
    pub fn delete() -> Self {
        Self::key_down(keycodes::DELETE, ModifierFlags::empty())
    }

    pub fn forward_delete() -> Self {
        Self::key_down(keycodes::FORWARD_DELETE, ModifierFlags::empty())
    }

    pub fn pointer_up(location: Point) -> Self {
        Self {
            kind: EventKind::PointerUp,
            key_code: None,
            modifiers: ModifierFlags::empty(),
            location: Some(location),
        }
    }
}

/// Recorder geometry used to decide whether a click landed outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTest {
    pub bounds: Rect,
    pub margin: f64,
}

impl HitTest {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            margin: DEFAULT_CLICK_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Whether `location` lies inside the bounds grown by the margin.
    pub fn contains(&self, location: Point) -> bool {
        self.bounds.outset(self.margin).contains(location)
    }
}
