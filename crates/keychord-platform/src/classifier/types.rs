use serde::Serialize;

use crate::keymap::Shortcut;

/// Focus state of a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
}

/// Why a key-down was refused. The host should beep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No primary key and no modifiers.
    NoKey,
    /// The key code could not form a shortcut.
    Undecodable,
}

/// What a single captured event means to a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not for the recorder; let it pass through.
    Ignored,
    /// Escape with no modifiers: stop recording without a shortcut.
    Cancel,
    /// Tab with no modifiers, or a click outside: stop recording.
    Blur,
    /// Delete/Backspace/Forward-Delete with no modifiers: erase the binding.
    ClearRequest,
    Rejected(RejectReason),
    /// Only modifiers were held.
    ModifierOnlyCandidate(Shortcut),
    RegularCandidate(Shortcut),
}

impl Classification {
    /// The candidate shortcut, for either candidate variant.
    pub fn candidate(&self) -> Option<&Shortcut> {
        match self {
            Classification::ModifierOnlyCandidate(s) | Classification::RegularCandidate(s) => {
                Some(s)
            }
            _ => None,
        }
    }
}
