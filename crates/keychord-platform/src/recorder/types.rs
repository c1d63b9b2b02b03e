use serde::Serialize;

use crate::classifier::RejectReason;
use crate::keymap::Shortcut;

/// The user's answer when a shortcut is reserved by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideChoice {
    /// Leave the system behavior alone; the shortcut is not recorded.
    KeepDefault,
    /// Record the shortcut anyway.
    ForceOverride,
}

/// Outcome of processing one event, reported to `on_classified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassificationResult {
    Ignored,
    Cancel,
    Blur,
    ClearRequest,
    Rejected {
        reason: RejectReason,
    },
    ConflictMenu {
        shortcut: Shortcut,
        title: String,
    },
    ConflictDisallowed {
        shortcut: Shortcut,
    },
    /// Reserved by the system and the user kept the default behavior.
    ConflictSystem {
        shortcut: Shortcut,
    },
    Committed {
        shortcut: Shortcut,
        /// The shortcut was reserved by the system and the user forced it.
        overrode_system: bool,
    },
}

impl ClassificationResult {
    /// The committed shortcut, if this result is a commit.
    pub fn committed(&self) -> Option<&Shortcut> {
        match self {
            ClassificationResult::Committed { shortcut, .. } => Some(shortcut),
            _ => None,
        }
    }

    /// Whether the host should give audible feedback.
    pub fn should_beep(&self) -> bool {
        matches!(self, ClassificationResult::Rejected { .. })
    }
}
