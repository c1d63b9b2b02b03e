use crate::input::Conflict;
use crate::keymap::Shortcut;

use super::types::OverrideChoice;

/// Host UI for conflict notices (modal alerts in a desktop app).
///
/// The recorder is blurred while either method runs and re-focused after,
/// unless the user forces a system shortcut.
pub trait ConflictPrompt {
    /// Dismiss-only notice for a menu or disallowed conflict.
    fn notify_conflict(&mut self, shortcut: &Shortcut, conflict: &Conflict);

    /// Two-option notice for a system-reserved shortcut.
    fn confirm_system_override(&mut self, shortcut: &Shortcut) -> OverrideChoice;
}

/// A prompt that answers every system conflict the same way and shows
/// nothing. For headless hosts and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt {
    pub choice: OverrideChoice,
}

impl FixedPrompt {
    pub fn new(choice: OverrideChoice) -> Self {
        Self { choice }
    }
}

impl Default for FixedPrompt {
    fn default() -> Self {
        Self::new(OverrideChoice::KeepDefault)
    }
}

impl ConflictPrompt for FixedPrompt {
    fn notify_conflict(&mut self, shortcut: &Shortcut, conflict: &Conflict) {
        tracing::debug!(%shortcut, ?conflict, "conflict notice");
    }

    fn confirm_system_override(&mut self, _shortcut: &Shortcut) -> OverrideChoice {
        self.choice
    }
}
