use crate::keymap::{keycodes, ModifierFlags, Shortcut};

use super::event::{CapturedEvent, EventKind, HitTest};
use super::types::{Classification, RecorderState, RejectReason};

/// Classify one captured event.
///
/// Pure: the same event, state and geometry always give the same answer.
/// Special keys (Escape, Tab, Delete) only act as such when no shortcut
/// modifier is held; with modifiers they are ordinary candidates.
///
/// A key code of `0` is overloaded. With modifiers held it is a
/// modifier-only chord; with none it is a rejection.
pub fn classify(event: &CapturedEvent, state: RecorderState, hit_test: &HitTest) -> Classification {
    if state == RecorderState::Idle {
        return Classification::Ignored;
    }

    match event.kind {
        EventKind::PointerUp => match event.location {
            Some(location) if hit_test.contains(location) => Classification::Ignored,
            // Without a location the click cannot be placed inside.
            _ => Classification::Blur,
        },
        EventKind::KeyDown => classify_key_down(event),
    }
}

fn classify_key_down(event: &CapturedEvent) -> Classification {
    let code = event.key_code.unwrap_or(keycodes::NO_KEY);
    let mut modifiers = event.modifiers.relevant();

    // AppKit flags arrows, F-keys and the navigation block as Function keys
    // even when fn is not held.
    if keycodes::implies_function_flag(code) {
        modifiers.remove(ModifierFlags::FUNCTION);
    }

    if modifiers.is_empty() {
        match code {
            keycodes::TAB => return Classification::Blur,
            keycodes::ESCAPE => return Classification::Cancel,
            keycodes::DELETE | keycodes::FORWARD_DELETE => return Classification::ClearRequest,
            keycodes::NO_KEY => return Classification::Rejected(RejectReason::NoKey),
            _ => {}
        }
    }

    if code == keycodes::NO_KEY {
        return match Shortcut::modifier_only(modifiers) {
            Ok(shortcut) => Classification::ModifierOnlyCandidate(shortcut),
            Err(_) => Classification::Rejected(RejectReason::NoKey),
        };
    }

    match Shortcut::new(Some(code), modifiers) {
        Ok(shortcut) => Classification::RegularCandidate(shortcut),
        Err(e) => {
            tracing::debug!("rejecting key code {code}: {e}");
            Classification::Rejected(RejectReason::Undecodable)
        }
    }
}
