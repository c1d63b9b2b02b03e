use keychord_common::{DecodeError, ShortcutError};
use serde::{Deserialize, Serialize};

use super::keycodes::{MAX_KEY_CODE, NO_KEY};
use super::types::ModifierFlags;

/// A recorded key combination.
///
/// Either a primary key with any modifiers, or no primary key with at least
/// one shortcut modifier (a modifier-only shortcut). A value with neither
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ShortcutRecord", into = "ShortcutRecord")]
pub struct Shortcut {
    key_code: Option<u16>,
    modifiers: ModifierFlags,
}

/// Persisted form of a [`Shortcut`].
///
/// `keyCode` is omitted for modifier-only shortcuts. `modifiers` is the raw
/// native mask; unknown bits are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<u32>,
    pub modifiers: ModifierFlags,
}

impl Shortcut {
    /// Build a shortcut. A key code of `0` means "no key".
    pub fn new(key_code: Option<u16>, modifiers: ModifierFlags) -> Result<Self, ShortcutError> {
        let key_code = key_code.filter(|&code| code != NO_KEY);

        match key_code {
            Some(code) if code > MAX_KEY_CODE => {
                Err(ShortcutError::KeyCodeOutOfRange(u32::from(code)))
            }
            None if !modifiers.has_shortcut_modifier() => Err(ShortcutError::Empty),
            _ => Ok(Self {
                key_code,
                modifiers,
            }),
        }
    }

    /// A shortcut made only of modifiers.
    pub fn modifier_only(modifiers: ModifierFlags) -> Result<Self, ShortcutError> {
        Self::new(None, modifiers)
    }

    pub fn key_code(&self) -> Option<u16> {
        self.key_code
    }

    pub fn modifiers(&self) -> ModifierFlags {
        self.modifiers
    }

    pub fn is_modifier_only(&self) -> bool {
        self.key_code.is_none()
    }

    /// The same shortcut with non-shortcut modifier bits removed. Used for
    /// registry lookups so a persisted mask with extra bits still matches.
    pub fn normalized(&self) -> Self {
        Self {
            key_code: self.key_code,
            modifiers: self.modifiers.relevant(),
        }
    }

    /// Parse a human-readable shortcut such as `"Cmd+Shift+K"` or `"Fn"`.
    pub fn parse(s: &str) -> Result<Self, ShortcutError> {
        super::parse::parse_shortcut(s)
    }

    /// Decode a persisted JSON record.
    pub fn decode(json: &str) -> Result<Self, DecodeError> {
        let record: ShortcutRecord = serde_json::from_str(json)?;
        Ok(Self::try_from(record)?)
    }

    /// Encode to the persisted JSON record.
    pub fn encode(&self) -> String {
        // A struct of an optional integer and an integer always serializes.
        serde_json::to_string(&ShortcutRecord::from(*self)).unwrap_or_default()
    }

    /// Decode a persisted record, treating anything unreadable as "no
    /// shortcut bound".
    pub fn load_persisted(json: &str) -> Option<Self> {
        match Self::decode(json) {
            Ok(shortcut) => Some(shortcut),
            Err(e) => {
                tracing::warn!("discarding persisted shortcut: {e}");
                None
            }
        }
    }
}

impl std::str::FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<ShortcutRecord> for Shortcut {
    type Error = ShortcutError;

    fn try_from(record: ShortcutRecord) -> Result<Self, Self::Error> {
        let key_code = match record.key_code {
            Some(code) => Some(
                u16::try_from(code).map_err(|_| ShortcutError::KeyCodeOutOfRange(code))?,
            ),
            None => None,
        };
        Shortcut::new(key_code, record.modifiers)
    }
}

impl From<Shortcut> for ShortcutRecord {
    fn from(shortcut: Shortcut) -> Self {
        Self {
            key_code: shortcut.key_code.map(u32::from),
            modifiers: shortcut.modifiers,
        }
    }
}
