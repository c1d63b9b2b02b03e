use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Carbon HIToolbox modifier masks (`Events.h`).
const CARBON_CMD_KEY: u32 = 1 << 8;
const CARBON_SHIFT_KEY: u32 = 1 << 9;
const CARBON_OPTION_KEY: u32 = 1 << 11;
const CARBON_CONTROL_KEY: u32 = 1 << 12;

bitflags! {
    /// Modifier flags in AppKit's native `NSEvent.ModifierFlags` layout.
    ///
    /// Bits outside the named flags are kept as-is so a persisted mask
    /// survives a decode/encode cycle unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u64 {
        const CAPS_LOCK = 1 << 16;
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
        const NUMERIC_PAD = 1 << 21;
        const HELP = 1 << 22;
        const FUNCTION = 1 << 23;
    }
}

impl ModifierFlags {
    /// The modifiers that can take part in a shortcut.
    pub const SHORTCUT_MASK: ModifierFlags = ModifierFlags::COMMAND
        .union(ModifierFlags::CONTROL)
        .union(ModifierFlags::OPTION)
        .union(ModifierFlags::SHIFT)
        .union(ModifierFlags::FUNCTION);

    /// Strip caps lock, numeric pad, help and device-dependent bits.
    pub fn relevant(self) -> ModifierFlags {
        self.intersection(Self::SHORTCUT_MASK)
    }

    /// Whether any shortcut modifier is held.
    pub fn has_shortcut_modifier(self) -> bool {
        !self.relevant().is_empty()
    }

    /// Convert to a Carbon modifier mask. Function has no Carbon
    /// equivalent and is dropped.
    pub fn to_carbon(self) -> u32 {
        let mut carbon = 0;
        if self.contains(ModifierFlags::COMMAND) {
            carbon |= CARBON_CMD_KEY;
        }
        if self.contains(ModifierFlags::SHIFT) {
            carbon |= CARBON_SHIFT_KEY;
        }
        if self.contains(ModifierFlags::OPTION) {
            carbon |= CARBON_OPTION_KEY;
        }
        if self.contains(ModifierFlags::CONTROL) {
            carbon |= CARBON_CONTROL_KEY;
        }
        carbon
    }

    /// Build from a Carbon modifier mask. Unknown Carbon bits are ignored.
    pub fn from_carbon(carbon: u32) -> ModifierFlags {
        let mut flags = ModifierFlags::empty();
        if carbon & CARBON_CMD_KEY != 0 {
            flags |= ModifierFlags::COMMAND;
        }
        if carbon & CARBON_SHIFT_KEY != 0 {
            flags |= ModifierFlags::SHIFT;
        }
        if carbon & CARBON_OPTION_KEY != 0 {
            flags |= ModifierFlags::OPTION;
        }
        if carbon & CARBON_CONTROL_KEY != 0 {
            flags |= ModifierFlags::CONTROL;
        }
        flags
    }
}

// Persisted as the raw integer mask, never as flag names.
impl Serialize for ModifierFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModifierFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(ModifierFlags::from_bits_retain)
    }
}
