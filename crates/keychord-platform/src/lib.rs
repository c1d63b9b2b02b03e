pub mod classifier;
pub mod input;
pub mod keymap;
pub mod recorder;

pub use classifier::{classify, CapturedEvent, Classification, HitTest, RecorderState, RejectReason};
pub use input::{resolve_conflicts, Conflict, ConflictRegistry, ShortcutRegistry};
pub use keymap::{parse_shortcut, shortcut_to_display, ModifierFlags, Shortcut, ShortcutRecord};
pub use recorder::{ClassificationResult, ConflictPrompt, FixedPrompt, OverrideChoice, Recorder};
