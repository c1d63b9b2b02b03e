//! Event classification: decides whether a captured event cancels, blurs,
//! clears, is rejected, or yields a candidate shortcut.
//!
//! The [`classify`] function sits between the host's event monitor and the
//! [`Recorder`](crate::recorder::Recorder). It holds no state and does no
//! I/O; conflict checks happen afterwards, against a registry.

mod classify;
mod event;
mod types;

pub use classify::classify;
pub use event::{CapturedEvent, EventKind, HitTest, DEFAULT_CLICK_MARGIN};
pub use types::{Classification, RecorderState, RejectReason};
