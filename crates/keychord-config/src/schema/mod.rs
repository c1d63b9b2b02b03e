//! Configuration schema types for keychord.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults a stock recorder uses.

mod conflicts;
mod recorder;
mod system;

pub use conflicts::*;
pub use recorder::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for keychord.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeychordConfig {
    pub recorder: RecorderConfig,
    pub conflicts: ConflictsConfig,
    pub menu: MenuConfig,
    pub logging: LoggingConfig,
}
