//! Recorder interaction settings.

use serde::{Deserialize, Serialize};

/// Recorder hit-testing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Extra units around the recorder bounds that still count as a click
    /// inside (valid range: 0.0-50.0).
    pub click_margin: f64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self { click_margin: 3.0 }
    }
}
