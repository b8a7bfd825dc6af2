//! Report configuration

use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::{DEFAULT_SAMPLE_RATE_HZ, LEVEL_HIGH_THRESHOLD, LEVEL_LOW_THRESHOLD};

/// Settings for the aggregation step. The scanner itself takes none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Assumed record rate for the synthetic timeline (Hz)
    pub sample_rate_hz: f64,
    /// Mean strictly above this is High
    pub high_threshold: f64,
    /// Mean strictly below this is Low
    pub low_threshold: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            high_threshold: LEVEL_HIGH_THRESHOLD,
            low_threshold: LEVEL_LOW_THRESHOLD,
        }
    }
}

impl ReportConfig {
    /// Override the sample rate, falling back to the default for non-positive values
    pub fn with_sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate_hz = if hz.is_finite() && hz > 0.0 {
            hz
        } else {
            warn!(requested = hz, fallback = DEFAULT_SAMPLE_RATE_HZ, "invalid sample rate");
            DEFAULT_SAMPLE_RATE_HZ
        };
        self
    }
}
