//! Decoded measurement record

use serde::{Deserialize, Serialize};
use crate::POOR_SIGNAL_VALUES;

/// One decoded packet. Absent fields were not observed in that packet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Attention score (nominally 0-100, not clamped)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attention: Option<u8>,
    /// Meditation / relaxation score (nominally 0-100, not clamped)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub meditation: Option<u8>,
    /// Contact quality, 0 = best
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signal_quality: Option<u8>,
}

impl Record {
    /// True when no field was observed
    pub fn is_empty(&self) -> bool {
        self.attention.is_none() && self.meditation.is_none() && self.signal_quality.is_none()
    }

    /// True when the signal quality reading is one of the poor-contact values
    pub fn has_poor_signal(&self) -> bool {
        self.signal_quality
            .map(is_poor_signal)
            .unwrap_or(false)
    }

    /// Compact one-line form, e.g. `attention=80 meditation=- signal=0`
    pub fn to_parseable_string(&self) -> String {
        format!(
            "attention={} meditation={} signal={}",
            display_field(self.attention),
            display_field(self.meditation),
            display_field(self.signal_quality),
        )
    }
}

/// Check a raw signal quality byte against the poor-contact set
pub fn is_poor_signal(value: u8) -> bool {
    POOR_SIGNAL_VALUES.contains(&value)
}

fn display_field(value: Option<u8>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
