//! Reason codes for scan outcomes

use serde::{Deserialize, Serialize};

/// Why a scan ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ScanReason {
    // =========================================================================
    // R101: Scan results
    // =========================================================================
    /// At least one record decoded
    R101_RECORDS_DECODED,
    /// Input scanned completely, nothing decoded
    R102_NO_DATA_DECODED,
}

impl ScanReason {
    /// Pick the reason for a finished scan
    pub fn for_record_count(count: usize) -> Self {
        if count == 0 {
            Self::R102_NO_DATA_DECODED
        } else {
            Self::R101_RECORDS_DECODED
        }
    }

    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R101_RECORDS_DECODED => "R101_RECORDS_DECODED",
            Self::R102_NO_DATA_DECODED => "R102_NO_DATA_DECODED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R101_RECORDS_DECODED => "Records decoded",
            Self::R102_NO_DATA_DECODED => "No data decoded",
        }
    }
}

impl std::fmt::Display for ScanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
