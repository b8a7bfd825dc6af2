//! Full scan report, as printed with --json and saved with --output

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{ReportConfig, ScanReason, ScanStats, Summary, TimedRecord};

/// Everything known about one scanned input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Input label (file path or "stdin")
    pub source: String,
    /// Scan counters
    pub stats: ScanStats,
    /// Outcome reason
    pub reason: ScanReason,
    /// Aggregate statistics, None when nothing was decoded
    pub summary: Option<Summary>,
    /// Records on the synthetic timeline
    pub timeline: Vec<TimedRecord>,
    /// Settings used to build the report
    pub config: ReportConfig,
}

impl ScanReport {
    /// True when nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}
