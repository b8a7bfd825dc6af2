//! Scan outcome and counters

use serde::{Deserialize, Serialize};
use crate::types::{Record, ScanReason};

/// Counters gathered while scanning. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Lines seen in the input
    pub lines_total: usize,
    /// Lines dropped for having fewer than 10 tokens
    pub lines_short: usize,
    /// Tokens across all lines that passed the threshold
    pub tokens_total: usize,
    /// Offsets where the sync marker was found
    pub sync_candidates: usize,
    /// Sync offsets that produced no record
    pub candidates_rejected: usize,
    /// Records emitted
    pub records: usize,
}

impl ScanStats {
    /// Fold another line's counters into this one
    pub fn absorb(&mut self, other: &ScanStats) {
        self.lines_total += other.lines_total;
        self.lines_short += other.lines_short;
        self.tokens_total += other.tokens_total;
        self.sync_candidates += other.sync_candidates;
        self.candidates_rejected += other.candidates_rejected;
        self.records += other.records;
    }
}

/// Result of scanning a whole text blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Records in discovery order
    pub records: Vec<Record>,
    /// Scan counters
    pub stats: ScanStats,
    /// Outcome reason
    pub reason: ScanReason,
}

impl ScanOutcome {
    /// Build an outcome, deriving the reason from the record count
    pub fn new(records: Vec<Record>, stats: ScanStats) -> Self {
        let reason = ScanReason::for_record_count(records.len());
        Self { records, stats, reason }
    }

    /// True when nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
