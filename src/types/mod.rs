//! Core types for eegscan

mod record;
mod reason;
mod outcome;
mod config;
mod level;
mod summary;
mod report;
mod error;

pub use record::{Record, is_poor_signal};
pub use reason::ScanReason;
pub use outcome::{ScanOutcome, ScanStats};
pub use config::ReportConfig;
pub use level::Level;
pub use summary::{Summary, FieldStats, SignalQualitySummary, TimedRecord};
pub use report::ScanReport;
pub use error::ReportError;
