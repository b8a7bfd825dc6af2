//! Report building: aggregates decoded records for display and export
//!
//! Pure consumer of scanner output; nothing here feeds back into decoding.

use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::{
    FieldStats, Level, Record, ReportConfig, ReportError, ScanOutcome, ScanReport,
    SignalQualitySummary, Summary, TimedRecord,
};

/// Builds reports from scan outcomes
#[derive(Debug, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Create new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder with explicit settings
    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Bundle an outcome into a report
    pub fn build(&self, source: &str, outcome: &ScanOutcome) -> ScanReport {
        ScanReport {
            generated_at: chrono::Utc::now(),
            source: source.to_string(),
            stats: outcome.stats,
            reason: outcome.reason,
            summary: summarize(&outcome.records, &self.config),
            timeline: timeline(&outcome.records, self.config.sample_rate_hz),
            config: self.config,
        }
    }
}

/// Aggregate statistics; None for an empty sequence
pub fn summarize(records: &[Record], config: &ReportConfig) -> Option<Summary> {
    if records.is_empty() {
        return None;
    }

    let attention = FieldStats::from_values(records.iter().filter_map(|r| r.attention));
    let meditation = FieldStats::from_values(records.iter().filter_map(|r| r.meditation));

    let attention_level = attention.map(|s| Level::from_mean(s.mean, config));
    let meditation_level = meditation.map(|s| Level::from_mean(s.mean, config));
    let relaxed_focus = attention_level == Some(Level::High) && meditation_level == Some(Level::High);

    Some(Summary {
        record_count: records.len(),
        attention,
        meditation,
        signal_quality: SignalQualitySummary::from_records(records),
        attention_level,
        meditation_level,
        relaxed_focus,
    })
}

/// Place records at fixed intervals: record n sits at n / sample_rate_hz seconds
pub fn timeline(records: &[Record], sample_rate_hz: f64) -> Vec<TimedRecord> {
    records
        .iter()
        .enumerate()
        .map(|(n, record)| TimedRecord {
            time_secs: n as f64 / sample_rate_hz,
            record: *record,
        })
        .collect()
}

/// Save report as pretty JSON, creating parent directories
pub fn save_report(report: &ScanReport, path: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    }
    std::fs::write(path, json).map_err(|e| ReportError::io(path, e))?;

    info!(path = %path.display(), records = report.timeline.len(), "report saved");
    Ok(path.to_path_buf())
}

/// Load a report saved with [`save_report`]
pub fn load_report(path: impl AsRef<Path>) -> Result<ScanReport, ReportError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

// =============================================================================
// TESTS
// =============================================================================
