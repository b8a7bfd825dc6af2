//! Aggregate statistics over decoded records

use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::{Level, Record};

/// Statistics for one optional field, over the records that carry it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Records carrying the field
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: u8,
    /// Largest value
    pub max: u8,
}

impl FieldStats {
    /// Compute over the present values; None when there are none
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut count = 0usize;
        let mut sum = 0u64;
        let mut min = u8::MAX;
        let mut max = u8::MIN;

        for v in values {
            count += 1;
            sum += u64::from(v);
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            mean: sum as f64 / count as f64,
            min,
            max,
        })
    }
}

/// Poor-contact breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalQualitySummary {
    /// Records carrying a signal quality reading
    pub readings: usize,
    /// Records whose reading is in the poor-contact set
    pub poor_count: usize,
    /// Share of all records not flagged poor (0-100)
    pub good_percent: f64,
}

impl SignalQualitySummary {
    /// Summarize against the whole record sequence.
    ///
    /// Records without a reading count as good; None when no record has one.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let readings = records.iter().filter(|r| r.signal_quality.is_some()).count();
        if readings == 0 {
            return None;
        }

        let poor_count = records.iter().filter(|r| r.has_poor_signal()).count();
        let poor_percent = poor_count as f64 / records.len() as f64 * 100.0;

        Some(Self {
            readings,
            poor_count,
            good_percent: 100.0 - poor_percent,
        })
    }
}

/// Summary of a decoded session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total records
    pub record_count: usize,
    /// Attention statistics
    pub attention: Option<FieldStats>,
    /// Meditation statistics
    pub meditation: Option<FieldStats>,
    /// Contact quality
    pub signal_quality: Option<SignalQualitySummary>,
    /// Bucket of the mean attention
    pub attention_level: Option<Level>,
    /// Bucket of the mean meditation
    pub meditation_level: Option<Level>,
    /// Both attention and meditation High
    pub relaxed_focus: bool,
}

impl Summary {
    /// Human-readable reading of the levels
    pub fn interpretation(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if let Some(level) = self.attention_level {
            notes.push(level.attention_note());
        }
        if let Some(level) = self.meditation_level {
            notes.push(level.meditation_note());
        }
        if self.relaxed_focus {
            notes.push("Attention and meditation were both high: a relaxed but focused state.");
        }
        notes
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let mut lines = vec![format!(
            "{} {}",
            "Records decoded:".bold(),
            self.record_count.to_string().green()
        )];

        if let Some(stats) = &self.attention {
            lines.push(format!(
                "  attention   avg={} min={} max={} {}",
                format!("{:.2}", stats.mean).bold(),
                stats.min,
                stats.max,
                level_tag(self.attention_level)
            ));
        }
        if let Some(stats) = &self.meditation {
            lines.push(format!(
                "  meditation  avg={} min={} max={} {}",
                format!("{:.2}", stats.mean).bold(),
                stats.min,
                stats.max,
                level_tag(self.meditation_level)
            ));
        }
        if let Some(quality) = &self.signal_quality {
            let pct = format!("{:.1}% good", quality.good_percent);
            let pct = if quality.poor_count == 0 { pct.green() } else { pct.yellow() };
            lines.push(format!(
                "  quality     {} ({} poor of {} records)",
                pct, quality.poor_count, self.record_count
            ));
        }
        for note in self.interpretation() {
            lines.push(format!("  {} {}", "»".dimmed(), note));
        }

        lines.join("\n")
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let mut parts = vec![format!("records={}", self.record_count)];
        if let Some(stats) = &self.attention {
            parts.push(format!("attention_avg={:.2}", stats.mean));
        }
        if let Some(stats) = &self.meditation {
            parts.push(format!("meditation_avg={:.2}", stats.mean));
        }
        if let Some(quality) = &self.signal_quality {
            parts.push(format!("quality_good={:.1}%", quality.good_percent));
        }
        if let Some(level) = self.attention_level {
            parts.push(format!("attention_level={}", level));
        }
        if let Some(level) = self.meditation_level {
            parts.push(format!("meditation_level={}", level));
        }
        parts.join(" | ")
    }
}

fn level_tag(level: Option<Level>) -> String {
    match level {
        Some(level) => format!("[{}]", level).color(level.color()).to_string(),
        None => String::new(),
    }
}

/// Record placed on the synthetic timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedRecord {
    /// Seconds since the first record
    pub time_secs: f64,
    /// The record itself
    #[serde(flatten)]
    pub record: Record,
}
