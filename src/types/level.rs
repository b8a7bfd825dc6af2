//! Score level buckets

use colored::Color;
use serde::{Deserialize, Serialize};
use crate::types::ReportConfig;

/// Bucket for a mean attention or meditation score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    /// Mean below the low threshold
    Low,
    /// Between the thresholds (inclusive)
    Moderate,
    /// Mean above the high threshold
    High,
}

impl Level {
    /// Classify a mean score. Both thresholds are strict.
    pub fn from_mean(mean: f64, config: &ReportConfig) -> Self {
        if mean > config.high_threshold {
            Level::High
        } else if mean < config.low_threshold {
            Level::Low
        } else {
            Level::Moderate
        }
    }

    /// Terminal color for this level
    pub fn color(&self) -> Color {
        match self {
            Level::Low => Color::Yellow,
            Level::Moderate => Color::Cyan,
            Level::High => Color::Green,
        }
    }

    /// Reading of an attention level
    pub fn attention_note(&self) -> &'static str {
        match self {
            Level::High => "Attention was high; focus held well during the recording.",
            Level::Moderate => "Attention was moderate.",
            Level::Low => "Attention was low; the wearer was relaxed or distracted.",
        }
    }

    /// Reading of a meditation level
    pub fn meditation_note(&self) -> &'static str {
        match self {
            Level::High => "Meditation was high; the wearer stayed relaxed.",
            Level::Moderate => "Meditation was moderate.",
            Level::Low => "Meditation was low; the wearer was tense or alert.",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Low => "LOW",
            Level::Moderate => "MODERATE",
            Level::High => "HIGH",
        };
        write!(f, "{}", name)
    }
}
