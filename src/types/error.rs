//! I/O boundary errors. The scanner itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading input or writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// File read or write failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Report could not be encoded or decoded
    #[error("Report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
