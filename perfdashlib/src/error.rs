//! Error types for perfdashlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading report data or rendering tables
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The series filter is not a valid regular expression
    #[error("invalid series filter '{pattern}': {message}")]
    InvalidSeriesFilter { pattern: String, message: String },

    /// Failed to read a report data file
    #[error("failed to read report '{path}': {source}")]
    ReportRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Report data is not valid JSON or does not match the expected shape
    #[error("failed to parse report data: {0}")]
    ReportParse(#[from] serde_json::Error),
}
