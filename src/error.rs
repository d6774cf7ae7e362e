use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report run.
///
/// Only dataset-shape problems live here. A row with a blank or unparseable
/// optional field is not an error anywhere in the pipeline; it is classified
/// `open` and counted like any other row.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file lacks a column the pipeline cannot work without.
    #[error("input file has no '{0}' column; aggregation cannot proceed without it")]
    MissingColumn(&'static str),

    /// The input file has no header row at all.
    #[error("input file {0} has no header row")]
    NoHeader(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
