//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur while writing events to CSV.
#[derive(Error, Debug)]
pub enum CsvPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Payload serialization error.
    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Errors that can occur while reading events back from CSV.
#[derive(Error, Debug)]
pub enum CsvReadError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row field failed to parse.
    #[error("Row {row}: failed to parse '{column}': {message}")]
    Parse {
        row: usize,
        column: &'static str,
        message: String,
    },
}
