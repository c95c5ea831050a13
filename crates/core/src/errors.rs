//! Error types for the supplycast core crate

use thiserror::Error;

/// Errors that can occur while loading, aggregating, encoding, or
/// predicting.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Order date was missing or could not be parsed
    #[error("row {row}: invalid order date '{value}'")]
    InvalidDate { row: usize, value: String },

    /// No order records to aggregate
    #[error("dataset is empty: no order records to aggregate")]
    EmptyDataset,

    /// Value was not part of the encoding vocabulary
    #[error("value '{0}' is not in the encoding vocabulary")]
    UnknownValue(String),

    /// Code is outside the range produced by the encoding table
    #[error("code {0} is out of range for the encoding table")]
    UnknownCode(i64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
