//! Error types for CSV data operations.

use frontier_matrix::MatrixError;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while reading or writing return matrices.
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV layer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field could not be parsed as a 64-bit float.
    #[error("row {row}: cannot parse field {field} ({value:?}) as a number")]
    Parse {
        /// 1-based row number in the file
        row: usize,
        /// 0-based field index within the row
        field: usize,
        /// Offending field text
        value: String,
    },

    /// A row's field count differs from the first row's.
    #[error("row {row}: expected {expected} fields, found {actual}")]
    RaggedRow {
        /// 1-based row number in the file
        row: usize,
        /// Field count of the first row
        expected: usize,
        /// Field count of the offending row
        actual: usize,
    },

    /// The file holds no data rows.
    #[error("no data rows in input")]
    Empty,

    /// Underlying matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
