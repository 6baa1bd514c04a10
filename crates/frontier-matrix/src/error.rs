//! Error types for matrix operations.

use thiserror::Error;

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur during matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Element count does not match the declared shape.
    #[error("{len} elements cannot fill a {rows}x{cols} matrix")]
    ShapeMismatch {
        /// Number of elements supplied
        len: usize,
        /// Declared number of rows
        rows: usize,
        /// Declared number of columns
        cols: usize,
    },

    /// Operand shapes are incompatible for the attempted operation.
    #[error("incompatible shapes: {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Left operand rows
        lhs_rows: usize,
        /// Left operand columns
        lhs_cols: usize,
        /// Right operand rows
        rhs_rows: usize,
        /// Right operand columns
        rhs_cols: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },
}
