//! Error types for SMTX operations

use alloc::string::String;

use crate::ops::Operation;

/// Errors that can occur while decoding, building, or combining matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// One of the two header lines does not match `rows=<n>` / `cols=<n>`
    MalformedHeader {
        /// 1-indexed line number of the offending line
        line: usize,
        /// Raw content of the offending line
        content: String,
    },
    /// An entry line does not match `(<row>, <col>, <value>)`
    MalformedEntry {
        /// 1-indexed line number of the offending line
        line: usize,
        /// Raw content of the offending line
        content: String,
    },
    /// A coordinate lies outside the declared matrix dimensions
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand dimensions do not satisfy the operation's compatibility rule
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An accumulated value cannot be represented as an `i64`
    ArithmeticOverflow { row: usize, col: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::MalformedHeader { line, content } => {
                write!(
                    f,
                    "invalid header at line {line}: expected 'rows=<n>' or 'cols=<n>', got {content:?}"
                )
            }
            MatrixError::MalformedEntry { line, content } => {
                write!(
                    f,
                    "invalid entry at line {line}: expected '(row, col, value)', got {content:?}"
                )
            }
            MatrixError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "entry ({row}, {col}) outside matrix bounds {rows}x{cols}")
            }
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "matrix dimensions {}x{} and {}x{} are incompatible for {operation}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::ArithmeticOverflow { row, col } => {
                write!(f, "value overflow while accumulating entry ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for SMTX operations
pub type Result<T> = core::result::Result<T, MatrixError>;
