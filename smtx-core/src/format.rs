//! Text format encode/decode for sparse matrices
//!
//! The interchange format is line oriented:
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! (<row>, <col>, <value>)
//! ```
//!
//! Whitespace around the numbers inside parentheses is tolerated and
//! blank lines between entries are skipped. Any other line is rejected;
//! a malformed line is never silently dropped.

use alloc::string::String;
use core::fmt::Write as _;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// Prefix of the first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line
pub const COLS_PREFIX: &str = "cols=";

/// Parsed form of the two-line text header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHeader {
    /// Declared number of rows
    pub rows: usize,
    /// Declared number of columns
    pub cols: usize,
}

impl TextHeader {
    /// Parse the header from the first two lines of `text`
    ///
    /// Line 1 must match `rows=<n>` and line 2 `cols=<n>`; anything else
    /// fails with [`MatrixError::MalformedHeader`] naming the offending
    /// line. The declared dimensions are authoritative: entries never
    /// resize a decoded matrix.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let rows = parse_dimension(lines.next(), ROWS_PREFIX, 1)?;
        let cols = parse_dimension(lines.next(), COLS_PREFIX, 2)?;
        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for TextHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_PREFIX}{}\n{COLS_PREFIX}{}", self.rows, self.cols)
    }
}

fn parse_dimension(line: Option<&str>, prefix: &str, line_no: usize) -> Result<usize> {
    let raw = line.unwrap_or("");
    raw.trim()
        .strip_prefix(prefix)
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or_else(|| MatrixError::MalformedHeader {
            line: line_no,
            content: String::from(raw),
        })
}

fn malformed_entry(line_no: usize, raw: &str) -> MatrixError {
    MatrixError::MalformedEntry {
        line: line_no,
        content: String::from(raw),
    }
}

/// Parse one `(<row>, <col>, <value>)` line
fn parse_entry(line: &str, raw: &str, line_no: usize) -> Result<(usize, usize, i64)> {
    let body = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| malformed_entry(line_no, raw))?;

    let mut fields = body.split(',');
    let row = fields
        .next()
        .and_then(|field| field.trim().parse::<usize>().ok())
        .ok_or_else(|| malformed_entry(line_no, raw))?;
    let col = fields
        .next()
        .and_then(|field| field.trim().parse::<usize>().ok())
        .ok_or_else(|| malformed_entry(line_no, raw))?;
    let value = fields
        .next()
        .and_then(|field| field.trim().parse::<i64>().ok())
        .ok_or_else(|| malformed_entry(line_no, raw))?;
    if fields.next().is_some() {
        return Err(malformed_entry(line_no, raw));
    }

    Ok((row, col, value))
}

impl SparseMatrix {
    /// Decode a matrix from its text representation
    ///
    /// Every entry is applied through [`SparseMatrix::set`], so an entry
    /// whose coordinates exceed the declared dimensions aborts the whole
    /// parse with [`MatrixError::OutOfBounds`] — a partial matrix is
    /// never returned.
    pub fn from_text(text: &str) -> Result<Self> {
        let header = TextHeader::parse(text)?;
        let mut matrix = SparseMatrix::new(header.rows, header.cols);

        for (index, raw) in text.lines().enumerate().skip(2) {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (row, col, value) = parse_entry(line, raw, index + 1)?;
            matrix.set(row, col, value)?;
        }

        Ok(matrix)
    }

    /// Encode the matrix into its text representation
    ///
    /// Entry order is unspecified but consistent within the pass, so
    /// re-decoding reproduces an equivalent matrix. The output carries no
    /// trailing newline.
    pub fn to_text(&self) -> String {
        let header = TextHeader {
            rows: self.rows(),
            cols: self.cols(),
        };

        let mut out = String::new();
        let _ = write!(out, "{header}");
        for (row, col, value) in self.iter() {
            let _ = write!(out, "\n({row}, {col}, {value})");
        }
        out
    }
}
