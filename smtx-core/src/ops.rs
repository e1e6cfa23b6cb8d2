//! Arithmetic over sparse matrices
//!
//! All three operations take their operands by shared reference and
//! return a freshly allocated result; no operand is ever mutated.
//! Accumulation is checked: a sum or product that leaves the `i64` range
//! is reported as [`MatrixError::ArithmeticOverflow`] instead of
//! wrapping.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// The closed set of supported matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Apply the operation to two matrices
    pub fn apply(self, left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
        }
    }

    /// Resolve an interactive selector (`1`/`2`/`3`) or spelled-out name
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" | "add" | "addition" => Some(Operation::Add),
            "2" | "subtract" | "subtraction" => Some(Operation::Subtract),
            "3" | "multiply" | "multiplication" => Some(Operation::Multiply),
            _ => None,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

impl SparseMatrix {
    fn check_same_dimensions(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Accumulate every entry of `other`, scaled by `sign`, into a copy
    /// of `self`. Shared implementation of `add` and `subtract`.
    fn combine(&self, other: &Self, operation: Operation, sign: i64) -> Result<SparseMatrix> {
        self.check_same_dimensions(other, operation)?;

        let mut result = SparseMatrix::new(self.rows(), self.cols());
        for (row, col, value) in self.iter() {
            result.set(row, col, value)?;
        }
        for (row, col, value) in other.iter() {
            let current = result.get(row, col)?;
            let sum = value
                .checked_mul(sign)
                .and_then(|scaled| current.checked_add(scaled))
                .ok_or(MatrixError::ArithmeticOverflow { row, col })?;
            result.set(row, col, sum)?;
        }
        Ok(result)
    }

    /// Entrywise sum; operands must have identical dimensions
    pub fn add(&self, other: &Self) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, 1)
    }

    /// Entrywise difference; operands must have identical dimensions
    pub fn subtract(&self, other: &Self) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, -1)
    }

    /// Matrix product; `self.cols()` must equal `other.rows()`
    ///
    /// Joins the nonzero entries of both operands through the inner
    /// dimension: `other`'s entries are indexed by row once, then every
    /// `(r, k, v)` of `self` is matched against row `k` of `other`.
    /// Entries whose terms cancel to zero are absent from the result.
    pub fn multiply(&self, other: &Self) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let mut right_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (row, col, value) in other.iter() {
            right_rows.entry(row).or_default().push((col, value));
        }

        let mut result = SparseMatrix::new(self.rows(), other.cols());
        for (row, inner, left_value) in self.iter() {
            if let Some(matches) = right_rows.get(&inner) {
                for &(col, right_value) in matches {
                    let term = left_value
                        .checked_mul(right_value)
                        .ok_or(MatrixError::ArithmeticOverflow { row, col })?;
                    let sum = result
                        .get(row, col)?
                        .checked_add(term)
                        .ok_or(MatrixError::ArithmeticOverflow { row, col })?;
                    result.set(row, col, sum)?;
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn sorted_entries(matrix: &SparseMatrix) -> Vec<(usize, usize, i64)> {
        let mut entries: Vec<_> = matrix.iter().collect();
        entries.sort_unstable();
        entries
    }

    #[test]
    fn test_add() {
        let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.dimensions(), (2, 2));
        assert_eq!(sorted_entries(&sum), vec![(0, 0, 4), (0, 1, 4), (1, 1, 2)]);

        // Operands are untouched
        assert_eq!(a.nnz(), 2);
        assert_eq!(b.nnz(), 2);
    }

    #[test]
    fn test_add_identity() {
        let a = SparseMatrix::from_entries(3, 4, vec![(0, 3, 9), (2, 1, -5)]).unwrap();
        let zero = SparseMatrix::new(3, 4);

        assert_eq!(a.add(&zero).unwrap(), a);
        assert_eq!(zero.add(&a).unwrap(), a);
    }

    #[test]
    fn test_add_cancellation_removes_entry() {
        let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 5), (1, 0, 1)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, vec![(0, 0, -5)]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sorted_entries(&sum), vec![(1, 0, 1)]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(3, 2);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left: (2, 3),
                right: (3, 2),
            })
        );
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let a = SparseMatrix::from_entries(3, 3, vec![(0, 0, 7), (1, 2, -3), (2, 2, 11)]).unwrap();
        let difference = a.subtract(&a).unwrap();
        assert_eq!(difference.dimensions(), (3, 3));
        assert_eq!(difference.nnz(), 0);
    }

    #[test]
    fn test_subtract() {
        let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 10), (1, 1, 2)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, vec![(0, 0, 4), (0, 1, 1)]).unwrap();

        let difference = a.subtract(&b).unwrap();
        assert_eq!(
            sorted_entries(&difference),
            vec![(0, 0, 6), (0, 1, -1), (1, 1, 2)]
        );
    }

    #[test]
    fn test_multiply() {
        let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(sorted_entries(&product), vec![(0, 0, 3), (0, 1, 4)]);
    }

    #[test]
    fn test_multiply_rectangular() {
        // | 1 2 |   | 5 |   | 17 |
        // | 3 4 | x | 6 | = | 39 |
        let a =
            SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])
                .unwrap();
        let b = SparseMatrix::from_entries(2, 1, vec![(0, 0, 5), (1, 0, 6)]).unwrap();

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 1));
        assert_eq!(sorted_entries(&product), vec![(0, 0, 17), (1, 0, 39)]);
    }

    #[test]
    fn test_multiply_cancellation_removes_entry() {
        let a = SparseMatrix::from_entries(1, 2, vec![(0, 0, 1), (0, 1, 1)]).unwrap();
        let b = SparseMatrix::from_entries(2, 1, vec![(0, 0, 5), (1, 0, -5)]).unwrap();

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(product.nnz(), 0);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(2, 3);
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_add_overflow_is_reported() {
        let a = SparseMatrix::from_entries(1, 1, vec![(0, 0, i64::MAX)]).unwrap();
        let b = SparseMatrix::from_entries(1, 1, vec![(0, 0, 1)]).unwrap();
        assert_eq!(
            a.add(&b),
            Err(MatrixError::ArithmeticOverflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_multiply_overflow_is_reported() {
        let a = SparseMatrix::from_entries(1, 1, vec![(0, 0, i64::MAX)]).unwrap();
        let b = SparseMatrix::from_entries(1, 1, vec![(0, 0, 2)]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::ArithmeticOverflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_operation_apply_dispatch() {
        let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 2)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, vec![(0, 0, 3)]).unwrap();

        assert_eq!(
            Operation::Add.apply(&a, &b).unwrap().get(0, 0),
            Ok(5)
        );
        assert_eq!(
            Operation::Subtract.apply(&a, &b).unwrap().get(0, 0),
            Ok(-1)
        );
        assert_eq!(
            Operation::Multiply.apply(&a, &b).unwrap().get(0, 0),
            Ok(6)
        );
    }

    #[test]
    fn test_operation_from_selector() {
        assert_eq!(Operation::from_selector("1"), Some(Operation::Add));
        assert_eq!(Operation::from_selector("2"), Some(Operation::Subtract));
        assert_eq!(Operation::from_selector("3"), Some(Operation::Multiply));
        assert_eq!(Operation::from_selector("multiply"), Some(Operation::Multiply));
        assert_eq!(Operation::from_selector(" add "), Some(Operation::Add));
        assert_eq!(Operation::from_selector("4"), None);
        assert_eq!(Operation::from_selector(""), None);
    }
}
