#![no_std]

//! SMTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the sparse entry store, the line-oriented text
//! interchange format, and checked integer arithmetic over sparse
//! matrices. It performs no I/O: the codec consumes and produces
//! in-memory text, and file handling lives in the companion `smtx`
//! crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use smtx_core::{Operation, SparseMatrix};
//!
//! let a = SparseMatrix::from_text("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)")?;
//! let b = SparseMatrix::from_text("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)")?;
//!
//! let sum = Operation::Add.apply(&a, &b)?;
//! assert_eq!(sum.get(0, 0), Ok(4));
//!
//! let text = sum.to_text();
//! assert_eq!(SparseMatrix::from_text(&text)?, sum);
//! # Ok::<(), smtx_core::MatrixError>(())
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;

pub use error::*;
pub use format::*;
pub use matrix::*;
pub use ops::*;
