//! SMTX - Sparse Matrix Text Interchange
//!
//! This library reads, combines, and writes integer sparse matrices in a
//! line-oriented text format.
//!
//! ## Architecture
//!
//! SMTX follows a clean specification/implementation separation:
//!
//! - **smtx-core**: Entry store, text codec, and checked arithmetic (no I/O)
//! - **smtx**: File source/sink and runnable tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{read_matrix, write_matrix, Operation};
//!
//! fn example() -> smtx::Result<()> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     println!("{} x {}, {} nonzeros", product.rows(), product.cols(), product.nnz());
//!
//!     write_matrix("result_multiplication.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export the core surface so applications depend on one crate
pub use smtx_core::{
    // Entry store
    Entries, SparseMatrix,
    // Text format
    TextHeader, COLS_PREFIX, ROWS_PREFIX,
    // Arithmetic
    Operation,
    // Error handling
    MatrixError,
};

pub mod error;
pub mod file_io;

pub use error::{Result, SmtxError};
pub use file_io::{read_matrix, write_matrix};
