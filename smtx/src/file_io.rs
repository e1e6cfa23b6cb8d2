//! File source/sink for the matrix text format
//!
//! Files are consumed and produced as whole text blobs; decoding and
//! encoding stay in `smtx-core`. I/O failures surface as
//! [`SmtxError::SourceUnavailable`] carrying the offending path.

use std::fs;
use std::path::Path;

use smtx_core::SparseMatrix;

use crate::error::{Result, SmtxError};

/// Read and decode a matrix from a text file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SmtxError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SparseMatrix::from_text(&text)?)
}

/// Encode a matrix and write it to a text file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|source| SmtxError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
