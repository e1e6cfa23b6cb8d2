//! Simple example to build a sparse matrix and write it as text

use smtx::SparseMatrix;

fn main() -> smtx::Result<()> {
    let rows = 1_000;
    let cols = 1_000;

    println!("Building a {rows}x{cols} demo matrix...");

    // A diagonal band plus a few scattered entries
    let mut matrix = SparseMatrix::new(rows, cols);
    for i in 0..rows.min(cols) {
        matrix.set(i, i, i as i64 + 1)?;
    }
    matrix.set(0, cols - 1, -7)?;
    matrix.set(rows - 1, 0, 42)?;
    matrix.set(500, 250, 1_000_000)?;

    println!(
        "Matrix has {} nonzeros ({:.4}% density)",
        matrix.nnz(),
        (matrix.nnz() as f64 / (rows * cols) as f64) * 100.0
    );

    let filename = "example_matrix.txt";
    smtx::write_matrix(filename, &matrix)?;
    println!("Matrix written to '{filename}'");
    println!("Run 'cargo run --example read_matrix' to read it back!");

    Ok(())
}
