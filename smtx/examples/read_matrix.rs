//! Simple example to read a sparse matrix from a text file

use smtx::read_matrix;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "example_matrix.txt";

    // Check if file exists
    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix = read_matrix(filename)?;
    let load_time = start.elapsed();
    println!("Decoded in {:.3}ms", load_time.as_secs_f64() * 1000.0);

    println!("\nMatrix Information:");
    println!("   Dimensions: {} x {}", matrix.rows(), matrix.cols());
    println!("   Non-zeros: {}", matrix.nnz());
    println!(
        "   Sparsity: {:.6}%",
        (1.0 - matrix.nnz() as f64 / (matrix.rows() * matrix.cols()) as f64) * 100.0
    );

    println!("\nTesting element access:");
    for (row, col) in [(0, 0), (500, 250), (500, 251), (999, 0)] {
        if row < matrix.rows() && col < matrix.cols() {
            println!("   matrix[{row}, {col}] = {}", matrix.get(row, col)?);
        }
    }

    let probe_row = 0;
    let entries = matrix.row_entries(probe_row)?;
    println!("\nRow {probe_row} has {} nonzero entries:", entries.len());
    for (col, value) in entries.iter().take(10) {
        println!("   [{col}] = {value}");
    }

    Ok(())
}
