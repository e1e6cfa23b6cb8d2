//! Times the three arithmetic operations on random sparse operands

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smtx::{Operation, SparseMatrix};
use std::time::Instant;

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, target_nnz: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    while matrix.nnz() < target_nnz {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value = rng.gen_range(1..=1_000i64);
        matrix.set(row, col, value).unwrap();
    }
    matrix
}

fn main() {
    let size = 1_000;
    let nnz = 20_000;

    println!("Operands: two {size}x{size} matrices with {nnz} nonzeros each");

    let data_start = Instant::now();
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng, size, size, nnz);
    let b = random_matrix(&mut rng, size, size, nnz);
    println!(
        "Data generation: {:.3}s",
        data_start.elapsed().as_secs_f64()
    );

    for operation in [Operation::Add, Operation::Subtract, Operation::Multiply] {
        let start = Instant::now();
        let result = operation.apply(&a, &b).expect("operands are compatible");
        let duration = start.elapsed();
        println!(
            "{operation}: {:.3}ms, result has {} nonzeros",
            duration.as_secs_f64() * 1000.0,
            result.nnz()
        );
    }

    let codec_start = Instant::now();
    let text = a.to_text();
    let decoded = SparseMatrix::from_text(&text).expect("encoded matrix decodes");
    println!(
        "encode+decode round trip: {:.3}ms ({} bytes, {} nonzeros)",
        codec_start.elapsed().as_secs_f64() * 1000.0,
        text.len(),
        decoded.nnz()
    );
}
