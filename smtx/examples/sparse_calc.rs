//! Command-line calculator over matrix text files
//!
//! Plays the role of the interactive prompt layer: it resolves the
//! operation selector and the two input paths, then hands everything to
//! the library.

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use smtx::{read_matrix, write_matrix, Operation};

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMTX calculator - add, subtract, or multiply two sparse matrix text files")]
struct Cli {
    /// Operation selector: 1/add, 2/subtract, 3/multiply
    operation: String,

    /// Path to the first matrix file
    first: PathBuf,

    /// Path to the second matrix file
    second: PathBuf,

    /// Output path (defaults to result_<operation>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let operation = Operation::from_selector(&cli.operation)
        .ok_or("invalid operation: expected 1/2/3 or add/subtract/multiply")?;

    println!("Loading first matrix from {}...", cli.first.display());
    let first = read_matrix(&cli.first)?;
    println!(
        "Loaded {}x{} matrix with {} nonzeros",
        first.rows(),
        first.cols(),
        first.nnz()
    );

    println!("Loading second matrix from {}...", cli.second.display());
    let second = read_matrix(&cli.second)?;
    println!(
        "Loaded {}x{} matrix with {} nonzeros",
        second.rows(),
        second.cols(),
        second.nnz()
    );

    println!("Performing {operation}...");
    let result = operation.apply(&first, &second)?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("result_{operation}.txt")));
    write_matrix(&output, &result)?;

    println!(
        "Result ({}x{}, {} nonzeros) written to {}",
        result.rows(),
        result.cols(),
        result.nnz(),
        output.display()
    );

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example sparse_calc");
    std::process::exit(1);
}
