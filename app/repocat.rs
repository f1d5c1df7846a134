//! Command-line interface for repocat.
//!
//! Walks a repository, refuses to clobber an existing output file, and writes
//! the tree-plus-contents document in one shot.

use clap::Parser;
use repocat::{RepocatBuilder, RepocatError, output, repocat};
use std::path::PathBuf;
use std::process::exit;

/// repocat — flatten a repository into a single document
#[derive(Parser)]
#[command(name = "repocat", version, about, long_about = None)]
struct Cli {
    /// Root directory of the repository (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "output.txt")]
    out: PathBuf,

    /// Comma-separated list of paths to exclude
    #[arg(short, long, default_value = ".git")]
    exclude: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!(
        "Directory structure and file contents have been written to {}",
        cli.out.display()
    );
}

fn run(cli: &Cli) -> Result<(), RepocatError> {
    output::ensure_absent(&cli.out)?;

    let exclude: Vec<String> = cli
        .exclude
        .split(',')
        .map(|entry| entry.trim().to_string())
        .collect();

    let options = RepocatBuilder::new(&cli.root).exclude(exclude).build();
    let snapshot = repocat(options)?;
    output::write_document(&cli.out, &snapshot)
}
