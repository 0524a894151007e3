mod analysis;
mod common;
mod parsing;

use argh::FromArgs;
use std::path::PathBuf;
use thiserror::Error;

// Import analysis functions
use analysis::generate_subtree_size_analysis;

// Import parsing functionality
use parsing::parse_records;

/// Analyzer for subtree-size distributions at a single tree depth
#[derive(FromArgs, Debug)]
pub struct Args {
    /// path to the record file, one `<depth> <size>` pair per line
    #[argh(positional)]
    input: PathBuf,

    /// tree depth whose subtree sizes should be analyzed
    #[argh(positional)]
    target_depth: u32,
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Subtree size analysis error: {0}")]
    SubtreeSize(#[from] analysis::subtree_size::SubtreeSizeError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    // Parse command line arguments
    let args: Args = argh::from_env();

    // Check if input file exists
    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    // Parse the record file
    let records = parse_records(&args.input)?;

    // Generate the depth-filtered histogram, stdout dump, and scatter plot
    let output_dir = PathBuf::from(".");
    let plot_path = generate_subtree_size_analysis(&records, args.target_depth, &output_dir)?;

    println!();
    println!("Plot saved to: {}", plot_path.display());

    Ok(())
}
