mod stats;

use argh::FromArgs;
use stats::{compute_tree_statistics, parse_edges};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

/// Per-node depth and subtree-size generator for tree edge lists
#[derive(FromArgs, Debug)]
pub struct Args {
    /// input edge-list file (stdin when omitted)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Args = argh::from_env();

    let edges = match &args.input {
        Some(path) => {
            if !path.exists() {
                return Err("Input file does not exist".into());
            }
            parse_edges(BufReader::new(File::open(path)?))?
        }
        None => parse_edges(io::stdin().lock())?,
    };

    let statistics = compute_tree_statistics(&edges);

    // One "<depth> <subtree size>" line per node, in node-id order
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (depth, size) in statistics.depths.iter().zip(&statistics.subtree_sizes) {
        writeln!(out, "{} {}", depth, size)?;
    }

    Ok(())
}
