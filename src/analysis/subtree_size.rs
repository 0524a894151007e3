//! Subtree-size distribution analysis functionality
//!
//! This module filters records to a single tree depth, accumulates the
//! fixed-width size histogram, dumps the trimmed and offset histogram to
//! stdout, and generates the log-log scatter plot.

use super::constants::{BUCKET_WIDTH, MAX_BUCKETS};
use crate::common::buckets::{format_bucket_table, histogram_entries};
use crate::common::histogram::CapacityError;
use crate::common::plots::{create_scatter_plot, scatter_series};
use crate::common::{Histogram, PlotError};
use crate::parsing::Record;
use std::path::{Path, PathBuf};

/// Errors that can occur during subtree-size analysis
#[derive(Debug)]
pub enum SubtreeSizeError {
    Histogram(CapacityError),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for SubtreeSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubtreeSizeError::Histogram(e) => write!(f, "Histogram accumulation failed: {}", e),
            SubtreeSizeError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for SubtreeSizeError {}

impl From<CapacityError> for SubtreeSizeError {
    fn from(err: CapacityError) -> Self {
        SubtreeSizeError::Histogram(err)
    }
}

impl From<PlotError> for SubtreeSizeError {
    fn from(err: PlotError) -> Self {
        SubtreeSizeError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, SubtreeSizeError>;

/// Generate the complete subtree-size analysis for one depth
///
/// Filters `records` to those at `target_depth`, accumulates the fixed-width
/// histogram, removes the trailing empty buckets, adds 1 to every remaining
/// count, prints the resulting distribution table and a short summary to
/// stdout, and writes the log-log scatter plot PNG into `output_dir`.
///
/// A depth that matches no record yields the empty-table message and a blank
/// plot; it is not an error.
///
/// # Arguments
/// * `records` - All parsed `(depth, size)` records
/// * `target_depth` - The single depth to retain
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written plot file
/// * `Err(SubtreeSizeError)` - If accumulation overflowed the bucket range
///   or plot generation failed
pub fn generate_subtree_size_analysis(
    records: &[Record],
    target_depth: u32,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mut histogram = accumulate_histogram(records, target_depth)?;
    let retained: u64 = histogram.counts().iter().sum();

    histogram.trim();
    histogram.offset();

    // Dump the trimmed, offset histogram before plotting
    let table_title = format!("Subtree Size Distribution (Depth {})", target_depth);
    let entries = histogram_entries(&histogram);
    println!("{}", format_bucket_table(&entries, Some(&table_title)));

    let summary = format!(
        "Summary\n{}\nRecords at depth {}: {}\nRetained buckets: {}",
        "=".repeat(7),
        target_depth,
        retained,
        histogram.len()
    );
    println!("\n{}", summary);

    let series = scatter_series(histogram.counts(), BUCKET_WIDTH);
    let output_path = output_dir.join(format!("subtree-sizes-depth-{}.png", target_depth));
    create_scatter_plot(&series, &format!("Depth {}", target_depth), &output_path)?;

    Ok(output_path)
}

/// Accumulates the fixed-width histogram over records at `target_depth`
///
/// Records at any other depth never touch a bucket.
fn accumulate_histogram(records: &[Record], target_depth: u32) -> Result<Histogram> {
    let mut histogram = Histogram::new(BUCKET_WIDTH, MAX_BUCKETS);

    for record in records {
        if record.depth == target_depth {
            histogram.record(record.size)?;
        }
    }

    Ok(histogram)
}
