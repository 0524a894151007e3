//! Bucket types and ASCII table formatting for histogram output
//!
//! This module renders the trimmed histogram for human consumption:
//! - [`BucketEntry`] type for representing bucket data with range, count, and percentage
//! - ASCII table formatting using the [`tabled`] crate

use crate::common::Histogram;
use tabled::{Table, Tabled};

/// Represents a single bucket with its size range, count, and percentage
#[derive(Debug, Clone, Tabled)]
pub struct BucketEntry {
    /// Inclusive size range covered by the bucket (e.g. "0-4")
    #[tabled(rename = "Subtree size")]
    pub range: String,
    /// Number of data points in this bucket
    #[tabled(rename = "Count")]
    pub count: u64,
    /// Percentage of total data points in this bucket
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BucketEntry {
    /// Creates a new bucket entry with formatted percentage
    pub fn new(range: String, count: u64, total: u64) -> Self {
        let percentage = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            range,
            count,
            percentage,
        }
    }
}

/// Builds one table row per retained histogram bucket
///
/// Range labels are inclusive: bucket `i` of a width-5 histogram covers
/// `"0-4"`, `"5-9"`, and so on. Percentages are relative to the displayed
/// counts, which include the +1 offset applied after trimming.
pub fn histogram_entries(histogram: &Histogram) -> Vec<BucketEntry> {
    let total: u64 = histogram.counts().iter().sum();
    let width = histogram.width();

    histogram
        .counts()
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let low = index as u32 * width;
            let high = low + width - 1;
            BucketEntry::new(format!("{}-{}", low, high), count, total)
        })
        .collect()
}

/// Formats bucket entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `buckets` - A slice of [`BucketEntry`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`], or a placeholder message when no
/// bucket survived trimming
pub fn format_bucket_table(buckets: &[BucketEntry], title: Option<&str>) -> String {
    if buckets.is_empty() {
        return "No records matched the requested depth".to_string();
    }

    let table = Table::new(buckets).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
