//! Plotting infrastructure for subtree-size frequency charts
//!
//! This module provides functionality to create log-log scatter charts
//! using the [`plotters`] crate. Charts are saved as PNG files with fixed
//! 1200x800 resolution.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Builds the log-log scatter series for a trimmed, offset histogram
///
/// Point `i`, with `i` starting at 1, is `(ln(width * i), ln(counts[i - 1]))`:
/// the x-coordinate is the upper bucket boundary and the y-coordinate the
/// adjusted frequency, both in natural logarithm. The index starts at 1 so
/// the first boundary is `width` rather than 0, keeping the logarithm
/// finite. Counts must already carry the +1 offset, so every count is
/// strictly positive.
///
/// # Arguments
/// * `counts` - Trimmed, offset per-bucket counts
/// * `width` - The histogram bucket width
///
/// # Returns
/// One `(x, y)` point per bucket, index-aligned with `counts`
pub fn scatter_series(counts: &[u64], width: u32) -> Vec<(f64, f64)> {
    counts
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let boundary = (width as f64) * ((index + 1) as f64);
            (boundary.ln(), (count as f64).ln())
        })
        .collect()
}

/// Creates a scatter chart of log bucket boundary versus log frequency
///
/// # Arguments
/// * `series` - Log-scaled `(x, y)` points from [`scatter_series`]
/// * `title` - Chart title displayed at the top of the plot
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * Both axes carry already-log-scaled values with "(log)" labels
/// * Grid: Enabled for better readability
/// * Mark style: Filled circles, one per retained bucket
///
/// # Headless Compatibility
/// This function is designed to work in headless environments (Docker/CI) by
/// using plotters' bitmap backend with default font rendering. It avoids
/// system font dependencies that might not be available in containerized
/// environments.
///
/// # Empty Series
/// An empty series is not an error: the chart is rendered over a fallback
/// unit axis range with no marks, so a depth that matched no record still
/// produces a (blank) plot.
pub fn create_scatter_plot(
    series: &[(f64, f64)],
    title: &str,
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_min, x_max) = axis_range(series.iter().map(|(x, _)| *x));
    let (y_min, y_max) = axis_range(series.iter().map(|(_, y)| *y));

    // Build the chart context with proper label areas
    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Subtree size (log)")
        .x_label_style(("sans-serif", 35))
        .y_desc("Frequency (log)")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Draw the scatter marks
    chart_context
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Padded `(min, max)` axis range over the values; unit range when empty
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = (max - min).max(1.0);
    let pad = span * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scatter_series_values() {
        // Trimmed, offset counts from the worked example: {0: 2, 1: 3}
        let series = scatter_series(&[2, 3], 5);

        assert_eq!(series.len(), 2);
        assert!((series[0].0 - 5.0_f64.ln()).abs() < 1e-12);
        assert!((series[0].1 - 2.0_f64.ln()).abs() < 1e-12);
        assert!((series[1].0 - 10.0_f64.ln()).abs() < 1e-12);
        assert!((series[1].1 - 3.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_scatter_series_length_matches_counts() {
        let counts: Vec<u64> = (1..=37).collect();
        let series = scatter_series(&counts, 5);

        assert_eq!(series.len(), counts.len());
    }

    #[test]
    fn test_scatter_series_empty() {
        let series = scatter_series(&[], 5);
        assert!(series.is_empty());
    }

    #[test]
    fn test_scatter_series_offset_count_of_one_is_finite() {
        // A bucket that was empty before the offset has count 1 → ln(1) = 0
        let series = scatter_series(&[1], 5);
        assert_eq!(series[0].1, 0.0);
        assert!(series[0].0.is_finite());
    }

    #[test]
    fn test_axis_range_pads_values() {
        let (min, max) = axis_range([1.0, 3.0, 2.0].into_iter());
        assert!(min < 1.0);
        assert!(max > 3.0);
    }

    #[test]
    fn test_axis_range_single_value() {
        let (min, max) = axis_range([2.0].into_iter());
        assert!(min < max);
        assert!(min <= 2.0 && 2.0 <= max);
    }

    #[test]
    fn test_axis_range_empty_falls_back_to_unit() {
        let (min, max) = axis_range(std::iter::empty());
        assert_eq!((min, max), (0.0, 1.0));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_scatter_plot_success() {
        let output_path = std::env::temp_dir().join("test_scatter_plot.png");
        let _ = fs::remove_file(&output_path);

        let series = scatter_series(&[2, 3, 5], 5);
        let result = create_scatter_plot(&series, "Depth 3", &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());

        let _ = fs::remove_file(&output_path);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_scatter_plot_empty_series() {
        let output_path = std::env::temp_dir().join("test_scatter_plot_empty.png");
        let _ = fs::remove_file(&output_path);

        let result = create_scatter_plot(&[], "Depth 42", &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());

        let _ = fs::remove_file(&output_path);
    }
}
