//! Fixed-width histogram accumulation over a preallocated bucket range
//!
//! This module provides the [`Histogram`] type used by the subtree-size
//! analysis: bucket `i` counts values in the half-open range
//! `[i * width, (i + 1) * width)`. The bucket range is contiguous from 0 and
//! never grows; values that quantize past the preallocated capacity are a
//! fatal [`CapacityError`].

use thiserror::Error;

/// Error raised when a value maps beyond the preallocated bucket range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Size {size} maps to bucket {bucket}, beyond histogram capacity {capacity}")]
pub struct CapacityError {
    /// The offending size value
    pub size: u32,
    /// The bucket index the size mapped to
    pub bucket: usize,
    /// Number of preallocated buckets
    pub capacity: usize,
}

type Result<T> = core::result::Result<T, CapacityError>;

/// Fixed-width histogram with a preallocated, contiguous bucket range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    width: u32,
}

impl Histogram {
    /// Creates a zero-filled histogram with `capacity` buckets of `width`
    pub fn new(width: u32, capacity: usize) -> Self {
        debug_assert!(width > 0, "bucket width must be non-zero");
        Self {
            counts: vec![0; capacity],
            width,
        }
    }

    /// Number of currently held buckets
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when every bucket has been trimmed away
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Bucket width used to quantize recorded values
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The per-bucket counts, index-aligned from bucket 0
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Counts one value into its bucket
    ///
    /// # Arguments
    /// * `size` - The value to quantize and count
    ///
    /// # Returns
    /// * `Ok(())` - The value was counted
    /// * `Err(CapacityError)` - The value quantizes past the preallocated range
    pub fn record(&mut self, size: u32) -> Result<()> {
        let bucket = (size / self.width) as usize;
        match self.counts.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(CapacityError {
                size,
                bucket,
                capacity: self.counts.len(),
            }),
        }
    }

    /// Removes the trailing run of zero-count buckets
    ///
    /// May leave the histogram empty when nothing was recorded.
    pub fn trim(&mut self) {
        while self.counts.last() == Some(&0) {
            self.counts.pop();
        }
    }

    /// Adds 1 to every remaining bucket
    ///
    /// Postcondition: every count is ≥ 1, so the logarithm of every plotted
    /// frequency is defined.
    pub fn offset(&mut self) {
        for count in &mut self.counts {
            *count += 1;
        }
    }
}
