//! Quantization constants for subtree-size analysis

/// Width of one histogram bucket, in subtree-size units
pub const BUCKET_WIDTH: u32 = 5;

/// Number of preallocated histogram buckets
///
/// Sizes at or above `BUCKET_WIDTH * MAX_BUCKETS` are rejected as out of
/// range rather than growing the histogram; the record producer is expected
/// to stay far below this bound.
pub const MAX_BUCKETS: usize = 100_000;
