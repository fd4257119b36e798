//! Errors. Expected data irregularities (mismatched overlays, unparsable ids,
//! zero time spans) are not errors and never end up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    /// Parallel arrays that must share the trajectory length do not.
    #[error("Length mismatch for '{field}': expected {expected}, got {got}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },
    /// Track id not on the form `{groupId}-{index}`.
    #[error("Invalid track id '{0}'")]
    InvalidTrackId(String),
    /// Unsigned packing of a negative delta.
    #[error("Negative delta {delta} at index {index} can not be packed as unsigned")]
    NegativeDelta { index: usize, delta: f64 },
    /// Integer packing of a delta that was never quantized.
    #[error("Delta {value} at index {index} is not an integer")]
    NotQuantized { index: usize, value: f64 },
    /// Scale must be finite and non-zero.
    #[error("Invalid codec scale {0}")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, TrackError>;
