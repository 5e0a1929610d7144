//! Error types for voxalign.
//!
//! Only programmer-contract violations surface as errors. Absence-of-data
//! states (missing diarization, unattributable segment, zero segments) are
//! modeled as valid data, never as errors.

use thiserror::Error;

/// Alignment and rendering error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Segment and label sequences diverged in length at build time
    #[error("segment/label length mismatch: {segments} segments, {labels} labels")]
    LengthMismatch { segments: usize, labels: usize },

    /// A segment or turn carried a backwards or negative time range
    #[error("malformed time range: start {start}s, end {end}s")]
    InvalidTimeRange { start: f64, end: f64 },

    /// Structured record serialization or parsing error
    #[error(transparent)]
    Record(#[from] serde_json::Error),
}

/// Result type alias for voxalign operations.
pub type Result<T> = std::result::Result<T, Error>;
