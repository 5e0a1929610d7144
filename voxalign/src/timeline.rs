//! Time interval primitives shared by segments and diarization turns.

/// A time interval in seconds.
///
/// Intervals are half-open for overlap purposes but inclusive for single
/// instants, which is what midpoint membership testing needs: a segment
/// midpoint landing exactly on a turn boundary counts as inside the turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test. Zero-length ranges never overlap anything.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Temporal midpoint of the range.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Inclusive containment test for a single instant.
    pub fn contains(&self, instant: f64) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// A range is well formed when it is non-negative and does not run
    /// backwards. Callers reject malformed ranges before alignment.
    pub fn is_well_formed(&self) -> bool {
        self.start >= 0.0 && self.start <= self.end
    }
}
