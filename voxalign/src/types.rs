//! Core types for voxalign.

use crate::timeline::TimeRange;

/// Text segment with timestamps.
///
/// Represents a portion of transcribed text with start and end times in
/// seconds, as produced by the transcription collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    /// Time range covered by the segment
    pub range: TimeRange,
    /// Transcribed text
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            range: TimeRange::new(start, end),
            text: text.into(),
        }
    }
}

/// Interval during which a diarization model asserts one speaker is active.
///
/// Turns for different speakers may interleave in time, and the same speaker
/// may own many turns. Turns need not tile the full audio duration; gaps mean
/// no speaker is resolvable at that instant.
#[derive(Clone, Debug, PartialEq)]
pub struct DiarizationTurn {
    /// Time range of the turn
    pub range: TimeRange,
    /// Speaker identity asserted for this interval
    pub speaker: String,
}

impl DiarizationTurn {
    pub fn new(speaker: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            range: TimeRange::new(start, end),
            speaker: speaker.into(),
        }
    }
}

/// Diarization availability.
///
/// An explicit sum type rather than an optional turn list: an empty turn list
/// still counts as diarization being available, and labels every segment
/// `"Unknown"` instead of silently switching to the gap heuristic.
#[derive(Clone, Debug, PartialEq)]
pub enum Diarization {
    /// Diarization ran and produced these turns (possibly none).
    Available(Vec<DiarizationTurn>),
    /// No diarization result; the gap-based fallback applies.
    Unavailable,
}

/// One transcript segment with its resolved speaker label.
///
/// Never mutated after creation. Every input segment yields exactly one
/// labeled segment, falling back to the `"Unknown"` sentinel when no speaker
/// can be resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSegment {
    pub range: TimeRange,
    pub text: String,
    pub speaker: String,
}

/// The merged, speaker-labeled, time-ordered transcript all renderers consume.
#[derive(Clone, Debug, PartialEq)]
pub struct UnifiedTranscript {
    /// Labeled segments in input order
    pub segments: Vec<LabeledSegment>,
    /// Whitespace-joined concatenation of segment texts, independent of
    /// speaker boundaries
    pub full_text: String,
    /// Language reported by the transcription collaborator
    pub language: String,
    /// Total audio duration in seconds
    pub duration: f64,
}

impl UnifiedTranscript {
    /// Pair segments with labels by positional index.
    ///
    /// The caller guarantees `segments` and `labels` have equal length; the
    /// pipeline checks this before calling.
    pub fn build(
        segments: Vec<TranscriptSegment>,
        labels: Vec<String>,
        full_text: String,
        language: String,
        duration: f64,
    ) -> Self {
        let segments = segments
            .into_iter()
            .zip(labels)
            .map(|(segment, speaker)| LabeledSegment {
                range: segment.range,
                text: segment.text,
                speaker,
            })
            .collect();

        Self {
            segments,
            full_text,
            language,
            duration,
        }
    }
}
