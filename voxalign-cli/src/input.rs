//! Loading of collaborator results from JSON files.
//!
//! The transcription and diarization collaborators (Whisper-style STT, a
//! diarization model, a remote API) run elsewhere and hand over their results
//! as JSON. This module maps those files onto voxalign's core types.

use eyre::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use voxalign::types::{Diarization, DiarizationTurn, TranscriptSegment};

/// Transcription result as produced by the STT collaborator.
#[derive(Debug, Deserialize)]
pub struct TranscriptionInput {
    /// Detected language, if the collaborator reports one
    #[serde(default)]
    pub language: Option<String>,

    /// Total audio duration in seconds, if reported
    #[serde(default)]
    pub duration: Option<f64>,

    /// Timestamped segments, ordered by start time
    pub segments: Vec<SegmentInput>,
}

/// One timestamped segment in the transcription result.
#[derive(Debug, Deserialize)]
pub struct SegmentInput {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// One diarization turn in the turns file.
#[derive(Debug, Deserialize)]
pub struct TurnInput {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

impl TranscriptionInput {
    /// Load a transcription result from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read transcription: {}", path.display()))?;

        serde_json::from_str(&json)
            .wrap_err_with(|| format!("failed to parse transcription: {}", path.display()))
    }

    /// Reported language, defaulting to `"unknown"`.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("unknown")
    }

    /// Reported duration, defaulting to the last segment's end time.
    pub fn duration(&self) -> f64 {
        self.duration
            .or_else(|| self.segments.last().map(|segment| segment.end))
            .unwrap_or(0.0)
    }

    /// Convert segments into core transcript segments.
    pub fn segments(&self) -> Vec<TranscriptSegment> {
        self.segments
            .iter()
            .map(|segment| TranscriptSegment::new(segment.text.clone(), segment.start, segment.end))
            .collect()
    }
}

/// Load diarization turns from a JSON file.
pub fn load_turns(path: &Path) -> Result<Diarization> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read diarization turns: {}", path.display()))?;

    let turns: Vec<TurnInput> = serde_json::from_str(&json)
        .wrap_err_with(|| format!("failed to parse diarization turns: {}", path.display()))?;

    Ok(Diarization::Available(
        turns
            .into_iter()
            .map(|turn| DiarizationTurn::new(turn.speaker, turn.start, turn.end))
            .collect(),
    ))
}
