//! Multi-format transcript rendering.
//!
//! All four encodings are dispatched through a single [`Renderer::render`]
//! entry point so the [`UnifiedTranscript`] stays the one source of truth.
//! The renderer returns content only; writing files and choosing paths is the
//! caller's concern.

use crate::error::Result;
use crate::types::{LabeledSegment, UnifiedTranscript};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output encodings for a labeled transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header block plus the full narrative text, no per-segment structure
    PlainText,
    /// Speaker-grouped narrative followed by a per-segment timeline
    SpeakerReport,
    /// Machine-readable JSON record, round-trippable
    StructuredRecord,
    /// SRT subtitle cues with speaker labels
    Subtitle,
}

impl OutputFormat {
    /// Conventional file suffix for persisted artifacts of this format.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            OutputFormat::PlainText | OutputFormat::SpeakerReport => ".txt",
            OutputFormat::StructuredRecord => ".json",
            OutputFormat::Subtitle => ".srt",
        }
    }
}

/// Rendered transcript content in one output format.
#[derive(Clone, Debug)]
pub struct RenderedOutput {
    pub format: OutputFormat,
    pub content: String,
}

/// Transcript renderer.
///
/// Carries the source identification and generation timestamp that appear in
/// the plain-text header, so rendering itself stays a pure function of the
/// renderer and the transcript.
#[derive(Clone, Debug)]
pub struct Renderer {
    /// Identification of the source audio (file name, URL, ...)
    pub source: String,
    /// Timestamp stamped into headers
    pub generated_at: DateTime<Utc>,
}

impl Renderer {
    /// Renderer for the given source, stamped with the current time.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_timestamp(source, Utc::now())
    }

    /// Renderer with an explicit generation timestamp.
    pub fn with_timestamp(source: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            generated_at,
        }
    }

    /// Render the transcript in the requested format.
    pub fn render(
        &self,
        transcript: &UnifiedTranscript,
        format: OutputFormat,
    ) -> Result<RenderedOutput> {
        let content = match format {
            OutputFormat::PlainText => self.render_plain_text(transcript),
            OutputFormat::SpeakerReport => render_speaker_report(transcript),
            OutputFormat::StructuredRecord => {
                StructuredRecord::from_transcript(transcript).to_json()?
            }
            OutputFormat::Subtitle => render_subtitles(transcript),
        };

        Ok(RenderedOutput { format, content })
    }

    fn render_plain_text(&self, transcript: &UnifiedTranscript) -> String {
        let mut out = String::new();

        out.push_str("AUDIO TRANSCRIPTION\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");
        out.push_str(&format!("Source File: {}\n", self.source));
        out.push_str(&format!(
            "Transcribed: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!("Language: {}\n\n", transcript.language));

        out.push_str("TRANSCRIPT:\n");
        out.push_str(&"-".repeat(20));
        out.push_str("\n\n");
        out.push_str(&transcript.full_text);
        out.push('\n');

        out
    }
}

/// Speaker-grouped narrative plus a per-segment timeline, in one output.
///
/// The narrative pass opens a new block at every speaker change, including a
/// repeated label after an interruption. The timeline pass emits one line per
/// segment unconditionally.
fn render_speaker_report(transcript: &UnifiedTranscript) -> String {
    let mut out = String::new();

    out.push_str("TRANSCRIPT BY SPEAKER:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');

    let mut current_speaker: Option<&str> = None;
    for segment in &transcript.segments {
        if current_speaker != Some(segment.speaker.as_str()) {
            out.push_str(&format!(
                "\n[{}] ({} - {}):\n",
                segment.speaker,
                format_clock_time(segment.range.start),
                format_clock_time(segment.range.end)
            ));
            current_speaker = Some(segment.speaker.as_str());
        }
        out.push_str(segment.text.trim());
        out.push(' ');
    }

    out.push_str("\n\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str("DETAILED TIMELINE:\n");
    out.push_str(&"-".repeat(20));
    out.push_str("\n\n");

    for segment in &transcript.segments {
        out.push_str(&format!(
            "[{} - {}] {}: {}\n",
            format_clock_time(segment.range.start),
            format_clock_time(segment.range.end),
            segment.speaker,
            segment.text.trim()
        ));
    }

    out
}

/// Numbered SRT cue blocks, one per segment.
fn render_subtitles(transcript: &UnifiedTranscript) -> String {
    let mut out = String::new();

    for (segment, index) in transcript.segments.iter().zip(1..) {
        out.push_str(&format!("{index}\n"));
        out.push_str(&format!(
            "{} --> {}\n",
            format_subtitle_timestamp(segment.range.start),
            format_subtitle_timestamp(segment.range.end)
        ));
        out.push_str(&format!("[{}] {}\n\n", segment.speaker, segment.text.trim()));
    }

    out
}

/// Format seconds as `MM:SS` with unbounded minutes.
pub fn format_clock_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{minutes:02}:{secs:02}")
}

/// Format seconds as an SRT cue timestamp, `HH:MM:SS,mmm`.
///
/// Fields truncate rather than round, so a cue never starts before its audio.
/// Hours are always present, even when zero. The epsilon absorbs binary
/// representation error before truncation: 3725.004 stores as 3725.003999...,
/// which must still print as `,004`, not `,003`.
pub fn format_subtitle_timestamp(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0 + 1e-6).floor() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Machine-readable transcript record.
///
/// Field names and segment order are a wire contract: presenting interfaces
/// round-trip this byte-for-byte.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub full_text: String,
    pub language: String,
    pub duration: f64,
    pub segments: Vec<RecordSegment>,
}

/// One segment in the structured record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub speaker: String,
}

impl StructuredRecord {
    pub fn from_transcript(transcript: &UnifiedTranscript) -> Self {
        Self {
            full_text: transcript.full_text.clone(),
            language: transcript.language.clone(),
            duration: transcript.duration,
            segments: transcript
                .segments
                .iter()
                .map(|segment| RecordSegment {
                    start: segment.range.start,
                    end: segment.range.end,
                    text: segment.text.clone(),
                    speaker: segment.speaker.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild the transcript this record was serialized from.
    pub fn into_transcript(self) -> UnifiedTranscript {
        UnifiedTranscript {
            segments: self
                .segments
                .into_iter()
                .map(|segment| LabeledSegment {
                    range: crate::timeline::TimeRange::new(segment.start, segment.end),
                    text: segment.text,
                    speaker: segment.speaker,
                })
                .collect(),
            full_text: self.full_text,
            language: self.language,
            duration: self.duration,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
