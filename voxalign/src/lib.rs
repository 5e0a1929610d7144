//! voxalign: reconcile speech-to-text segments with speaker diarization turns.
//!
//! Transcription and diarization run independently and produce two different
//! time axes: one of text segments, one of speaker turns. This crate merges
//! them into a single speaker-labeled transcript and renders it in several
//! interchangeable encodings.
//!
//! # Architecture
//!
//! - [`attribute`]: assigns one speaker label per segment, from real
//!   diarization turns when available or a silence-gap heuristic otherwise
//! - [`pipeline`]: the single entry point callers use to build a
//!   [`types::UnifiedTranscript`]
//! - [`render`]: plain text, speaker report, structured record, and subtitle
//!   output from one shared transcript model
//!
//! # Quick Start
//!
//! ```ignore
//! use voxalign::pipeline::label_transcript;
//! use voxalign::render::{OutputFormat, Renderer};
//! use voxalign::types::{Diarization, TranscriptSegment};
//!
//! let segments = vec![TranscriptSegment::new("Hello there.", 0.0, 1.4)];
//! let transcript = label_transcript(segments, &Diarization::Unavailable, "en", 1.4)?;
//!
//! let renderer = Renderer::new("meeting.wav");
//! let output = renderer.render(&transcript, OutputFormat::Subtitle)?;
//! println!("{}", output.content);
//! ```

pub mod attribute;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod timeline;
pub mod types;
