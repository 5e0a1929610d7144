//! Pipeline entry point: attribution followed by transcript construction.
//!
//! This is the single seam external callers (CLI, API layers, tests) invoke.
//! It knows nothing about transport, files, or models; collaborators hand it
//! already-computed segments and turns.

use crate::attribute::attribute;
use crate::error::{Error, Result};
use crate::types::{Diarization, TranscriptSegment, UnifiedTranscript};

/// Attach speaker labels to transcript segments and build the unified model.
///
/// Validates every time range, runs speaker attribution, enforces the
/// one-label-per-segment precondition, and derives `full_text` from the
/// segment texts. Zero segments is a valid input and yields an empty
/// transcript.
pub fn label_transcript(
    segments: Vec<TranscriptSegment>,
    diarization: &Diarization,
    language: impl Into<String>,
    duration: f64,
) -> Result<UnifiedTranscript> {
    for segment in &segments {
        if !segment.range.is_well_formed() {
            return Err(Error::InvalidTimeRange {
                start: segment.range.start,
                end: segment.range.end,
            });
        }
    }

    if let Diarization::Available(turns) = diarization {
        for turn in turns {
            if !turn.range.is_well_formed() {
                return Err(Error::InvalidTimeRange {
                    start: turn.range.start,
                    end: turn.range.end,
                });
            }
        }
    }

    let labels = attribute(&segments, diarization);

    if labels.len() != segments.len() {
        return Err(Error::LengthMismatch {
            segments: segments.len(),
            labels: labels.len(),
        });
    }

    tracing::debug!(
        segments = segments.len(),
        diarized = matches!(diarization, Diarization::Available(_)),
        "labeled transcript segments"
    );

    let full_text = join_segment_texts(&segments);

    Ok(UnifiedTranscript::build(
        segments,
        labels,
        full_text,
        language.into(),
        duration,
    ))
}

/// Concatenate segment texts in order with separating whitespace.
fn join_segment_texts(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiarizationTurn;

    #[test]
    fn labels_segments_end_to_end() {
        let segments = vec![
            TranscriptSegment::new(" Good morning.", 0.0, 1.5),
            TranscriptSegment::new(" Morning!", 1.8, 2.5),
        ];
        let diarization = Diarization::Available(vec![
            DiarizationTurn::new("SPEAKER_00", 0.0, 1.6),
            DiarizationTurn::new("SPEAKER_01", 1.6, 2.5),
        ]);

        let transcript = label_transcript(segments, &diarization, "en", 2.5).unwrap();

        assert_eq!(transcript.segments.len(), 2);
        assert_eq!(transcript.segments[0].speaker, "SPEAKER_00");
        assert_eq!(transcript.segments[1].speaker, "SPEAKER_01");
        assert_eq!(transcript.full_text, "Good morning. Morning!");
        assert_eq!(transcript.language, "en");
        assert_eq!(transcript.duration, 2.5);
    }

    #[test]
    fn empty_segments_yield_empty_transcript() {
        let transcript =
            label_transcript(Vec::new(), &Diarization::Unavailable, "unknown", 0.0).unwrap();

        assert!(transcript.segments.is_empty());
        assert!(transcript.full_text.is_empty());
    }

    #[test]
    fn backwards_segment_range_is_rejected() {
        let segments = vec![TranscriptSegment::new("oops", 2.0, 1.0)];

        let err = label_transcript(segments, &Diarization::Unavailable, "en", 2.0).unwrap_err();

        assert!(matches!(err, Error::InvalidTimeRange { start, end } if start == 2.0 && end == 1.0));
    }

    #[test]
    fn backwards_turn_range_is_rejected() {
        let segments = vec![TranscriptSegment::new("fine", 0.0, 1.0)];
        let diarization = Diarization::Available(vec![DiarizationTurn::new("S", 5.0, 3.0)]);

        let err = label_transcript(segments, &diarization, "en", 1.0).unwrap_err();

        assert!(matches!(err, Error::InvalidTimeRange { .. }));
    }

    #[test]
    fn full_text_skips_blank_segments() {
        let segments = vec![
            TranscriptSegment::new(" one ", 0.0, 1.0),
            TranscriptSegment::new("   ", 1.0, 2.0),
            TranscriptSegment::new(" two", 2.0, 3.0),
        ];

        let transcript =
            label_transcript(segments, &Diarization::Unavailable, "en", 3.0).unwrap();

        assert_eq!(transcript.full_text, "one two");
        // blank segment still receives a label
        assert_eq!(transcript.segments.len(), 3);
    }
}
