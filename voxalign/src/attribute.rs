//! Speaker attribution: one label per transcript segment.
//!
//! When diarization turns are available each segment is resolved by midpoint
//! containment: the first turn whose range contains the segment's temporal
//! midpoint wins. Without diarization a coarse silence-gap heuristic rotates
//! between two speaker identities.

use crate::types::{Diarization, DiarizationTurn, TranscriptSegment};

/// Sentinel label for segments no diarization turn accounts for.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// Silence gap (seconds) between consecutive segments that suggests a speaker
/// change in the fallback heuristic.
const SPEAKER_GAP_THRESHOLD: f64 = 2.0;

/// Identities used by the fallback rotation.
const FALLBACK_SPEAKERS: [&str; 2] = ["Speaker 1", "Speaker 2"];

/// Assign exactly one speaker label per segment, in input order.
///
/// The algorithm is selected solely by the [`Diarization`] variant; an empty
/// turn list still counts as diarization being present and yields
/// [`UNKNOWN_SPEAKER`] for every segment. Pure: same inputs, same labels.
pub fn attribute(segments: &[TranscriptSegment], diarization: &Diarization) -> Vec<String> {
    match diarization {
        Diarization::Available(turns) => attribute_from_turns(segments, turns),
        Diarization::Unavailable => attribute_by_gaps(segments),
    }
}

/// Resolve each segment against the turn whose range contains its midpoint.
///
/// Turns are scanned in their given order and the first match wins. Upstream
/// diarization occasionally emits overlapping turns; first-match is the
/// deterministic tie-break, with no attempt to merge the overlap.
fn attribute_from_turns(segments: &[TranscriptSegment], turns: &[DiarizationTurn]) -> Vec<String> {
    segments
        .iter()
        .map(|segment| {
            let midpoint = segment.range.midpoint();
            turns
                .iter()
                .find(|turn| turn.range.contains(midpoint))
                .map(|turn| turn.speaker.clone())
                .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string())
        })
        .collect()
}

/// Alternate between two speaker identities on long silence gaps.
///
/// Starts at `"Speaker 1"` and toggles whenever the gap between the previous
/// segment's end and the current segment's start exceeds
/// [`SPEAKER_GAP_THRESHOLD`]. A low-fidelity proxy for real diarization: it
/// never distinguishes more than two speakers.
fn attribute_by_gaps(segments: &[TranscriptSegment]) -> Vec<String> {
    let mut current = 0;
    let mut labels = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            let gap = segment.range.start - segments[i - 1].range.end;
            if gap > SPEAKER_GAP_THRESHOLD {
                current = 1 - current;
            }
        }
        labels.push(FALLBACK_SPEAKERS[current].to_string());
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<TranscriptSegment> {
        vec![
            TranscriptSegment::new(" Hello there.", 0.0, 2.0),
            TranscriptSegment::new(" How are you?", 2.5, 4.0),
            TranscriptSegment::new(" Fine, thanks.", 6.5, 8.0),
        ]
    }

    #[test]
    fn resolves_speaker_at_segment_midpoint() {
        let turns = vec![
            DiarizationTurn::new("SPEAKER_00", 0.0, 2.2),
            DiarizationTurn::new("SPEAKER_01", 2.2, 8.0),
        ];

        let labels = attribute(&segments(), &Diarization::Available(turns));

        assert_eq!(labels, ["SPEAKER_00", "SPEAKER_01", "SPEAKER_01"]);
    }

    #[test]
    fn unmatched_midpoint_resolves_to_unknown() {
        // turn covers only the first segment's midpoint
        let turns = vec![DiarizationTurn::new("SPEAKER_00", 0.0, 1.5)];

        let labels = attribute(&segments(), &Diarization::Available(turns));

        assert_eq!(labels, ["SPEAKER_00", "Unknown", "Unknown"]);
    }

    #[test]
    fn overlapping_turns_tie_break_on_first_listed() {
        let turns = vec![
            DiarizationTurn::new("SPEAKER_01", 0.0, 4.0),
            DiarizationTurn::new("SPEAKER_00", 0.0, 4.0),
        ];
        let segment = vec![TranscriptSegment::new(" Hi.", 1.0, 2.0)];

        let labels = attribute(&segment, &Diarization::Available(turns));

        assert_eq!(labels, ["SPEAKER_01"]);
    }

    #[test]
    fn midpoint_on_turn_boundary_counts_as_inside() {
        let turns = vec![DiarizationTurn::new("SPEAKER_00", 1.0, 2.0)];
        // midpoint lands exactly on the turn end
        let segment = vec![TranscriptSegment::new(" Edge.", 1.5, 2.5)];

        let labels = attribute(&segment, &Diarization::Available(turns));

        assert_eq!(labels, ["SPEAKER_00"]);
    }

    #[test]
    fn empty_turn_list_labels_everything_unknown() {
        // present-but-empty diarization must not fall back to the heuristic
        let labels = attribute(&segments(), &Diarization::Available(Vec::new()));

        assert_eq!(labels, ["Unknown", "Unknown", "Unknown"]);
    }

    #[test]
    fn fallback_toggles_only_on_long_gaps() {
        // gaps: 0.5s (below threshold), 2.5s (above threshold)
        let labels = attribute(&segments(), &Diarization::Unavailable);

        assert_eq!(labels, ["Speaker 1", "Speaker 1", "Speaker 2"]);
    }

    #[test]
    fn fallback_toggles_back_on_second_gap() {
        let segments = vec![
            TranscriptSegment::new("a", 0.0, 1.0),
            TranscriptSegment::new("b", 4.0, 5.0),
            TranscriptSegment::new("c", 8.0, 9.0),
        ];

        let labels = attribute(&segments, &Diarization::Unavailable);

        assert_eq!(labels, ["Speaker 1", "Speaker 2", "Speaker 1"]);
    }

    #[test]
    fn attribution_is_deterministic() {
        let turns = vec![
            DiarizationTurn::new("SPEAKER_00", 0.0, 3.0),
            DiarizationTurn::new("SPEAKER_01", 3.0, 8.0),
        ];
        let diarization = Diarization::Available(turns);

        let first = attribute(&segments(), &diarization);
        let second = attribute(&segments(), &diarization);

        assert_eq!(first, second);
    }

    #[test]
    fn one_label_per_segment_including_empty_input() {
        let turns = Diarization::Available(vec![DiarizationTurn::new("S", 0.0, 10.0)]);

        assert_eq!(attribute(&segments(), &turns).len(), 3);
        assert_eq!(attribute(&segments(), &Diarization::Unavailable).len(), 3);
        assert!(attribute(&[], &turns).is_empty());
        assert!(attribute(&[], &Diarization::Unavailable).is_empty());
    }
}
