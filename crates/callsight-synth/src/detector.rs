//! Silence and interruption detection over time-ordered segments

use callsight_core::{
    round_to, InterruptionEvent, SilenceInterval, SilenceKind, TranscriptSegment,
};

/// Everything the detector derives from one call's segments
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub silences: Vec<SilenceInterval>,
    pub silence_ratio: f64,
    pub interruptions: Vec<InterruptionEvent>,
}

/// Gaps of at least the pause threshold between consecutive segments
///
/// Segments are walked in start order. Overlapping or short gaps are below
/// reporting resolution and ignored.
pub fn detect_silences(segments: &[TranscriptSegment]) -> Vec<SilenceInterval> {
    ordered(segments)
        .windows(2)
        .filter_map(|pair| {
            let (start, end) = (pair[0].end(), pair[1].start());
            let duration = round_to(end - start, 2);
            SilenceKind::classify(duration).map(|kind| SilenceInterval {
                start,
                end,
                duration,
                kind,
            })
        })
        .collect()
}

/// Adjacent segments from different speakers that overlap
pub fn detect_interruptions(segments: &[TranscriptSegment]) -> Vec<InterruptionEvent> {
    ordered(segments)
        .windows(2)
        .filter(|pair| pair[0].speaker() != pair[1].speaker() && pair[1].start() < pair[0].end())
        .map(|pair| InterruptionEvent {
            at: pair[1].start(),
            interrupter: pair[1].speaker(),
            interrupted: pair[0].speaker(),
        })
        .collect()
}

/// Total silence over call duration, three decimals
pub fn silence_ratio(silences: &[SilenceInterval], duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let total: f64 = silences.iter().map(|s| s.duration).sum();
    round_to((total / duration).min(1.0), 3)
}

/// Run both scans; interruptions only when `interruptions_enabled`
pub fn detect(
    segments: &[TranscriptSegment],
    duration: f64,
    interruptions_enabled: bool,
) -> Detection {
    let silences = detect_silences(segments);
    let silence_ratio = silence_ratio(&silences, duration);
    let interruptions = if interruptions_enabled {
        detect_interruptions(segments)
    } else {
        Vec::new()
    };
    Detection {
        silences,
        silence_ratio,
        interruptions,
    }
}

fn ordered(segments: &[TranscriptSegment]) -> Vec<&TranscriptSegment> {
    let mut sorted: Vec<&TranscriptSegment> = segments.iter().collect();
    sorted.sort_by(|a, b| a.start().total_cmp(&b.start()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsight_core::Speaker;

    fn seg(speaker: Speaker, start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment::new(speaker, start, end, 10, "").unwrap()
    }

    #[test]
    fn test_single_pause_no_interruption() {
        let segments = vec![
            seg(Speaker::Agent, 0.0, 10.0),
            seg(Speaker::Customer, 15.0, 20.0),
        ];
        let detection = detect(&segments, 20.0, true);
        assert_eq!(
            detection.silences,
            vec![SilenceInterval {
                start: 10.0,
                end: 15.0,
                duration: 5.0,
                kind: SilenceKind::Pause,
            }]
        );
        assert!(detection.interruptions.is_empty());
        assert_eq!(detection.silence_ratio, 0.25);
    }

    #[test]
    fn test_hold_and_short_gap() {
        let segments = vec![
            seg(Speaker::Agent, 0.0, 5.0),
            seg(Speaker::Customer, 6.5, 10.0),
            seg(Speaker::Agent, 22.0, 30.0),
        ];
        let silences = detect_silences(&segments);
        assert_eq!(silences.len(), 1);
        assert_eq!(silences[0].kind, SilenceKind::Hold);
        assert_eq!(silences[0].duration, 12.0);
    }

    #[test]
    fn test_fewer_than_two_segments() {
        assert!(detect(&[], 60.0, true).silences.is_empty());
        let one = vec![seg(Speaker::Agent, 0.0, 5.0)];
        let detection = detect(&one, 60.0, true);
        assert!(detection.silences.is_empty());
        assert!(detection.interruptions.is_empty());
        assert_eq!(detection.silence_ratio, 0.0);
    }

    #[test]
    fn test_interruption_marks_overlap_start() {
        let segments = vec![
            seg(Speaker::Agent, 0.0, 10.0),
            seg(Speaker::Customer, 9.4, 14.0),
            seg(Speaker::Agent, 20.0, 25.0),
        ];
        let events = detect_interruptions(&segments);
        assert_eq!(
            events,
            vec![InterruptionEvent {
                at: 9.4,
                interrupter: Speaker::Customer,
                interrupted: Speaker::Agent,
            }]
        );
        // Silences and interruptions coexist
        let detection = detect(&segments, 25.0, true);
        assert_eq!(detection.silences.len(), 1);
        assert_eq!(detection.interruptions.len(), 1);
    }

    #[test]
    fn test_interruptions_disabled() {
        let segments = vec![
            seg(Speaker::Agent, 0.0, 10.0),
            seg(Speaker::Customer, 9.0, 14.0),
        ];
        assert!(detect(&segments, 14.0, false).interruptions.is_empty());
    }

    #[test]
    fn test_same_speaker_overlap_is_not_an_interruption() {
        let segments = vec![
            seg(Speaker::Agent, 0.0, 10.0),
            seg(Speaker::Agent, 9.0, 14.0),
        ];
        assert!(detect_interruptions(&segments).is_empty());
    }

    #[test]
    fn test_unsorted_input_is_walked_in_time_order() {
        let segments = vec![
            seg(Speaker::Customer, 15.0, 20.0),
            seg(Speaker::Agent, 0.0, 10.0),
        ];
        assert_eq!(detect_silences(&segments).len(), 1);
    }

    #[test]
    fn test_silence_ratio_guards_duration() {
        let silences = vec![SilenceInterval::from_gap(0.0, 4.0).unwrap()];
        assert_eq!(silence_ratio(&silences, 0.0), 0.0);
        assert_eq!(silence_ratio(&silences, 12.0), 0.333);
    }
}
