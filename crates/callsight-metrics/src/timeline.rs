//! Per-call conversation timeline statistics

use callsight_core::{Call, SilenceKind, Speaker, TranscriptSegment};
use serde::Serialize;

/// Speaking-rate figures for one party
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateStats {
    /// Mean of per-segment WPM
    pub mean_wpm: f64,
    pub peak_wpm: f64,
    pub talk_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStats {
    pub call_id: String,
    pub turns: usize,
    pub pauses: usize,
    pub pause_secs: f64,
    pub holds: usize,
    pub hold_secs: f64,
    pub interruptions: usize,
    pub agent: Option<RateStats>,
    pub customer: Option<RateStats>,
    pub sentiment_delta: f64,
}

impl TimelineStats {
    /// Agent share of total talk time, in percent
    pub fn agent_talk_pct(&self) -> Option<f64> {
        let agent = self.agent.map_or(0.0, |r| r.talk_secs);
        let customer = self.customer.map_or(0.0, |r| r.talk_secs);
        let total = agent + customer;
        (total > 0.0).then(|| agent / total * 100.0)
    }
}

pub fn timeline_stats(call: &Call) -> TimelineStats {
    let silences = |kind: SilenceKind| {
        call.silences
            .iter()
            .filter(|s| s.kind == kind)
            .fold((0, 0.0), |(n, secs), s| (n + 1, secs + s.duration))
    };
    let (pauses, pause_secs) = silences(SilenceKind::Pause);
    let (holds, hold_secs) = silences(SilenceKind::Hold);

    TimelineStats {
        call_id: call.call_id.clone(),
        turns: call.turns(),
        pauses,
        pause_secs,
        holds,
        hold_secs,
        interruptions: call.interruptions.len(),
        agent: rate_stats(&call.segments, Speaker::Agent),
        customer: rate_stats(&call.segments, Speaker::Customer),
        sentiment_delta: call.sentiment.delta(),
    }
}

fn rate_stats(segments: &[TranscriptSegment], speaker: Speaker) -> Option<RateStats> {
    let own: Vec<&TranscriptSegment> = segments.iter().filter(|s| s.speaker() == speaker).collect();
    if own.is_empty() {
        return None;
    }
    let rates: Vec<f64> = own.iter().map(|s| s.words_per_minute()).collect();
    Some(RateStats {
        mean_wpm: rates.iter().sum::<f64>() / rates.len() as f64,
        peak_wpm: rates.iter().copied().fold(f64::MIN, f64::max),
        talk_secs: own.iter().map(|s| s.duration()).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::{InterruptionEvent, SilenceInterval};

    #[test]
    fn test_timeline_counts() {
        let mut call = CallBuilder::new("CALL-1").build();
        call.segments = vec![
            TranscriptSegment::new(Speaker::Agent, 0.0, 30.0, 60, "").unwrap(),
            TranscriptSegment::new(Speaker::Customer, 35.0, 65.0, 70, "").unwrap(),
            TranscriptSegment::new(Speaker::Agent, 80.0, 110.0, 80, "").unwrap(),
        ];
        call.silences = vec![
            SilenceInterval::from_gap(30.0, 35.0).unwrap(),
            SilenceInterval::from_gap(65.0, 80.0).unwrap(),
        ];
        call.interruptions = vec![InterruptionEvent {
            at: 12.0,
            interrupter: Speaker::Customer,
            interrupted: Speaker::Agent,
        }];

        let stats = timeline_stats(&call);
        assert_eq!(stats.turns, 3);
        assert_eq!((stats.pauses, stats.pause_secs), (1, 5.0));
        assert_eq!((stats.holds, stats.hold_secs), (1, 15.0));
        assert_eq!(stats.interruptions, 1);

        let agent = stats.agent.unwrap();
        assert_eq!(agent.mean_wpm, 140.0);
        assert_eq!(agent.peak_wpm, 160.0);
        assert_eq!(agent.talk_secs, 60.0);
        assert_eq!(stats.customer.unwrap().mean_wpm, 140.0);
        assert!((stats.agent_talk_pct().unwrap() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_silent_party_has_no_rate() {
        let mut call = CallBuilder::new("CALL-1").build();
        call.segments.truncate(1);
        let stats = timeline_stats(&call);
        assert!(stats.customer.is_none());
        assert_eq!(stats.agent_talk_pct(), Some(100.0));
    }
}
