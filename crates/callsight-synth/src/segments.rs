//! Transcript segment synthesis

use crate::profiles::{language_pacing, phrases, topic_profile};
use crate::random::RandomSource;
use callsight_core::{round_to, Language, Speaker, Topic, TranscriptSegment};

/// Plausible conversational speaking rate, words per minute
pub const MIN_WPM: f64 = 110.0;
pub const MAX_WPM: f64 = 180.0;

const AGENT_BASE_WPM: f64 = 145.0;
const CUSTOMER_BASE_WPM: f64 = 138.0;
const SPEAKER_SWITCH_CHANCE: f64 = 0.85;
const INTERRUPTION_CHANCE: f64 = 0.05;
/// Remaining time below which no further turn is started
const MIN_TURN_SECS: f64 = 1.0;

/// Build the ordered segments of one call
///
/// The first turn belongs to the agent. Offsets are rounded to two decimals,
/// end offsets strictly increase and never pass `duration`. Word counts are
/// chosen so the derived rate stays within [`MIN_WPM`, `MAX_WPM`].
pub fn synthesize_segments(
    duration: f64,
    language: Language,
    topic: Topic,
    interruptions: bool,
    rng: &mut RandomSource,
) -> Vec<TranscriptSegment> {
    let profile = topic_profile(topic);
    let pacing = language_pacing(language);
    let mut segments: Vec<TranscriptSegment> = Vec::new();
    let mut cursor = 0.0;
    let mut speaker = Speaker::Agent;

    while duration - cursor >= MIN_TURN_SECS {
        let turn = rng.uniform(profile.turn_secs.0, profile.turn_secs.1);
        let mut start = round_to(cursor, 2);

        if interruptions {
            if let Some(prev) = segments.last() {
                if prev.speaker() != speaker && rng.chance(INTERRUPTION_CHANCE) {
                    let overlap = rng.uniform(0.2, 0.8);
                    start = round_to((prev.end() - overlap).max(prev.start()), 2);
                }
            }
        }

        let end = round_to((start + turn).min(duration), 2).min(duration);
        let words = word_count(speaker, end - start, pacing, rng);
        let excerpt = *rng.pick(phrases(language, speaker));

        let Some(segment) = TranscriptSegment::new(speaker, start, end, words, excerpt) else {
            tracing::error!(start, end, words, "discarding malformed segment");
            break;
        };
        segments.push(segment);

        cursor = end + gap_after_turn(profile.pause_chance, profile.hold_chance, rng);
        if rng.chance(SPEAKER_SWITCH_CHANCE) {
            speaker = speaker.other();
        }
    }

    segments
}

fn word_count(speaker: Speaker, secs: f64, pacing: f64, rng: &mut RandomSource) -> u32 {
    let base = match speaker {
        Speaker::Agent => AGENT_BASE_WPM,
        Speaker::Customer => CUSTOMER_BASE_WPM,
    };
    let rate = (rng.uniform(base * 0.8, base * 1.2) * pacing).clamp(MIN_WPM, MAX_WPM);
    let minutes = secs / 60.0;

    let fewest = (MIN_WPM * minutes).ceil();
    let most = (MAX_WPM * minutes).floor();
    let mut words = (rate * minutes).round();
    if fewest <= most {
        words = words.clamp(fewest, most);
    }
    words.max(1.0) as u32
}

fn gap_after_turn(pause_chance: f64, hold_chance: f64, rng: &mut RandomSource) -> f64 {
    let roll = rng.unit();
    if roll < hold_chance {
        rng.uniform(10.0, 45.0)
    } else if roll < hold_chance + pause_chance {
        rng.uniform(3.0, 9.0)
    } else {
        rng.uniform(0.3, 2.0)
    }
}
