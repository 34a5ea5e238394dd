mod common;

use callsight_metrics::{aes, transition_matrix, volume_pareto, CallSet};
use callsight_synth::{MAX_WPM, MIN_WPM};
use common::sample_calls;

#[test]
fn test_aes_within_bounds() {
    for seed in [1, 42, 777] {
        for call in &sample_calls(200, 12, seed) {
            let score = aes(call);
            assert!((0.0..=100.0).contains(&score), "{} {}", call.call_id, score);
        }
    }
}

#[test]
fn test_transition_matrix_accounts_for_every_call() {
    let calls = sample_calls(300, 10, 17);
    let matrix = transition_matrix(&CallSet::all(&calls)).unwrap();
    assert_eq!(matrix.total(), 300);
}

#[test]
fn test_pareto_is_monotonic_and_ends_at_100() {
    let calls = sample_calls(250, 10, 23);
    let pareto = volume_pareto(&CallSet::all(&calls)).unwrap();
    for pair in pareto.entries.windows(2) {
        assert!(pair[0].calls >= pair[1].calls);
        assert!(pair[0].cumulative_pct <= pair[1].cumulative_pct);
    }
    let last = pareto.entries.last().unwrap();
    assert!((last.cumulative_pct - 100.0).abs() < 1e-6);
}

#[test]
fn test_segments_are_well_paced_and_ordered() {
    for call in &sample_calls(150, 8, 31) {
        for segment in &call.segments {
            let wpm = segment.words_per_minute();
            assert!(
                wpm >= MIN_WPM - 1e-9 && wpm <= MAX_WPM + 1e-9,
                "{} wpm {}",
                call.call_id,
                wpm
            );
            assert!(segment.end() <= call.duration_sec + 1e-9);
        }
        for pair in call.segments.windows(2) {
            assert!(pair[1].end() > pair[0].end());
        }
    }
}

#[test]
fn test_silence_ratio_bounded() {
    for call in &sample_calls(150, 8, 37) {
        assert!((0.0..=1.0).contains(&call.silence_ratio));
    }
}
