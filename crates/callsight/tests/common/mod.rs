#![allow(dead_code)]

use callsight_core::{Call, GenerationConfig, ResolutionStatus};
use callsight_synth::generate_dataset;

pub fn sample_config(calls: usize, agents: usize, seed: u64) -> GenerationConfig {
    GenerationConfig {
        call_count: calls,
        agent_count: agents,
        seed,
        ..GenerationConfig::default()
    }
}

pub fn sample_calls(calls: usize, agents: usize, seed: u64) -> Vec<Call> {
    generate_dataset(&sample_config(calls, agents, seed))
        .unwrap()
        .calls
}

/// Overwrite the resolution outcome of a generated call
pub fn with_resolution(
    mut call: Call,
    status: ResolutionStatus,
    callback_needed: bool,
    escalated: bool,
) -> Call {
    call.resolution.status = status;
    call.resolution.callback_needed = callback_needed;
    call.resolution.escalated = escalated;
    call.resolution.escalation_reason = None;
    call
}
