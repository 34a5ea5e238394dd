//! Dataset assembly: roster, then per call segments, detection and AutoQA

use crate::agents::generate_agents;
use crate::autoqa::annotate;
use crate::detector::detect;
use crate::random::RandomSource;
use crate::segments::synthesize_segments;
use callsight_core::{
    round_to, Agent, Call, CallDataset, ConfigError, Direction, GenerationConfig, Language, Topic,
};
use chrono::Duration;

const FIRST_CALL_NUMBER: usize = 10_000;
const INBOUND_SHARE: f64 = 0.8;
const MIN_CALL_SECS: f64 = 60.0;
/// Handle-time spread relative to the topic benchmark
const DURATION_SPREAD: f64 = 0.3;

/// Generate a complete dataset
///
/// Fails before drawing any random number when the configuration is out of
/// range. The same configuration always yields the same dataset.
pub fn generate_dataset(config: &GenerationConfig) -> Result<CallDataset, ConfigError> {
    config.validate()?;

    let mut rng = RandomSource::from_seed(config.seed);
    let agents = generate_agents(config.agent_count, &mut rng);

    let mut calls = Vec::with_capacity(config.call_count);
    for index in 0..config.call_count {
        let call = generate_call(config, index, &agents, &mut rng);
        if let Err(e) = call.validate() {
            tracing::error!(call_id = %call.call_id, error = %e, "generated call is inconsistent");
        }
        calls.push(call);
    }

    tracing::info!(
        calls = calls.len(),
        agents = agents.len(),
        seed = config.seed,
        "generated dataset"
    );

    Ok(CallDataset {
        config: config.clone(),
        agents,
        calls,
    })
}

fn generate_call(
    config: &GenerationConfig,
    index: usize,
    agents: &[Agent],
    rng: &mut RandomSource,
) -> Call {
    let window_secs = config.window_days as i64 * 86_400;
    let timestamp = config.window_start() + Duration::seconds(rng.int_inclusive(0, window_secs));
    let direction = if rng.chance(INBOUND_SHARE) {
        Direction::Inbound
    } else {
        Direction::Outbound
    };
    let language = Language::ALL[rng.weighted_index(&config.language_mix.weights())];
    let agent = rng.pick(agents);
    let topic = *rng.pick(&Topic::ALL);

    let benchmark = topic.benchmark_handle_secs();
    let duration_sec = round_to(
        rng.gauss(benchmark, benchmark * DURATION_SPREAD)
            .max(MIN_CALL_SECS),
        1,
    );

    let call_id = format!("CALL-{}", FIRST_CALL_NUMBER + index);
    tracing::debug!(%call_id, topic = %topic, duration_sec, "synthesizing call");

    let segments = synthesize_segments(
        duration_sec,
        language,
        topic,
        config.simulate_interruptions,
        rng,
    );
    let detection = detect(&segments, duration_sec, config.simulate_interruptions);
    let annotation = annotate(topic, agent.team, rng);

    Call {
        call_id,
        timestamp,
        direction,
        language,
        duration_sec,
        agent_id: agent.agent_id.clone(),
        agent_name: agent.name.clone(),
        team: agent.team,
        topic: annotation.topic,
        segments,
        silences: detection.silences,
        silence_ratio: detection.silence_ratio,
        interruptions: detection.interruptions,
        compliance: annotation.compliance,
        resolution: annotation.resolution,
        quality: annotation.quality,
        sentiment: annotation.sentiment,
        sales_opportunity: annotation.sales_opportunity,
        autoqa_score: annotation.autoqa_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(calls: usize, agents: usize, seed: u64) -> GenerationConfig {
        GenerationConfig {
            call_count: calls,
            agent_count: agents,
            seed,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_rejects_out_of_range_config() {
        assert!(matches!(
            generate_dataset(&config(5, 12, 1)),
            Err(ConfigError::OutOfRange {
                field: "call_count",
                ..
            })
        ));
        assert!(generate_dataset(&config(100, 0, 1)).is_err());
    }

    #[test]
    fn test_dataset_shape() {
        let dataset = generate_dataset(&config(50, 5, 3)).unwrap();
        assert_eq!(dataset.calls.len(), 50);
        assert_eq!(dataset.agents.len(), 5);
        assert_eq!(dataset.calls[0].call_id, "CALL-10000");
        assert_eq!(dataset.calls[49].call_id, "CALL-10049");
    }

    #[test]
    fn test_every_call_is_consistent() {
        let mut cfg = config(200, 12, 42);
        cfg.simulate_interruptions = true;
        let dataset = generate_dataset(&cfg).unwrap();
        for call in &dataset.calls {
            assert_eq!(call.validate(), Ok(()), "{}", call.call_id);
        }
    }

    #[test]
    fn test_calls_reference_roster_agents() {
        let dataset = generate_dataset(&config(100, 4, 9)).unwrap();
        for call in &dataset.calls {
            let agent = dataset
                .agents
                .iter()
                .find(|a| a.agent_id == call.agent_id)
                .unwrap();
            assert_eq!(agent.team, call.team);
            assert_eq!(agent.name, call.agent_name);
        }
    }

    #[test]
    fn test_timestamps_within_window() {
        let cfg = config(100, 4, 11);
        let dataset = generate_dataset(&cfg).unwrap();
        for call in &dataset.calls {
            assert!(call.timestamp >= cfg.window_start());
            assert!(call.timestamp <= cfg.window_end);
        }
    }

    #[test]
    fn test_language_mix_is_honored() {
        let mut cfg = config(100, 4, 13);
        cfg.language_mix.cs = 0.0;
        cfg.language_mix.sk = 0.0;
        let dataset = generate_dataset(&cfg).unwrap();
        assert!(dataset.calls.iter().all(|c| c.language == Language::En));
    }

    #[test]
    fn test_same_config_same_dataset() {
        let a = generate_dataset(&config(80, 6, 99)).unwrap();
        let b = generate_dataset(&config(80, 6, 99)).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        let c = generate_dataset(&config(80, 6, 100)).unwrap();
        assert_ne!(a, c);
    }
}
