//! Topic Resolution Efficiency

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::{ResolutionStatus, Topic};
use serde::Serialize;
use std::collections::BTreeMap;

/// Expected handle time per topic, in seconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    overrides: BTreeMap<Topic, f64>,
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default benchmark of one topic
    pub fn with_benchmark(mut self, topic: Topic, secs: f64) -> Self {
        self.overrides.insert(topic, secs);
        self
    }

    pub fn benchmark(&self, topic: Topic) -> f64 {
        self.overrides
            .get(&topic)
            .copied()
            .unwrap_or_else(|| topic.benchmark_handle_secs())
    }
}

/// 100 within benchmark, then falling linearly to 0 at twice the benchmark
pub fn efficiency(aht_secs: f64, benchmark_secs: f64) -> f64 {
    if aht_secs <= benchmark_secs {
        100.0
    } else {
        (100.0 * (1.0 - (aht_secs - benchmark_secs) / benchmark_secs)).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl TreStatus {
    /// `resolution_pct` is the share of fully resolved calls, 0-100
    pub fn classify(efficiency: f64, resolution_pct: f64) -> Self {
        if efficiency >= 90.0 && resolution_pct >= 80.0 {
            TreStatus::Excellent
        } else if efficiency >= 70.0 && resolution_pct >= 70.0 {
            TreStatus::Good
        } else if efficiency >= 50.0 {
            TreStatus::NeedsImprovement
        } else {
            TreStatus::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TreStatus::Excellent => "Excellent",
            TreStatus::Good => "Good",
            TreStatus::NeedsImprovement => "Needs Improvement",
            TreStatus::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicAggregate {
    pub topic: Topic,
    pub calls: usize,
    pub aht_secs: f64,
    pub benchmark_secs: f64,
    pub efficiency: f64,
    pub resolution_pct: f64,
    pub status: TreStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreTable {
    pub scope: Scope,
    /// Topics present in the set, in topic order
    pub topics: Vec<TopicAggregate>,
}

impl TreTable {
    pub fn get(&self, topic: Topic) -> Option<&TopicAggregate> {
        self.topics.iter().find(|t| t.topic == topic)
    }
}

pub fn tre_table(set: &CallSet, benchmarks: &BenchmarkTable) -> Result<TreTable, MetricsError> {
    set.require("tre", 1)?;
    let topics = Topic::ALL
        .into_iter()
        .filter_map(|topic| {
            let calls: Vec<_> = set.iter().filter(|c| c.primary_topic() == topic).collect();
            if calls.is_empty() {
                return None;
            }
            let n = calls.len() as f64;
            let aht_secs = calls.iter().map(|c| c.duration_sec).sum::<f64>() / n;
            let full = calls
                .iter()
                .filter(|c| c.resolution.status == ResolutionStatus::Full)
                .count();
            let benchmark_secs = benchmarks.benchmark(topic);
            let efficiency = efficiency(aht_secs, benchmark_secs);
            let resolution_pct = full as f64 / n * 100.0;
            Some(TopicAggregate {
                topic,
                calls: calls.len(),
                aht_secs,
                benchmark_secs,
                efficiency,
                resolution_pct,
                status: TreStatus::classify(efficiency, resolution_pct),
            })
        })
        .collect();

    Ok(TreTable {
        scope: set.scope(),
        topics,
    })
}
