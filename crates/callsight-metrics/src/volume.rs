//! Call volume Pareto and distributions

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::{Call, Topic};
use serde::Serialize;
use std::collections::BTreeMap;

/// Cumulative share that marks the "vital few" topics
pub const PARETO_THRESHOLD_PCT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoEntry {
    pub topic: Topic,
    pub calls: usize,
    pub share_pct: f64,
    pub cumulative_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pareto {
    pub scope: Scope,
    /// Topics by volume, descending
    pub entries: Vec<ParetoEntry>,
    /// Length of the shortest prefix reaching the threshold
    pub vital_few: usize,
}

impl Pareto {
    pub fn vital_topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.entries.iter().take(self.vital_few).map(|e| e.topic)
    }
}

pub fn volume_pareto(set: &CallSet) -> Result<Pareto, MetricsError> {
    set.require("volume pareto", 1)?;
    let total = set.len();

    let mut counts: Vec<(Topic, usize)> = Topic::ALL
        .into_iter()
        .map(|t| (t, set.iter().filter(|c| c.primary_topic() == t).count()))
        .filter(|&(_, n)| n > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut running = 0;
    let mut entries: Vec<ParetoEntry> = counts
        .into_iter()
        .map(|(topic, calls)| {
            running += calls;
            ParetoEntry {
                topic,
                calls,
                share_pct: calls as f64 / total as f64 * 100.0,
                cumulative_pct: running as f64 / total as f64 * 100.0,
            }
        })
        .collect();
    if let Some(last) = entries.last_mut() {
        last.cumulative_pct = 100.0;
    }

    let vital_few = entries
        .iter()
        .position(|e| e.cumulative_pct >= PARETO_THRESHOLD_PCT)
        .map_or(entries.len(), |i| i + 1);

    Ok(Pareto {
        scope: set.scope(),
        entries,
        vital_few,
    })
}

/// Dimension to break volume down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Topic,
    Team,
    Language,
    Direction,
    Agent,
}

impl Dimension {
    /// Grouping key; agents are grouped by id since names are not unique
    fn key(self, call: &Call) -> String {
        match self {
            Dimension::Topic => call.primary_topic().as_str().to_string(),
            Dimension::Team => call.team.as_str().to_string(),
            Dimension::Language => call.language.as_str().to_string(),
            Dimension::Direction => call.direction.as_str().to_string(),
            Dimension::Agent => call.agent_id.clone(),
        }
    }

    fn label(self, call: &Call) -> String {
        match self {
            Dimension::Agent => call.agent_name.clone(),
            _ => self.key(call),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeShare {
    pub key: String,
    /// Display name; the agent name for [`Dimension::Agent`], otherwise the key
    pub label: String,
    pub calls: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeDistribution {
    pub scope: Scope,
    pub dimension: Dimension,
    /// Largest first, ties by key
    pub shares: Vec<VolumeShare>,
}

pub fn volume_distribution(
    set: &CallSet,
    dimension: Dimension,
) -> Result<VolumeDistribution, MetricsError> {
    set.require("volume distribution", 1)?;
    let mut counts: BTreeMap<String, (String, usize)> = BTreeMap::new();
    for call in set.iter() {
        counts
            .entry(dimension.key(call))
            .or_insert_with(|| (dimension.label(call), 0))
            .1 += 1;
    }

    let total = set.len() as f64;
    let mut shares: Vec<VolumeShare> = counts
        .into_iter()
        .map(|(key, (label, calls))| VolumeShare {
            key,
            label,
            calls,
            pct: calls as f64 / total * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.calls.cmp(&a.calls));

    Ok(VolumeDistribution {
        scope: set.scope(),
        dimension,
        shares,
    })
}
