//! Agent Consistency Index and per-agent aggregates

use crate::aes::aes;
use crate::callset::{CallSet, Scope};
use crate::resolution::is_fcr;
use callsight_core::Team;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fewest calls for which consistency is meaningful
pub const MIN_ACI_CALLS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    VeryStable,
    Stable,
    Unstable,
    HighlyUnstable,
}

impl Stability {
    pub fn from_aci(value: f64) -> Self {
        if value >= 85.0 {
            Stability::VeryStable
        } else if value >= 70.0 {
            Stability::Stable
        } else if value >= 50.0 {
            Stability::Unstable
        } else {
            Stability::HighlyUnstable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stability::VeryStable => "Very Stable",
            Stability::Stable => "Stable",
            Stability::Unstable => "Unstable",
            Stability::HighlyUnstable => "Highly Unstable",
        }
    }
}

/// Why an ACI could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum AciUndefined {
    TooFewCalls { calls: usize },
    ZeroMean,
}

/// ACI value, or an explicit undefined marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Aci {
    Measured { value: f64, stability: Stability },
    Undefined(AciUndefined),
}

impl Aci {
    pub fn value(&self) -> Option<f64> {
        match self {
            Aci::Measured { value, .. } => Some(*value),
            Aci::Undefined(_) => None,
        }
    }
}

/// `100 - 100 * CV` over a sequence of AES values, floored at 0
///
/// CV uses the population standard deviation.
pub fn aci(scores: &[f64]) -> Aci {
    if scores.len() < MIN_ACI_CALLS {
        return Aci::Undefined(AciUndefined::TooFewCalls {
            calls: scores.len(),
        });
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return Aci::Undefined(AciUndefined::ZeroMean);
    }
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let cv = variance.sqrt() / mean;
    let value = (100.0 - 100.0 * cv).max(0.0);
    Aci::Measured {
        value,
        stability: Stability::from_aci(value),
    }
}

/// One agent's performance over a call set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentAggregate {
    pub agent_id: String,
    pub agent_name: String,
    pub team: Team,
    pub calls: usize,
    pub aes_mean: f64,
    pub aci: Aci,
    /// In [0, 1]
    pub fcr_rate: f64,
    pub compliance_mean: f64,
    pub aht_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentTable {
    pub scope: Scope,
    /// Ordered by agent id
    pub agents: Vec<AgentAggregate>,
}

impl AgentTable {
    pub fn get(&self, agent_id: &str) -> Option<&AgentAggregate> {
        self.agents.iter().find(|a| a.agent_id == agent_id)
    }
}

/// Aggregate every agent present in the set
///
/// An empty set yields an empty table.
pub fn agent_table(set: &CallSet) -> AgentTable {
    let mut by_agent: BTreeMap<&str, Vec<&callsight_core::Call>> = BTreeMap::new();
    for call in set.iter() {
        by_agent.entry(call.agent_id.as_str()).or_default().push(call);
    }

    let agents = by_agent
        .into_values()
        .map(|calls| {
            let first = calls[0];
            let n = calls.len() as f64;
            let scores: Vec<f64> = calls.iter().map(|c| aes(c)).collect();
            AgentAggregate {
                agent_id: first.agent_id.clone(),
                agent_name: first.agent_name.clone(),
                team: first.team,
                calls: calls.len(),
                aes_mean: scores.iter().sum::<f64>() / n,
                aci: aci(&scores),
                fcr_rate: calls.iter().filter(|c| is_fcr(c)).count() as f64 / n,
                compliance_mean: calls.iter().map(|c| c.compliance.score()).sum::<f64>() / n,
                aht_secs: calls.iter().map(|c| c.duration_sec).sum::<f64>() / n,
            }
        })
        .collect();

    AgentTable {
        scope: set.scope(),
        agents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::{Call, ResolutionStatus};

    #[test]
    fn test_single_call_is_undefined() {
        assert_eq!(
            aci(&[72.0]),
            Aci::Undefined(AciUndefined::TooFewCalls { calls: 1 })
        );
        assert_eq!(aci(&[72.0]).value(), None);
    }

    #[test]
    fn test_undefined_serializes_with_reason() {
        let json = serde_json::to_value(aci(&[50.0])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "undefined", "reason": "too_few_calls", "calls": 1})
        );
    }

    #[test]
    fn test_zero_mean_is_undefined() {
        assert_eq!(aci(&[0.0, 0.0]), Aci::Undefined(AciUndefined::ZeroMean));
    }

    #[test]
    fn test_identical_scores_are_fully_consistent() {
        assert_eq!(
            aci(&[80.0, 80.0, 80.0]),
            Aci::Measured {
                value: 100.0,
                stability: Stability::VeryStable
            }
        );
    }

    #[test]
    fn test_population_cv() {
        // mean 50, population std 10 => CV 0.2 => ACI 80
        let value = aci(&[40.0, 60.0]).value().unwrap();
        assert!((value - 80.0).abs() < 1e-9);
        assert_eq!(Stability::from_aci(value), Stability::Stable);
    }

    #[test]
    fn test_floor_at_zero() {
        // mean 25, population std ~43.3 => CV > 1
        assert_eq!(
            aci(&[0.0, 0.0, 0.0, 100.0]),
            Aci::Measured {
                value: 0.0,
                stability: Stability::HighlyUnstable
            }
        );
    }

    #[test]
    fn test_agent_table() {
        let calls: Vec<Call> = vec![
            CallBuilder::new("CALL-1").agent("AG1001", "Petra Černá").build(),
            CallBuilder::new("CALL-2")
                .agent("AG1000", "Jan Novák")
                .resolution(ResolutionStatus::None, true, true)
                .duration(300.0)
                .build(),
            CallBuilder::new("CALL-3").agent("AG1000", "Jan Novák").build(),
        ];
        let set = CallSet::all(&calls);
        let table = agent_table(&set);
        assert_eq!(table.agents.len(), 2);
        assert_eq!(table.agents[0].agent_id, "AG1000");

        let jan = table.get("AG1000").unwrap();
        assert_eq!(jan.calls, 2);
        assert_eq!(jan.fcr_rate, 0.5);
        assert_eq!(jan.aht_secs, 270.0);
        assert!(jan.aci.value().is_some());

        let petra = table.get("AG1001").unwrap();
        assert!(matches!(
            petra.aci,
            Aci::Undefined(AciUndefined::TooFewCalls { calls: 1 })
        ));
    }
}
