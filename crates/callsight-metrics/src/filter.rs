//! Pure selection of calls by date range and labels

use callsight_core::{Call, Direction, Language, Team, Topic};
use chrono::NaiveDate;
use serde::Serialize;

/// Selection criteria over calls
///
/// Empty criteria match everything. Within one criterion any listed value
/// matches; across criteria all must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallFilter {
    /// First day included
    pub from: Option<NaiveDate>,
    /// Last day included
    pub to: Option<NaiveDate>,
    pub teams: Vec<Team>,
    /// Agent ids or display names; a name selects every agent carrying it
    pub agents: Vec<String>,
    pub topics: Vec<Topic>,
    pub directions: Vec<Direction>,
    pub languages: Vec<Language>,
}

impl CallFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, call: &Call) -> bool {
        let date = call.date();
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        if !self.teams.is_empty() && !self.teams.contains(&call.team) {
            return false;
        }
        if !self.agents.is_empty()
            && !self
                .agents
                .iter()
                .any(|a| a == &call.agent_id || a == &call.agent_name)
        {
            return false;
        }
        if !self.topics.is_empty() && !self.topics.contains(&call.primary_topic()) {
            return false;
        }
        if !self.directions.is_empty() && !self.directions.contains(&call.direction) {
            return false;
        }
        if !self.languages.is_empty() && !self.languages.contains(&call.language) {
            return false;
        }
        true
    }

    /// Human-readable summary, `all calls` when empty
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        match (self.from, self.to) {
            (Some(from), Some(to)) => parts.push(format!("date {from}..={to}")),
            (Some(from), None) => parts.push(format!("date >= {from}")),
            (None, Some(to)) => parts.push(format!("date <= {to}")),
            (None, None) => {}
        }
        push_list(&mut parts, "team", self.teams.iter().map(|t| t.as_str()));
        push_list(&mut parts, "agent", self.agents.iter().map(String::as_str));
        push_list(&mut parts, "topic", self.topics.iter().map(|t| t.as_str()));
        push_list(
            &mut parts,
            "direction",
            self.directions.iter().map(|d| d.as_str()),
        );
        push_list(
            &mut parts,
            "language",
            self.languages.iter().map(|l| l.as_str()),
        );

        if parts.is_empty() {
            "all calls".to_string()
        } else {
            parts.join(", ")
        }
    }

    pub fn select<'a>(&self, calls: &'a [Call]) -> Vec<&'a Call> {
        calls.iter().filter(|c| self.matches(c)).collect()
    }
}

fn push_list<'a>(parts: &mut Vec<String>, name: &str, values: impl Iterator<Item = &'a str>) {
    let values: Vec<&str> = values.collect();
    if !values.is_empty() {
        parts.push(format!("{name}={}", values.join("|")));
    }
}
