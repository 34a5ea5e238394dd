//! Agent roster generation

use crate::random::RandomSource;
use callsight_core::{Agent, Team};

const FIRST_NAMES: &[&str] = &[
    "Jan", "Petra", "Martin", "Kateřina", "Tomáš", "Jana", "Lukáš", "Markéta",
];

const LAST_NAMES: &[&str] = &[
    "Novák",
    "Svobodová",
    "Dvořák",
    "Černá",
    "Procházka",
    "Kučerová",
];

const FIRST_AGENT_NUMBER: usize = 1000;

/// Generate `count` agents with ids `AG1000`, `AG1001`, …
pub fn generate_agents(count: usize, rng: &mut RandomSource) -> Vec<Agent> {
    let agents: Vec<Agent> = (0..count)
        .map(|i| {
            let first = rng.pick(FIRST_NAMES);
            let last = rng.pick(LAST_NAMES);
            let team = *rng.pick(&Team::ALL);
            Agent {
                agent_id: format!("AG{}", FIRST_AGENT_NUMBER + i),
                name: format!("{first} {last}"),
                team,
            }
        })
        .collect();

    tracing::debug!(count = agents.len(), "generated agent roster");
    agents
}
