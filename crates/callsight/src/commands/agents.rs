use crate::cli::{FilterArgs, SourceArgs};
use crate::commands::source::load_calls;
use callsight_metrics::{agent_table, Aci, AciUndefined, AgentTable, CallSet};

pub fn run(source: &SourceArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let calls = load_calls(source)?;
    let set = CallSet::screen(&calls, &filter.to_filter());
    println!("{}", build_table(&agent_table(&set)));
    Ok(())
}

fn format_aci(aci: &Aci) -> (String, String) {
    match aci {
        Aci::Measured { value, stability } => {
            (format!("{:.1}", value), stability.label().to_string())
        }
        Aci::Undefined(AciUndefined::TooFewCalls { .. }) => {
            ("n/a".to_string(), "too few calls".to_string())
        }
        Aci::Undefined(AciUndefined::ZeroMean) => ("n/a".to_string(), "zero mean".to_string()),
    }
}

fn build_table(table: &AgentTable) -> String {
    if table.agents.is_empty() {
        return format!("No agents in scope ({}): insufficient data.", table.scope.filter);
    }

    let mut lines = vec![
        format!(
            "Agent Performance ({}, {} calls)\n=================",
            table.scope.filter, table.scope.call_count
        ),
        format!(
            "{:<7} {:<22} {:<10} {:>5} {:>6} {:>6} {:<16} {:>6} {:>6} {:>7}",
            "id", "name", "team", "calls", "AES", "ACI", "stability", "FCR%", "comp%", "AHT(s)"
        ),
    ];
    for agent in &table.agents {
        let (aci, stability) = format_aci(&agent.aci);
        lines.push(format!(
            "{:<7} {:<22} {:<10} {:>5} {:>6.1} {:>6} {:<16} {:>6.1} {:>6.1} {:>7.1}",
            agent.agent_id,
            agent.agent_name,
            agent.team.as_str(),
            agent.calls,
            agent.aes_mean,
            aci,
            stability,
            agent.fcr_rate * 100.0,
            agent.compliance_mean,
            agent.aht_secs
        ));
    }
    lines.join("\n")
}
