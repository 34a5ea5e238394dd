use crate::cli::SourceArgs;
use crate::commands::source::load_calls;
use callsight_metrics::{timeline_stats, RateStats, TimelineStats};

pub fn run(source: &SourceArgs, call_id: &str) -> anyhow::Result<()> {
    let calls = load_calls(source)?;
    let call = calls
        .iter()
        .find(|c| c.call_id == call_id)
        .ok_or_else(|| anyhow::anyhow!("call {call_id} not found"))?;
    println!("{}", build_summary(&timeline_stats(call)));
    Ok(())
}

fn format_rate(label: &str, rate: Option<RateStats>) -> String {
    match rate {
        Some(r) => format!(
            "{label}: {:.0}s talk, {:.0} wpm mean, {:.0} wpm peak",
            r.talk_secs, r.mean_wpm, r.peak_wpm
        ),
        None => format!("{label}: silent"),
    }
}

fn build_summary(stats: &TimelineStats) -> String {
    let talk_share = stats
        .agent_talk_pct()
        .map_or_else(|| "-".to_string(), |p| format!("{p:.0}%"));
    [
        format!("Timeline {}\n=============", stats.call_id),
        format!("Turns: {} | agent talk share: {}", stats.turns, talk_share),
        format!(
            "Pauses: {} ({:.1}s) | holds: {} ({:.1}s) | interruptions: {}",
            stats.pauses, stats.pause_secs, stats.holds, stats.hold_secs, stats.interruptions
        ),
        format_rate("Agent", stats.agent),
        format_rate("Customer", stats.customer),
        format!("Sentiment delta: {:+.3}", stats.sentiment_delta),
    ]
    .join("\n")
}
