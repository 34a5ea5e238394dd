use crate::cli::GenerationArgs;
use anyhow::Context;
use callsight_core::{write_jsonl, CallDataset};
use callsight_synth::generate_dataset;
use std::path::Path;

pub fn run(args: &GenerationArgs, out: &Path) -> anyhow::Result<()> {
    let config = args.to_config()?;
    let dataset = generate_dataset(&config)?;
    write_jsonl(out, &dataset.calls)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("{}", summarize(&dataset, out));
    Ok(())
}

fn summarize(dataset: &CallDataset, out: &Path) -> String {
    let first = dataset.calls.iter().map(|c| c.date()).min();
    let last = dataset.calls.iter().map(|c| c.date()).max();
    let span = match (first, last) {
        (Some(first), Some(last)) => format!(" from {first} to {last}"),
        _ => String::new(),
    };
    format!(
        "Wrote {} calls by {} agents (seed {}){} to {}",
        dataset.calls.len(),
        dataset.agents.len(),
        dataset.config.seed,
        span,
        out.display()
    )
}
