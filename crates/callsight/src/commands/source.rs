use crate::cli::SourceArgs;
use anyhow::Context;
use callsight_core::{read_jsonl, Call};
use callsight_synth::generate_dataset;

/// Calls from `--input`, or from a generation run with the given flags
pub fn load_calls(source: &SourceArgs) -> anyhow::Result<Vec<Call>> {
    match &source.input {
        Some(path) => {
            let calls: Vec<Call> = read_jsonl(path)
                .with_context(|| format!("failed to read dataset {}", path.display()))?;
            tracing::info!(calls = calls.len(), path = %path.display(), "loaded dataset");
            Ok(calls)
        }
        None => {
            let config = source.generation.to_config()?;
            Ok(generate_dataset(&config)?.calls)
        }
    }
}
