mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { generation, out } => commands::generate::run(&generation, &out),
        Commands::Report {
            source,
            filter,
            top,
            json,
        } => commands::report::run(&source, &filter, top, json),
        Commands::Agents { source, filter } => commands::agents::run(&source, &filter),
        Commands::Timeline { source, call_id } => commands::timeline::run(&source, &call_id),
        Commands::Version => commands::version::run(),
    }
}
