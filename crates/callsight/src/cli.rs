use callsight_core::{ConfigError, Direction, GenerationConfig, Language, Team, Topic};
use callsight_metrics::CallFilter;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "callsight")]
#[command(version)]
#[command(about = "Synthetic contact-center call data and performance metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a call dataset and write it as JSON Lines
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Print the metric battery for a (filtered) call set
    Report {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Number of compliance failures to list
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Per-agent effectiveness and consistency
    Agents {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Conversation timeline statistics of one call
    Timeline {
        #[command(flatten)]
        source: SourceArgs,

        /// Call id, e.g. CALL-10000
        call_id: String,
    },

    /// Print version information
    Version,
}

/// Generation parameters; unset flags fall back to the config file, then defaults
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Number of calls (10-1000)
    #[arg(long)]
    pub calls: Option<usize>,

    /// Number of agents (1-50)
    #[arg(long)]
    pub agents: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulate overlapping speech
    #[arg(long)]
    pub interruptions: bool,

    /// JSON generation config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerationArgs {
    pub fn to_config(&self) -> Result<GenerationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(calls) = self.calls {
            config.call_count = calls;
        }
        if let Some(agents) = self.agents {
            config.agent_count = agents;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.interruptions {
            config.simulate_interruptions = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Where calls come from: a dataset file, or a fresh generation run
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSONL dataset written by `generate`
    #[arg(short, long, conflicts_with_all = ["calls", "agents", "seed", "interruptions", "config"])]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "team", value_parser = parse_team)]
    pub teams: Vec<Team>,

    /// Agent id or name; a name selects every agent with that name
    #[arg(long = "agent", id = "agent")]
    pub agents: Vec<String>,

    #[arg(long = "topic", value_parser = parse_topic)]
    pub topics: Vec<Topic>,

    #[arg(long = "direction", value_parser = parse_direction)]
    pub directions: Vec<Direction>,

    #[arg(long = "language", value_parser = parse_language)]
    pub languages: Vec<Language>,

    /// First day included (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day included (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> CallFilter {
        CallFilter {
            from: self.from,
            to: self.to,
            teams: self.teams.clone(),
            agents: self.agents.clone(),
            topics: self.topics.clone(),
            directions: self.directions.clone(),
            languages: self.languages.clone(),
        }
    }
}

fn parse_team(s: &str) -> Result<Team, String> {
    Team::parse(s).ok_or_else(|| unknown("team", s, Team::ALL.map(Team::as_str)))
}

fn parse_topic(s: &str) -> Result<Topic, String> {
    Topic::parse(s).ok_or_else(|| unknown("topic", s, Topic::ALL.map(Topic::as_str)))
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::parse(s).ok_or_else(|| unknown("direction", s, Direction::ALL.map(Direction::as_str)))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| unknown("language", s, Language::ALL.map(Language::as_str)))
}

fn unknown<const N: usize>(what: &str, value: &str, expected: [&str; N]) -> String {
    format!("unknown {what} '{value}' (expected one of: {})", expected.join(", "))
}
