//! Call record model, generation config and dataset files

mod call;
mod config;
mod error;
mod io;
mod numeric;
mod types;

pub use call::{
    Agent, Call, CallDataset, ChecklistItem, ComplianceResult, CriticalViolation,
    EscalationReason, InterruptionEvent, OpportunityKind, QualityScores, ResolutionOutcome,
    ResolutionStatus, SalesOpportunity, SentimentJourney, SentimentTrend, SilenceInterval,
    SilenceKind, TopicLabels, TranscriptSegment, WeightClass, HOLD_THRESHOLD_SECS,
    PAUSE_THRESHOLD_SECS,
};
pub use config::{
    GenerationConfig, LanguageMix, AGENT_COUNT_RANGE, CALL_COUNT_RANGE, WINDOW_DAYS_RANGE,
};
pub use error::{ConfigError, ConsistencyError};
pub use io::{read_jsonl, write_jsonl};
pub use numeric::round_to;
pub use types::{Direction, Intent, Language, Rating, Speaker, Team, Topic};
