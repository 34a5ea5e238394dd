//! Contact-center performance metrics
//!
//! Every metric is a pure function of a [`CallSet`]: a screened, optionally
//! filtered selection of calls. Set-level results carry the [`Scope`] they
//! were computed over.

mod aci;
mod aes;
mod aht;
mod benchmark;
mod callset;
mod compliance;
mod error;
mod filter;
mod report;
mod resolution;
mod sales;
mod sentiment;
mod timeline;
mod tre;
mod trend;
mod volume;

#[cfg(test)]
mod testing;

pub use aci::{aci, agent_table, Aci, AciUndefined, AgentAggregate, AgentTable, Stability, MIN_ACI_CALLS};
pub use aes::{
    aes, aes_summary, resolution_component, sentiment_component, AesBreakdown, AesSummary,
    COMPLIANCE_WEIGHT, QUALITY_WEIGHT, RESOLUTION_WEIGHT, SENTIMENT_WEIGHT,
};
pub use aht::{aht_summary, AhtSummary, DEFAULT_AHT_TARGET_SECS};
pub use benchmark::{compare_to_benchmark, BenchmarkStatus, ON_TARGET_TOLERANCE};
pub use callset::{CallSet, Scope};
pub use compliance::{
    assess, compliance_summary, risk_score, top_failures, ComplianceAssessment,
    ComplianceSummary, ItemFailures, RiskLevel, TopFailures, CRITICAL_VIOLATION_RISK,
};
pub use error::MetricsError;
pub use filter::CallFilter;
pub use report::{compute_report, MetricsReport, ReportOptions};
pub use resolution::{
    epr_summary, fcr_summary, is_escalation_risk, is_fcr, EprSummary, FcrSummary, ReasonShare,
};
pub use sales::{sales_summary, KindConversion, SalesSummary};
pub use sentiment::{
    bucket, classify_change, sentiment_kpis, transition_matrix, SentimentBucket, SentimentChange,
    SentimentKpis, TransitionMatrix,
};
pub use timeline::{timeline_stats, RateStats, TimelineStats};
pub use tre::{efficiency, tre_table, BenchmarkTable, TopicAggregate, TreStatus, TreTable};
pub use trend::{quality_trend, DailyQuality, DayQuality, QualityTrend, TrendDay, TREND_DAYS};
pub use volume::{
    volume_distribution, volume_pareto, Dimension, Pareto, ParetoEntry, VolumeDistribution,
    VolumeShare, PARETO_THRESHOLD_PCT,
};
