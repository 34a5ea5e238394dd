//! The full metric battery over one call set

use crate::aes::{aes_summary, AesSummary};
use crate::aht::{aht_summary, AhtSummary, DEFAULT_AHT_TARGET_SECS};
use crate::callset::{CallSet, Scope};
use crate::compliance::{compliance_summary, top_failures, ComplianceSummary, TopFailures};
use crate::error::MetricsError;
use crate::resolution::{epr_summary, fcr_summary, EprSummary, FcrSummary};
use crate::sales::{sales_summary, SalesSummary};
use crate::sentiment::{sentiment_kpis, transition_matrix, SentimentKpis, TransitionMatrix};
use crate::trend::{quality_trend, QualityTrend, TREND_DAYS};
use crate::tre::{tre_table, BenchmarkTable, TreTable};
use crate::volume::{volume_pareto, Pareto};
use serde::Serialize;

/// Parameters of the metric battery
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub top_n: usize,
    pub benchmarks: BenchmarkTable,
    pub aht_target_secs: f64,
    pub trend_days: usize,
}

impl ReportOptions {
    pub fn new() -> Self {
        Self {
            top_n: 5,
            benchmarks: BenchmarkTable::new(),
            aht_target_secs: DEFAULT_AHT_TARGET_SECS,
            trend_days: TREND_DAYS,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Every set-level metric; a `None` section lists its reason in `unavailable`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub scope: Scope,
    pub aes: Option<AesSummary>,
    pub fcr: Option<FcrSummary>,
    pub compliance: Option<ComplianceSummary>,
    pub top_failures: Option<TopFailures>,
    pub epr: Option<EprSummary>,
    pub tre: Option<TreTable>,
    pub sentiment_matrix: Option<TransitionMatrix>,
    pub sentiment_kpis: Option<SentimentKpis>,
    pub quality_trend: Option<QualityTrend>,
    pub pareto: Option<Pareto>,
    pub aht: Option<AhtSummary>,
    pub sales: Option<SalesSummary>,
    pub unavailable: Vec<String>,
}

pub fn compute_report(set: &CallSet, options: &ReportOptions) -> MetricsReport {
    let mut missing = Vec::new();
    let m = &mut missing;

    MetricsReport {
        scope: set.scope(),
        aes: keep(aes_summary(set), m),
        fcr: keep(fcr_summary(set), m),
        compliance: keep(compliance_summary(set), m),
        top_failures: keep(top_failures(set, options.top_n), m),
        epr: keep(epr_summary(set), m),
        tre: keep(tre_table(set, &options.benchmarks), m),
        sentiment_matrix: keep(transition_matrix(set), m),
        sentiment_kpis: keep(sentiment_kpis(set), m),
        quality_trend: keep(quality_trend(set, options.trend_days), m),
        pareto: keep(volume_pareto(set), m),
        aht: keep(aht_summary(set, options.aht_target_secs), m),
        sales: keep(sales_summary(set), m),
        unavailable: missing,
    }
}

fn keep<T>(result: Result<T, MetricsError>, unavailable: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "metric unavailable");
            unavailable.push(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::Call;

    #[test]
    fn test_empty_set_reports_every_section_unavailable() {
        let calls: Vec<Call> = vec![];
        let report = compute_report(&CallSet::all(&calls), &ReportOptions::new());
        assert!(report.aes.is_none());
        assert!(report.pareto.is_none());
        assert_eq!(report.unavailable.len(), 12);
    }

    #[test]
    fn test_populated_set() {
        let calls = vec![
            CallBuilder::new("CALL-1").build(),
            CallBuilder::new("CALL-2").sentiment(-0.5, 0.5).build(),
        ];
        let report = compute_report(&CallSet::all(&calls), &ReportOptions::new());
        assert!(report.aes.is_some());
        assert!(report.epr.is_some());
        // no sales opportunities in these calls
        assert!(report.sales.is_none());
        assert_eq!(report.unavailable.len(), 1);
        assert_eq!(report.scope.call_count, 2);
    }
}
