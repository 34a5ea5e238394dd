//! First contact resolution and escalation prevention

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use crate::sentiment::{bucket, SentimentBucket};
use callsight_core::{Call, EscalationReason, Intent, ResolutionStatus};
use serde::Serialize;

/// Resolved in full with no callback and no escalation
pub fn is_fcr(call: &Call) -> bool {
    let r = &call.resolution;
    r.status == ResolutionStatus::Full && !r.callback_needed && !r.escalated
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcrSummary {
    pub scope: Scope,
    pub fcr_calls: usize,
    /// In [0, 1]
    pub rate: f64,
}

impl FcrSummary {
    pub fn pct(&self) -> f64 {
        self.rate * 100.0
    }
}

pub fn fcr_summary(set: &CallSet) -> Result<FcrSummary, MetricsError> {
    set.require("fcr", 1)?;
    let fcr_calls = set.iter().filter(|c| is_fcr(c)).count();
    Ok(FcrSummary {
        scope: set.scope(),
        fcr_calls,
        rate: fcr_calls as f64 / set.len() as f64,
    })
}

/// Whether a call counts toward the EPR denominator
///
/// A call is at risk when it was escalated, when the customer opened with
/// negative sentiment, or when the customer called to complain. Escalated
/// calls are always included so the rate stays within [0, 1].
pub fn is_escalation_risk(call: &Call) -> bool {
    call.resolution.escalated
        || bucket(call.sentiment.start) == SentimentBucket::Negative
        || call.topic.intent == Intent::MakeComplaint
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasonShare {
    pub reason: EscalationReason,
    pub count: usize,
    /// Share of escalated calls
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EprSummary {
    pub scope: Scope,
    pub at_risk: usize,
    pub prevented: usize,
    pub escalated: usize,
    /// prevented / at_risk, in [0, 1]
    pub rate: f64,
    /// Reasons with at least one escalation, most frequent first
    pub reasons: Vec<ReasonShare>,
}

pub fn epr_summary(set: &CallSet) -> Result<EprSummary, MetricsError> {
    let at_risk: Vec<&Call> = set.iter().filter(|c| is_escalation_risk(c)).collect();
    if at_risk.is_empty() {
        return Err(MetricsError::insufficient("epr", 1, 0));
    }
    let prevented = at_risk.iter().filter(|c| !c.resolution.escalated).count();

    let escalated: Vec<&Call> = set.iter().filter(|c| c.resolution.escalated).collect();
    let mut reasons: Vec<ReasonShare> = EscalationReason::ALL
        .into_iter()
        .map(|reason| {
            let count = escalated
                .iter()
                .filter(|c| c.resolution.escalation_reason == Some(reason))
                .count();
            ReasonShare {
                reason,
                count,
                pct: count as f64 / escalated.len().max(1) as f64 * 100.0,
            }
        })
        .filter(|r| r.count > 0)
        .collect();
    reasons.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(EprSummary {
        scope: set.scope(),
        at_risk: at_risk.len(),
        prevented,
        escalated: escalated.len(),
        rate: prevented as f64 / at_risk.len() as f64,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;

    #[test]
    fn test_escalation_alone_disqualifies_fcr() {
        let call = CallBuilder::new("CALL-1")
            .resolution(ResolutionStatus::Full, false, true)
            .build();
        assert!(!is_fcr(&call));
    }

    #[test]
    fn test_fcr_requires_all_conditions() {
        let ok = CallBuilder::new("CALL-1").build();
        let callback = CallBuilder::new("CALL-2")
            .resolution(ResolutionStatus::Full, true, false)
            .build();
        let partial = CallBuilder::new("CALL-3")
            .resolution(ResolutionStatus::Partial, false, false)
            .build();
        assert!(is_fcr(&ok));
        assert!(!is_fcr(&callback));
        assert!(!is_fcr(&partial));

        let calls = vec![ok, callback, partial];
        let summary = fcr_summary(&CallSet::all(&calls)).unwrap();
        assert_eq!(summary.fcr_calls, 1);
        assert!((summary.rate - 1.0 / 3.0).abs() < 1e-12);
        assert!((summary.pct() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fcr_empty_set() {
        let calls = vec![];
        assert!(fcr_summary(&CallSet::all(&calls)).is_err());
    }

    #[test]
    fn test_at_risk_predicate() {
        let calm = CallBuilder::new("CALL-1").sentiment(0.0, 0.5).build();
        let angry = CallBuilder::new("CALL-2").sentiment(-0.5, 0.5).build();
        let complaint = CallBuilder::new("CALL-3")
            .intent(Intent::MakeComplaint)
            .build();
        let escalated = CallBuilder::new("CALL-4")
            .resolution(ResolutionStatus::Partial, false, true)
            .build();
        assert!(!is_escalation_risk(&calm));
        assert!(is_escalation_risk(&angry));
        assert!(is_escalation_risk(&complaint));
        assert!(is_escalation_risk(&escalated));
    }

    #[test]
    fn test_epr_and_reasons() {
        let calls = vec![
            CallBuilder::new("CALL-1").sentiment(-0.5, 0.5).build(),
            CallBuilder::new("CALL-2")
                .sentiment(-0.6, 0.0)
                .escalation_reason(EscalationReason::Knowledge)
                .build(),
            CallBuilder::new("CALL-3")
                .escalation_reason(EscalationReason::Knowledge)
                .build(),
            CallBuilder::new("CALL-4")
                .escalation_reason(EscalationReason::CustomerRequest)
                .build(),
            CallBuilder::new("CALL-5").build(),
        ];
        let summary = epr_summary(&CallSet::all(&calls)).unwrap();
        assert_eq!(summary.at_risk, 4);
        assert_eq!(summary.prevented, 1);
        assert_eq!(summary.escalated, 3);
        assert_eq!(summary.rate, 0.25);
        assert_eq!(summary.reasons.len(), 2);
        assert_eq!(summary.reasons[0].reason, EscalationReason::Knowledge);
        assert!((summary.reasons[0].pct - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_epr_without_risk_is_insufficient() {
        let calls = vec![CallBuilder::new("CALL-1").build()];
        assert_eq!(
            epr_summary(&CallSet::all(&calls)),
            Err(MetricsError::insufficient("epr", 1, 0))
        );
    }
}
