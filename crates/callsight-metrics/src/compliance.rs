//! Compliance scoring, risk levels and failure rankings

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::{ChecklistItem, ComplianceResult};
use serde::Serialize;

/// Risk points added when a call carries any critical violation
pub const CRITICAL_VIOLATION_RISK: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_risk(risk: u32) -> Self {
        match risk {
            0..=4 => RiskLevel::Low,
            5..=14 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Risk points of one checklist outcome
///
/// Each failed item contributes its risk weight (5 for critical items, the
/// item weight for weighted ones, nothing for standard ones). The violation
/// term applies once however many violations were flagged.
pub fn risk_score(compliance: &ComplianceResult) -> u32 {
    let failed: u32 = compliance.failed_items().map(ChecklistItem::risk_weight).sum();
    let violation = if compliance.has_critical_violation() {
        CRITICAL_VIOLATION_RISK
    } else {
        0
    };
    failed + violation
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceAssessment {
    pub score: f64,
    pub risk: u32,
    pub level: RiskLevel,
    pub failed: Vec<ChecklistItem>,
    pub critical_violation: bool,
}

pub fn assess(compliance: &ComplianceResult) -> ComplianceAssessment {
    let risk = risk_score(compliance);
    ComplianceAssessment {
        score: compliance.score(),
        risk,
        level: RiskLevel::from_risk(risk),
        failed: compliance.failed_items().collect(),
        critical_violation: compliance.has_critical_violation(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceSummary {
    pub scope: Scope,
    pub mean_score: f64,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
    pub critical_violation_calls: usize,
}

impl ComplianceSummary {
    pub fn critical_violation_pct(&self) -> f64 {
        self.critical_violation_calls as f64 / self.scope.call_count.max(1) as f64 * 100.0
    }
}

pub fn compliance_summary(set: &CallSet) -> Result<ComplianceSummary, MetricsError> {
    set.require("compliance", 1)?;
    let mut summary = ComplianceSummary {
        scope: set.scope(),
        mean_score: 0.0,
        low_risk: 0,
        medium_risk: 0,
        high_risk: 0,
        critical_violation_calls: 0,
    };

    let mut total = 0.0;
    for call in set.iter() {
        let assessment = assess(&call.compliance);
        total += assessment.score;
        match assessment.level {
            RiskLevel::Low => summary.low_risk += 1,
            RiskLevel::Medium => summary.medium_risk += 1,
            RiskLevel::High => summary.high_risk += 1,
        }
        if assessment.critical_violation {
            summary.critical_violation_calls += 1;
        }
    }
    summary.mean_score = total / set.len() as f64;
    Ok(summary)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFailures {
    pub item: ChecklistItem,
    pub failures: usize,
    /// Failures as a percentage of the calls in scope
    pub failure_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopFailures {
    pub scope: Scope,
    pub items: Vec<ItemFailures>,
}

/// Most frequently failed checklist items
///
/// Ties keep checklist order; items that never failed are left out.
pub fn top_failures(set: &CallSet, top_n: usize) -> Result<TopFailures, MetricsError> {
    set.require("compliance failures", 1)?;
    let n = set.len() as f64;
    let mut items: Vec<ItemFailures> = ChecklistItem::ALL
        .into_iter()
        .map(|item| {
            let failures = set.iter().filter(|c| !c.compliance.passed(item)).count();
            ItemFailures {
                item,
                failures,
                failure_pct: failures as f64 / n * 100.0,
            }
        })
        .filter(|f| f.failures > 0)
        .collect();
    items.sort_by(|a, b| b.failures.cmp(&a.failures));
    items.truncate(top_n);

    Ok(TopFailures {
        scope: set.scope(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::CriticalViolation;

    #[test]
    fn test_clean_call_is_low_risk() {
        let assessment = assess(&ComplianceResult::all_passed());
        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.risk, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_risk_formula() {
        let mut c = ComplianceResult::all_passed();
        c.set(ChecklistItem::CustomerVerification, false);
        c.set(ChecklistItem::CallRecordingNotice, false);
        c.set(ChecklistItem::OptOutOffered, false);
        assert_eq!(risk_score(&c), 8);
        c.critical_violations.push(CriticalViolation::IdNotVerified);
        c.critical_violations.push(CriticalViolation::GdprMissing);
        assert_eq!(risk_score(&c), 15);
        assert_eq!(RiskLevel::from_risk(15), RiskLevel::High);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_risk(4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_risk(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_risk(14), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_risk(15), RiskLevel::High);
    }

    #[test]
    fn test_summary() {
        let calls = vec![
            CallBuilder::new("CALL-1").build(),
            CallBuilder::new("CALL-2")
                .failed(&[ChecklistItem::DataProtectionMentioned])
                .violation(CriticalViolation::GdprMissing)
                .build(),
            CallBuilder::new("CALL-3")
                .failed(&[ChecklistItem::ProperClosing, ChecklistItem::GreetingProper])
                .build(),
        ];
        let summary = compliance_summary(&CallSet::all(&calls)).unwrap();
        // 5 for the GDPR notice plus 7 for the violation
        assert_eq!(summary.low_risk, 2);
        assert_eq!(summary.medium_risk, 1);
        assert_eq!(summary.high_risk, 0);
        assert_eq!(summary.critical_violation_calls, 1);
        assert!((summary.critical_violation_pct() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_failures_ranking() {
        let calls = vec![
            CallBuilder::new("CALL-1")
                .failed(&[ChecklistItem::OptOutOffered, ChecklistItem::ProperClosing])
                .build(),
            CallBuilder::new("CALL-2")
                .failed(&[ChecklistItem::OptOutOffered, ChecklistItem::GreetingProper])
                .build(),
            CallBuilder::new("CALL-3").build(),
            CallBuilder::new("CALL-4").build(),
        ];
        let top = top_failures(&CallSet::all(&calls), 2).unwrap();
        let items: Vec<ChecklistItem> = top.items.iter().map(|f| f.item).collect();
        // greeting and closing tie; checklist order puts greeting first
        assert_eq!(
            items,
            vec![ChecklistItem::OptOutOffered, ChecklistItem::GreetingProper]
        );
        assert_eq!(top.items[0].failure_pct, 50.0);
        assert_eq!(top.items[1].failure_pct, 25.0);

        let all = top_failures(&CallSet::all(&calls), 10).unwrap();
        assert_eq!(all.items.len(), 3);
    }
}
