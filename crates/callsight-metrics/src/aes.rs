//! Agent Effectiveness Score

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::{round_to, Call, ResolutionStatus};
use serde::Serialize;

pub const SENTIMENT_WEIGHT: f64 = 0.25;
pub const COMPLIANCE_WEIGHT: f64 = 0.30;
pub const RESOLUTION_WEIGHT: f64 = 0.30;
pub const QUALITY_WEIGHT: f64 = 0.15;

/// Components of one call's AES, each normalized to [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AesBreakdown {
    pub sentiment: f64,
    pub compliance: f64,
    pub resolution: f64,
    pub quality: f64,
}

impl AesBreakdown {
    pub fn for_call(call: &Call) -> Self {
        Self {
            sentiment: sentiment_component(call.sentiment.delta()),
            compliance: call.compliance.score(),
            resolution: resolution_component(call.resolution.status),
            quality: call.quality.composite(),
        }
    }

    /// Weighted contributions in sentiment, compliance, resolution, quality order
    pub fn weighted(&self) -> [f64; 4] {
        [
            SENTIMENT_WEIGHT * self.sentiment,
            COMPLIANCE_WEIGHT * self.compliance,
            RESOLUTION_WEIGHT * self.resolution,
            QUALITY_WEIGHT * self.quality,
        ]
    }

    pub fn total(&self) -> f64 {
        round_to(self.weighted().iter().sum(), 1)
    }
}

/// Sentiment delta in [-2, 2] mapped onto [0, 100]
pub fn sentiment_component(delta: f64) -> f64 {
    ((delta + 2.0) / 4.0 * 100.0).clamp(0.0, 100.0)
}

pub fn resolution_component(status: ResolutionStatus) -> f64 {
    match status {
        ResolutionStatus::Full => 100.0,
        ResolutionStatus::Partial => 50.0,
        ResolutionStatus::None => 0.0,
    }
}

/// AES of one call, one decimal
pub fn aes(call: &Call) -> f64 {
    AesBreakdown::for_call(call).total()
}

/// AES distribution over a call set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AesSummary {
    pub scope: Scope,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Mean of each component over the set
    pub components: AesBreakdown,
}

pub fn aes_summary(set: &CallSet) -> Result<AesSummary, MetricsError> {
    set.require("aes", 1)?;

    let n = set.len() as f64;
    let scores: Vec<f64> = set.iter().map(aes).collect();
    let mean = scores.iter().sum::<f64>() / n;
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut components = AesBreakdown {
        sentiment: 0.0,
        compliance: 0.0,
        resolution: 0.0,
        quality: 0.0,
    };
    for call in set.iter() {
        let b = AesBreakdown::for_call(call);
        components.sentiment += b.sentiment / n;
        components.compliance += b.compliance / n;
        components.resolution += b.resolution / n;
        components.quality += b.quality / n;
    }

    Ok(AesSummary {
        scope: set.scope(),
        mean,
        min,
        max,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::ChecklistItem;

    #[test]
    fn test_sentiment_component_mapping() {
        assert_eq!(sentiment_component(-2.0), 0.0);
        assert_eq!(sentiment_component(0.0), 50.0);
        assert_eq!(sentiment_component(2.0), 100.0);
        assert_eq!(sentiment_component(3.0), 100.0);
    }

    #[test]
    fn test_aes_formula() {
        // sentiment delta 0.4 => 60, compliance 100, resolution 100, quality 80
        let call = CallBuilder::new("CALL-1").build();
        let expected = 0.25 * 60.0 + 0.30 * 100.0 + 0.30 * 100.0 + 0.15 * 80.0;
        assert_eq!(aes(&call), round_to(expected, 1));
    }

    #[test]
    fn test_aes_with_partial_resolution_and_failures() {
        let call = CallBuilder::new("CALL-1")
            .resolution(ResolutionStatus::Partial, true, false)
            .failed(&[ChecklistItem::OptOutOffered, ChecklistItem::ProperClosing])
            .sentiment(-0.5, -0.5)
            .quality(50.0)
            .build();
        let breakdown = AesBreakdown::for_call(&call);
        assert_eq!(breakdown.compliance, 77.8);
        assert_eq!(breakdown.resolution, 50.0);
        assert_eq!(breakdown.sentiment, 50.0);
        assert_eq!(breakdown.total(), round_to(12.5 + 23.34 + 15.0 + 7.5, 1));
    }

    #[test]
    fn test_aes_bounds_at_extremes() {
        let worst = CallBuilder::new("CALL-1")
            .resolution(ResolutionStatus::None, true, false)
            .failed(&ChecklistItem::ALL)
            .sentiment(1.0, -1.0)
            .quality(0.0)
            .build();
        let best = CallBuilder::new("CALL-2").sentiment(-1.0, 1.0).quality(100.0).build();
        assert_eq!(aes(&worst), 0.0);
        assert_eq!(aes(&best), 100.0);
    }

    #[test]
    fn test_summary_requires_calls() {
        let calls = vec![];
        let set = CallSet::all(&calls);
        assert!(matches!(
            aes_summary(&set),
            Err(MetricsError::InsufficientData { metric: "aes", .. })
        ));
    }

    #[test]
    fn test_summary_stats() {
        let calls = vec![
            CallBuilder::new("CALL-1").build(),
            CallBuilder::new("CALL-2")
                .resolution(ResolutionStatus::None, false, false)
                .build(),
        ];
        let set = CallSet::all(&calls);
        let summary = aes_summary(&set).unwrap();
        assert_eq!(summary.scope.call_count, 2);
        assert_eq!(summary.max, 87.0);
        assert_eq!(summary.min, 57.0);
        assert!((summary.mean - 72.0).abs() < 1e-9);
        assert!((summary.components.resolution - 50.0).abs() < 1e-9);
    }
}
