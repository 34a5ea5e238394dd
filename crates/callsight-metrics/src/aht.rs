//! Average handle time against a target

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use serde::Serialize;

pub const DEFAULT_AHT_TARGET_SECS: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AhtSummary {
    pub scope: Scope,
    pub mean_secs: f64,
    pub target_secs: f64,
    /// Mean minus target; positive means slower than target
    pub variance_secs: f64,
}

impl AhtSummary {
    pub fn mean_minutes(&self) -> f64 {
        self.mean_secs / 60.0
    }

    pub fn variance_pct(&self) -> f64 {
        self.variance_secs / self.target_secs * 100.0
    }
}

pub fn aht_summary(set: &CallSet, target_secs: f64) -> Result<AhtSummary, MetricsError> {
    let Some(mean_secs) = set.mean_of(|c| c.duration_sec) else {
        return Err(MetricsError::insufficient("aht", 1, 0));
    };
    Ok(AhtSummary {
        scope: set.scope(),
        mean_secs,
        target_secs,
        variance_secs: mean_secs - target_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::Call;

    #[test]
    fn test_aht_against_target() {
        let calls = vec![
            CallBuilder::new("CALL-1").duration(300.0).build(),
            CallBuilder::new("CALL-2").duration(420.0).build(),
        ];
        let summary = aht_summary(&CallSet::all(&calls), DEFAULT_AHT_TARGET_SECS).unwrap();
        assert_eq!(summary.mean_secs, 360.0);
        assert_eq!(summary.mean_minutes(), 6.0);
        assert_eq!(summary.variance_secs, 60.0);
        assert_eq!(summary.variance_pct(), 20.0);
    }

    #[test]
    fn test_empty_set() {
        let calls: Vec<Call> = vec![];
        assert_eq!(
            aht_summary(&CallSet::all(&calls), DEFAULT_AHT_TARGET_SECS),
            Err(MetricsError::insufficient("aht", 1, 0))
        );
    }
}
