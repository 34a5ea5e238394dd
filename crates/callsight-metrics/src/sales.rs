//! Sales opportunity conversion

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::{OpportunityKind, SalesOpportunity};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindConversion {
    pub kind: OpportunityKind,
    pub opportunities: usize,
    pub won: usize,
    pub won_value_eur: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub scope: Scope,
    pub opportunities: usize,
    pub won: usize,
    /// In [0, 1]
    pub conversion_rate: f64,
    pub won_value_eur: f64,
    /// Kinds with at least one opportunity, in declaration order
    pub by_kind: Vec<KindConversion>,
}

pub fn sales_summary(set: &CallSet) -> Result<SalesSummary, MetricsError> {
    let opportunities: Vec<&SalesOpportunity> =
        set.iter().filter_map(|c| c.sales_opportunity.as_ref()).collect();
    if opportunities.is_empty() {
        return Err(MetricsError::insufficient("sales conversion", 1, 0));
    }

    let by_kind = [
        OpportunityKind::Upsell,
        OpportunityKind::CrossSell,
        OpportunityKind::Closing,
    ]
    .into_iter()
    .map(|kind| {
        let of_kind: Vec<_> = opportunities.iter().filter(|o| o.kind == kind).collect();
        KindConversion {
            kind,
            opportunities: of_kind.len(),
            won: of_kind.iter().filter(|o| o.success).count(),
            won_value_eur: of_kind
                .iter()
                .filter(|o| o.success)
                .map(|o| o.value_eur)
                .sum(),
        }
    })
    .filter(|k| k.opportunities > 0)
    .collect();

    let won = opportunities.iter().filter(|o| o.success).count();
    Ok(SalesSummary {
        scope: set.scope(),
        opportunities: opportunities.len(),
        won,
        conversion_rate: won as f64 / opportunities.len() as f64,
        won_value_eur: opportunities
            .iter()
            .filter(|o| o.success)
            .map(|o| o.value_eur)
            .sum(),
        by_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallBuilder;
    use callsight_core::{Call, Team};

    fn with_opportunity(id: &str, kind: OpportunityKind, success: bool, value: f64) -> Call {
        let mut call = CallBuilder::new(id).team(Team::Sales).build();
        call.sales_opportunity = Some(SalesOpportunity {
            kind,
            success,
            value_eur: value,
            product: "Premium Plan".to_string(),
        });
        call
    }

    #[test]
    fn test_conversion() {
        let calls = vec![
            with_opportunity("CALL-1", OpportunityKind::Upsell, true, 120.0),
            with_opportunity("CALL-2", OpportunityKind::Upsell, false, 80.0),
            with_opportunity("CALL-3", OpportunityKind::Closing, true, 300.0),
            CallBuilder::new("CALL-4").build(),
        ];
        let summary = sales_summary(&CallSet::all(&calls)).unwrap();
        assert_eq!(summary.opportunities, 3);
        assert_eq!(summary.won, 2);
        assert!((summary.conversion_rate - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.won_value_eur, 420.0);
        assert_eq!(summary.by_kind.len(), 2);
        assert_eq!(summary.by_kind[0].kind, OpportunityKind::Upsell);
        assert_eq!(summary.by_kind[0].won, 1);
    }

    #[test]
    fn test_no_opportunities() {
        let calls = vec![CallBuilder::new("CALL-1").build()];
        assert!(sales_summary(&CallSet::all(&calls)).is_err());
    }
}
