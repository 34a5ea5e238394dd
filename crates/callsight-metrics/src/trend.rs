//! Daily quality component trend

use crate::aes::aes;
use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::Call;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const TREND_DAYS: usize = 7;

/// Means over one day's calls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyQuality {
    pub calls: usize,
    pub active_listening: f64,
    pub empathy: f64,
    pub solution: f64,
    pub professional_tone: f64,
    pub aes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum DayQuality {
    Measured(DailyQuality),
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendDay {
    pub date: NaiveDate,
    pub quality: DayQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityTrend {
    pub scope: Scope,
    /// Oldest first, ending at the latest call date
    pub days: Vec<TrendDay>,
}

/// One row per calendar day over the `days` days ending at the latest call
///
/// Days without calls are reported as [`DayQuality::NoData`].
pub fn quality_trend(set: &CallSet, days: usize) -> Result<QualityTrend, MetricsError> {
    set.require("quality trend", 1)?;
    let Some(latest) = set.iter().map(Call::date).max() else {
        return Err(MetricsError::insufficient("quality trend", 1, 0));
    };

    let rows = (0..days)
        .rev()
        .map(|back| {
            let date = latest - Duration::days(back as i64);
            let calls: Vec<&Call> = set.iter().filter(|c| c.date() == date).collect();
            TrendDay {
                date,
                quality: daily_means(&calls),
            }
        })
        .collect();

    Ok(QualityTrend {
        scope: set.scope(),
        days: rows,
    })
}

fn daily_means(calls: &[&Call]) -> DayQuality {
    if calls.is_empty() {
        return DayQuality::NoData;
    }
    let n = calls.len() as f64;
    let mean = |f: &dyn Fn(&Call) -> f64| calls.iter().map(|c| f(*c)).sum::<f64>() / n;
    DayQuality::Measured(DailyQuality {
        calls: calls.len(),
        active_listening: mean(&|c| c.quality.active_listening),
        empathy: mean(&|c| c.quality.empathy),
        solution: mean(&|c| c.quality.solution),
        professional_tone: mean(&|c| c.quality.professional_tone),
        aes: mean(&aes),
    })
}
