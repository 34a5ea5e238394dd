//! Sentiment buckets, transition matrix and improvement KPIs

use crate::callset::{CallSet, Scope};
use crate::error::MetricsError;
use callsight_core::SentimentTrend;
use serde::Serialize;

const BUCKET_THRESHOLD: f64 = 0.2;
const CHANGE_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBucket {
    Negative,
    Neutral,
    Positive,
}

impl SentimentBucket {
    pub const ALL: [SentimentBucket; 3] = [
        SentimentBucket::Negative,
        SentimentBucket::Neutral,
        SentimentBucket::Positive,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBucket::Negative => "Neg",
            SentimentBucket::Neutral => "Neutral",
            SentimentBucket::Positive => "Pos",
        }
    }
}

pub fn bucket(value: f64) -> SentimentBucket {
    if value < -BUCKET_THRESHOLD {
        SentimentBucket::Negative
    } else if value > BUCKET_THRESHOLD {
        SentimentBucket::Positive
    } else {
        SentimentBucket::Neutral
    }
}

/// Counts of (start bucket, end bucket) pairs; rows are start buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMatrix {
    pub scope: Scope,
    pub counts: [[usize; 3]; 3],
}

impl TransitionMatrix {
    pub fn count(&self, from: SentimentBucket, to: SentimentBucket) -> usize {
        self.counts[from.index()][to.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    fn row_total(&self, from: SentimentBucket) -> usize {
        self.counts[from.index()].iter().sum()
    }

    fn column_total(&self, to: SentimentBucket) -> usize {
        self.counts.iter().map(|row| row[to.index()]).sum()
    }

    /// Share of calls starting in `from` that ended in `to`; `None` for an empty row
    pub fn row_pct(&self, from: SentimentBucket, to: SentimentBucket) -> Option<f64> {
        pct(self.count(from, to), self.row_total(from))
    }

    /// Share of calls ending in `to` that started in `from`; `None` for an empty column
    pub fn column_pct(&self, from: SentimentBucket, to: SentimentBucket) -> Option<f64> {
        pct(self.count(from, to), self.column_total(to))
    }

    pub fn total_pct(&self, from: SentimentBucket, to: SentimentBucket) -> Option<f64> {
        pct(self.count(from, to), self.total())
    }
}

fn pct(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

pub fn transition_matrix(set: &CallSet) -> Result<TransitionMatrix, MetricsError> {
    set.require("sentiment transitions", 1)?;
    let mut counts = [[0usize; 3]; 3];
    for call in set.iter() {
        let from = bucket(call.sentiment.start);
        let to = bucket(call.sentiment.end);
        counts[from.index()][to.index()] += 1;
    }
    Ok(TransitionMatrix {
        scope: set.scope(),
        counts,
    })
}

/// Direction of one call's sentiment change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentChange {
    Improving,
    Stable,
    Deteriorating,
}

pub fn classify_change(delta: f64) -> SentimentChange {
    if delta > CHANGE_THRESHOLD {
        SentimentChange::Improving
    } else if delta < -CHANGE_THRESHOLD {
        SentimentChange::Deteriorating
    } else {
        SentimentChange::Stable
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentKpis {
    pub scope: Scope,
    pub improving: usize,
    pub stable: usize,
    pub deteriorating: usize,
    pub improving_pct: f64,
    pub stable_pct: f64,
    pub deteriorating_pct: f64,
    pub mean_delta: f64,
    /// Calls whose delta exceeds 0.3
    pub strong_improvement: usize,
    /// Mean recovery rate over calls that opened negative; `None` when none did
    pub mean_recovery_rate: Option<f64>,
}

pub fn sentiment_kpis(set: &CallSet) -> Result<SentimentKpis, MetricsError> {
    set.require("sentiment kpis", 1)?;
    let n = set.len();
    let (mut improving, mut stable, mut deteriorating, mut strong) = (0, 0, 0, 0);
    let mut delta_sum = 0.0;
    let mut recovery = Vec::new();

    for call in set.iter() {
        let journey = call.sentiment;
        match classify_change(journey.delta()) {
            SentimentChange::Improving => improving += 1,
            SentimentChange::Stable => stable += 1,
            SentimentChange::Deteriorating => deteriorating += 1,
        }
        if journey.trend() == SentimentTrend::StrongImprovement {
            strong += 1;
        }
        if journey.start < 0.0 {
            recovery.push(journey.recovery_rate());
        }
        delta_sum += journey.delta();
    }

    let share = |count: usize| count as f64 / n as f64 * 100.0;
    let mean_recovery_rate =
        (!recovery.is_empty()).then(|| recovery.iter().sum::<f64>() / recovery.len() as f64);

    Ok(SentimentKpis {
        scope: set.scope(),
        improving,
        stable,
        deteriorating,
        improving_pct: share(improving),
        stable_pct: share(stable),
        deteriorating_pct: share(deteriorating),
        mean_delta: delta_sum / n as f64,
        strong_improvement: strong,
        mean_recovery_rate,
    })
}
