//! Screened, filtered views over a call dataset

use crate::error::MetricsError;
use crate::filter::CallFilter;
use callsight_core::Call;
use serde::Serialize;

/// Which calls an aggregate was computed over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    /// Description of the active filter
    pub filter: String,
    pub call_count: usize,
    /// Calls that matched the filter but failed validation
    pub excluded: usize,
}

/// Borrowed, validated selection of calls
///
/// Calls breaking a structural invariant are logged and left out, so every
/// metric can assume well-formed records.
#[derive(Debug, Clone)]
pub struct CallSet<'a> {
    calls: Vec<&'a Call>,
    scope: Scope,
}

impl<'a> CallSet<'a> {
    /// Apply `filter`, then drop inconsistent calls
    pub fn screen(calls: &'a [Call], filter: &CallFilter) -> Self {
        let mut kept = Vec::new();
        let mut excluded = 0;
        for call in calls.iter().filter(|c| filter.matches(c)) {
            match call.validate() {
                Ok(()) => kept.push(call),
                Err(e) => {
                    tracing::warn!(call_id = %call.call_id, error = %e, "excluding inconsistent call");
                    excluded += 1;
                }
            }
        }

        let scope = Scope {
            filter: filter.describe(),
            call_count: kept.len(),
            excluded,
        };
        tracing::debug!(filter = %scope.filter, calls = scope.call_count, excluded, "screened call set");
        Self { calls: kept, scope }
    }

    /// Every consistent call
    pub fn all(calls: &'a [Call]) -> Self {
        Self::screen(calls, &CallFilter::new())
    }

    /// Narrow an already screened set; `label` is appended to the scope
    pub fn subset(&self, label: &str, predicate: impl Fn(&Call) -> bool) -> CallSet<'a> {
        let calls: Vec<&'a Call> = self.calls.iter().copied().filter(|c| predicate(c)).collect();
        let filter = if self.scope.filter == "all calls" {
            label.to_string()
        } else {
            format!("{}, {}", self.scope.filter, label)
        };
        CallSet {
            scope: Scope {
                filter,
                call_count: calls.len(),
                excluded: 0,
            },
            calls,
        }
    }

    pub fn calls(&self) -> &[&'a Call] {
        &self.calls
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Call> + '_ {
        self.calls.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn scope(&self) -> Scope {
        self.scope.clone()
    }

    /// Fail with `InsufficientData` unless at least `required` calls are present
    pub fn require(&self, metric: &'static str, required: usize) -> Result<(), MetricsError> {
        if self.len() < required {
            return Err(MetricsError::insufficient(metric, required, self.len()));
        }
        Ok(())
    }

    /// Mean of `f` over the set; `None` when empty
    pub fn mean_of(&self, f: impl Fn(&Call) -> f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().map(f).sum::<f64>() / self.len() as f64)
    }
}
