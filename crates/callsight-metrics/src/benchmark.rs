//! Comparison of a KPI value against its benchmark

use serde::Serialize;

/// Relative band around the benchmark counted as on target
pub const ON_TARGET_TOLERANCE: f64 = 0.05;

/// Where a value sits relative to its benchmark, in the favorable sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    AboveTarget,
    OnTarget,
    BelowTarget,
}

impl BenchmarkStatus {
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkStatus::AboveTarget => "Above Target",
            BenchmarkStatus::OnTarget => "On Target",
            BenchmarkStatus::BelowTarget => "Below Target",
        }
    }
}

/// Compare `value` with `benchmark`
///
/// With `higher_is_better` unset (handle time, risk) a value below the
/// benchmark counts as above target.
pub fn compare_to_benchmark(value: f64, benchmark: f64, higher_is_better: bool) -> BenchmarkStatus {
    let band = benchmark.abs() * ON_TARGET_TOLERANCE;
    if (value - benchmark).abs() <= band {
        return BenchmarkStatus::OnTarget;
    }
    let better = if higher_is_better {
        value > benchmark
    } else {
        value < benchmark
    };
    if better {
        BenchmarkStatus::AboveTarget
    } else {
        BenchmarkStatus::BelowTarget
    }
}
