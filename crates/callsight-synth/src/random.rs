//! Seeded random source threaded explicitly through every generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random source
///
/// One instance is created per generation run and passed by `&mut` from
/// stage to stage, so any sub-generator can be driven from a known state.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// True with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniform in [low, high)
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Uniform integer in [low, high]
    pub fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    /// Uniform index into a collection of `len` items; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Uniformly chosen element of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Index drawn proportionally to `weights`
    ///
    /// Weights must be non-negative with a positive sum.
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let target = self.unit() * total;
        let mut cumulative = 0.0;
        let mut last_positive = 0;
        for (i, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = i;
            if target < cumulative {
                return i;
            }
        }
        last_positive
    }

    /// Normal variate (Box-Muller)
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = 1.0 - self.unit();
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// `k` distinct elements in sampling order
    pub fn sample_distinct<'a, T>(&mut self, items: &'a [T], k: usize) -> Vec<&'a T> {
        rand::seq::index::sample(&mut self.rng, items.len(), k.min(items.len()))
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }
}
