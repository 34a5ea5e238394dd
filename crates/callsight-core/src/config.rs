//! Configuration for dataset generation

use crate::error::ConfigError;
use crate::types::Language;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CALL_COUNT_RANGE: (usize, usize) = (10, 1000);
pub const AGENT_COUNT_RANGE: (usize, usize) = (1, 50);
pub const WINDOW_DAYS_RANGE: (u32, u32) = (1, 365);

/// 2025-06-30T18:00:00Z
const DEFAULT_WINDOW_END_UNIX: i64 = 1_751_306_400;

/// Relative weights of call languages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageMix {
    pub cs: f64,
    pub sk: f64,
    pub en: f64,
}

impl LanguageMix {
    pub fn new() -> Self {
        Self {
            cs: 0.4,
            sk: 0.3,
            en: 0.3,
        }
    }

    pub fn weight(&self, language: Language) -> f64 {
        match language {
            Language::Cs => self.cs,
            Language::Sk => self.sk,
            Language::En => self.en,
        }
    }

    /// Weights in `Language::ALL` order
    pub fn weights(&self) -> [f64; 3] {
        Language::ALL.map(|l| self.weight(l))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for language in Language::ALL {
            let w = self.weight(language);
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::InvalidLanguageMix(format!(
                    "weight for {} must be finite and non-negative, got {}",
                    language.as_str(),
                    w
                )));
            }
        }
        if self.weights().iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::InvalidLanguageMix(
                "weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LanguageMix {
    fn default() -> Self {
        Self::new()
    }
}

/// Dataset generation parameters
///
/// Every field takes part in the reproducibility key: two configs that
/// compare equal generate identical datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of calls (10-1000)
    pub call_count: usize,

    /// Number of agents in the roster (1-50)
    pub agent_count: usize,

    /// Seed of the random source
    pub seed: u64,

    /// Let speaker changes overlap occasionally
    pub simulate_interruptions: bool,

    /// Language distribution
    pub language_mix: LanguageMix,

    /// End of the period call timestamps fall into
    pub window_end: DateTime<Utc>,

    /// Length of that period in days (1-365)
    pub window_days: u32,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self {
            call_count: 200,
            agent_count: 12,
            seed: 42,
            simulate_interruptions: false,
            language_mix: LanguageMix::new(),
            window_end: DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(DEFAULT_WINDOW_END_UNIX),
            window_days: 30,
        }
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn window_start(&self) -> DateTime<Utc> {
        self.window_end - Duration::days(self.window_days as i64)
    }

    /// Reject out-of-range parameters instead of clamping them
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = CALL_COUNT_RANGE;
        check_range("call_count", self.call_count as i64, min as i64, max as i64)?;
        let (min, max) = AGENT_COUNT_RANGE;
        check_range("agent_count", self.agent_count as i64, min as i64, max as i64)?;
        let (min, max) = WINDOW_DAYS_RANGE;
        check_range("window_days", self.window_days as i64, min as i64, max as i64)?;
        self.language_mix.validate()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
