//! Error types for configuration and record consistency

use thiserror::Error;

/// Invalid generation configuration. Fatal: no dataset is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric parameter outside its accepted range
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Language weights that cannot form a distribution
    #[error("invalid language mix: {0}")]
    InvalidLanguageMix(String),

    /// Malformed configuration file
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// A call record that breaks one of its structural invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyError {
    #[error("call {call_id}: non-positive duration {duration}")]
    InvalidDuration { call_id: String, duration: f64 },

    #[error("call {call_id}: segment {index} spans {start}..{end}")]
    InvalidSegment {
        call_id: String,
        index: usize,
        start: f64,
        end: f64,
    },

    #[error("call {call_id}: segment {index} starts or ends out of order with its predecessor")]
    UnorderedSegments { call_id: String, index: usize },

    #[error("call {call_id}: segment {index} ends at {end} past call duration {duration}")]
    SegmentPastEnd {
        call_id: String,
        index: usize,
        end: f64,
        duration: f64,
    },

    #[error("call {call_id}: silence {index} is malformed or overlaps its neighbour")]
    InvalidSilence { call_id: String, index: usize },

    #[error("call {call_id}: {field} = {value} is outside [{min}, {max}]")]
    ValueOutOfRange {
        call_id: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("call {call_id}: escalation reason does not match escalated flag")]
    EscalationMismatch { call_id: String },
}

impl ConsistencyError {
    pub fn call_id(&self) -> &str {
        match self {
            ConsistencyError::InvalidDuration { call_id, .. }
            | ConsistencyError::InvalidSegment { call_id, .. }
            | ConsistencyError::UnorderedSegments { call_id, .. }
            | ConsistencyError::SegmentPastEnd { call_id, .. }
            | ConsistencyError::InvalidSilence { call_id, .. }
            | ConsistencyError::ValueOutOfRange { call_id, .. }
            | ConsistencyError::EscalationMismatch { call_id } => call_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ConfigError::OutOfRange {
            field: "call_count",
            value: 5,
            min: 10,
            max: 1000,
        };
        assert_eq!(err.to_string(), "call_count = 5 is out of range [10, 1000]");
    }

    #[test]
    fn test_consistency_error_call_id() {
        let err = ConsistencyError::EscalationMismatch {
            call_id: "CALL-10001".to_string(),
        };
        assert_eq!(err.call_id(), "CALL-10001");
    }
}
