use thiserror::Error;

/// Errors returned by metrics that need a minimum amount of data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The call set (or the relevant part of it) is empty or too small
    #[error("insufficient data for {metric}: need at least {required}, have {available}")]
    InsufficientData {
        metric: &'static str,
        required: usize,
        available: usize,
    },
}

impl MetricsError {
    pub fn insufficient(metric: &'static str, required: usize, available: usize) -> Self {
        MetricsError::InsufficientData {
            metric,
            required,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_metric() {
        let err = MetricsError::insufficient("fcr", 1, 0);
        assert_eq!(
            err.to_string(),
            "insufficient data for fcr: need at least 1, have 0"
        );
    }
}
