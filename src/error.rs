//! Error types.

use thiserror::Error;

/// Input outside the domain of the sector partitioner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Percentages and spans are undefined when nothing is being divided.
    #[error("total magnitude must be positive, got {0}")]
    NonPositiveTotal(f64),
    /// Every magnitude is finite but their sum is not.
    #[error("total magnitude overflowed to {0}")]
    NonFiniteTotal(f64),
    #[error("magnitude at index {index} must be finite and non-negative, got {value}")]
    InvalidMagnitude { index: usize, value: f64 },
    #[error("expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Failure to load or validate a chart configuration.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DomainError::NonPositiveTotal(0.0).to_string(),
            "total magnitude must be positive, got 0"
        );
        assert_eq!(
            DomainError::NonFiniteTotal(f64::INFINITY).to_string(),
            "total magnitude overflowed to inf"
        );
        assert_eq!(
            DomainError::LengthMismatch {
                what: "labels",
                expected: 3,
                actual: 2
            }
            .to_string(),
            "expected 3 labels, got 2"
        );
    }
}
