//! Error types for the trim-guard library.
//!
//! Every fallible operation in the crate returns [`TrimResult`]. Errors are
//! terminal for the single call that produced them: the computations are pure,
//! so there is nothing to retry.

use thiserror::Error;

/// The main error type for trimmed-mean computation and trim advice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrimError {
    /// A trim fraction is outside `[0, 0.5)`, or the pair sums to 1.0 or more.
    #[error("Invalid trim fraction (low={low}, high={high}): {reason}")]
    InvalidTrimFraction {
        /// Requested low-tail fraction
        low: f64,
        /// Requested high-tail fraction
        high: f64,
        /// Which rule the pair violates
        reason: String,
    },

    /// The sample has no elements.
    #[error("Sample is empty")]
    EmptyInput,

    /// Trimming left no effective weight to average.
    #[error(
        "Nothing remains after trimming {sample_size} values (low={low}, high={high})"
    )]
    EmptyResult {
        /// Number of values in the sample
        sample_size: usize,
        /// Low-tail fraction that was applied
        low: f64,
        /// High-tail fraction that was applied
        high: f64,
    },

    /// Skewness cannot be computed for the sample.
    #[error("Skewness is undefined for a sample of {sample_size} values: {reason}")]
    UndefinedSkewness {
        /// Number of values in the sample
        sample_size: usize,
        /// Why the third standardized moment does not exist
        reason: String,
    },

    /// The sample contains NaN or an infinity.
    #[error("Sample value at index {index} is not finite: {value}")]
    NonFiniteValue {
        /// Position of the offending value in the caller's sample
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A trim policy band table is malformed.
    #[error("Invalid trim policy: {0}")]
    InvalidPolicy(String),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, TrimError>`.
pub type TrimResult<T> = std::result::Result<T, TrimError>;

impl TrimError {
    /// Creates an invalid trim fraction error for the given pair.
    pub fn invalid_fraction(low: f64, high: f64, reason: impl Into<String>) -> Self {
        Self::InvalidTrimFraction {
            low,
            high,
            reason: reason.into(),
        }
    }

    /// Creates an undefined skewness error.
    pub fn undefined_skewness(sample_size: usize, reason: impl Into<String>) -> Self {
        Self::UndefinedSkewness {
            sample_size,
            reason: reason.into(),
        }
    }

    /// Creates an invalid policy error.
    pub fn invalid_policy(msg: impl Into<String>) -> Self {
        Self::InvalidPolicy(msg.into())
    }
}

impl From<serde_json::Error> for TrimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TrimError::invalid_fraction(0.6, 0.6, "low must lie in [0, 0.5)");
        assert_eq!(
            err.to_string(),
            "Invalid trim fraction (low=0.6, high=0.6): low must lie in [0, 0.5)"
        );

        let err = TrimError::EmptyResult {
            sample_size: 1,
            low: 0.1,
            high: 0.1,
        };
        assert!(err.to_string().contains("trimming 1 values"));

        let err = TrimError::undefined_skewness(5, "sample is constant");
        assert_eq!(
            err.to_string(),
            "Skewness is undefined for a sample of 5 values: sample is constant"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err: TrimError = parse_err.into();
        assert!(matches!(err, TrimError::Serialization(_)));
    }
}
