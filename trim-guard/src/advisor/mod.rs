//! Automatic trim selection driven by sample skewness.
//!
//! The advisor estimates the third standardized moment of a sample, looks the
//! magnitude up in a [`TrimPolicy`] and trims both tails by the recommended
//! fraction. The direction of the skew is reported in the [`Interpretation`]
//! but does not change how the trim is split.
//!
//! # Examples
//!
//! ```rust
//! use trim_guard::advisor::{auto_trimmed_mean, Interpretation};
//!
//! let sample = vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
//! let (mean, recommendation) = auto_trimmed_mean(&sample).unwrap();
//!
//! assert_eq!(mean, 0.0);
//! assert_eq!(recommendation.interpretation, Interpretation::ApproximatelySymmetric);
//! assert_eq!(recommendation.low_trim, 0.0);
//! ```

pub mod policy;
pub mod skewness;

pub use policy::{
    Interpretation, SkewDirection, SkewStrength, TrimBand, TrimPolicy, MILD_SKEW_LIMIT,
    MILD_TRIM, MODERATE_SKEW_LIMIT, MODERATE_TRIM, STANDARD_BANDS, STRONG_TRIM,
    SYMMETRIC_SKEW_LIMIT,
};
pub use skewness::{moments, skewness, Moments};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::TrimResult;
use crate::sample::SampleValue;
use crate::trim::{trimmed_mean_with, TrimSpec};

/// A recommended trim for a sample, with the skewness that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Fraction to trim from the low tail.
    pub low_trim: f64,
    /// Fraction to trim from the high tail; mirrors `low_trim`.
    pub high_trim: f64,
    /// Third standardized moment of the sample.
    pub skewness: f64,
    /// Qualitative reading of `skewness`.
    pub interpretation: Interpretation,
}

impl Recommendation {
    /// Returns the recommended trim as a validated spec.
    pub fn trim_spec(&self) -> TrimResult<TrimSpec> {
        TrimSpec::new(self.low_trim, self.high_trim)
    }
}

/// Recommends trims from a policy table and applies them.
#[derive(Debug, Clone, Default)]
pub struct AutoTrimAdvisor {
    policy: TrimPolicy,
}

impl AutoTrimAdvisor {
    /// Creates an advisor using the standard policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the policy table.
    pub fn with_policy(mut self, policy: TrimPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the policy table in use.
    pub fn policy(&self) -> &TrimPolicy {
        &self.policy
    }

    /// Computes the skewness of `sample` and maps it to a recommendation.
    #[instrument(level = "debug", skip(self, sample), fields(sample_size = sample.len()))]
    pub fn recommend<T: SampleValue>(&self, sample: &[T]) -> TrimResult<Recommendation> {
        let skewness = skewness(sample)?;
        let band = self.policy.classify(skewness);

        let recommendation = Recommendation {
            low_trim: band.trim,
            high_trim: band.trim,
            skewness,
            interpretation: Interpretation::new(band.strength, skewness),
        };

        debug!(
            skewness,
            trim = band.trim,
            interpretation = %recommendation.interpretation,
            "Recommended trim"
        );

        Ok(recommendation)
    }

    /// Recommends a trim for `sample` and returns the resulting trimmed mean.
    pub fn trimmed_mean<T: SampleValue>(&self, sample: &[T]) -> TrimResult<(f64, Recommendation)> {
        let recommendation = self.recommend(sample)?;
        let mean = trimmed_mean_with(sample, recommendation.trim_spec()?)?;
        Ok((mean, recommendation))
    }
}

/// Trimmed mean of a floating-point sample with a skewness-based trim.
pub fn auto_trimmed_mean(sample: &[f64]) -> TrimResult<(f64, Recommendation)> {
    AutoTrimAdvisor::new().trimmed_mean(sample)
}

/// Trimmed mean of an integer sample with a skewness-based trim.
pub fn auto_trimmed_mean_ints(sample: &[i64]) -> TrimResult<(f64, Recommendation)> {
    AutoTrimAdvisor::new().trimmed_mean(sample)
}
