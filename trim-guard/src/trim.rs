//! Fixed-fraction trimmed means with interpolated tail trimming.
//!
//! The sample is sorted and `low * n` values are removed from the bottom,
//! `high * n` from the top. Trim counts are real numbers: the whole part drops
//! complete elements, and a fractional remainder `f` leaves the next boundary
//! element in the average with weight `1 - f`. This keeps the estimator
//! continuous in the trim fraction, which matters for small samples where
//! e.g. 5% of 37 observations is not a whole number of elements.
//!
//! # Examples
//!
//! ```rust
//! use trim_guard::trim::{trimmed_mean, trimmed_mean_ints};
//!
//! // Drops one value from each end and averages [20, 30, 40].
//! let mean = trimmed_mean_ints(&[10, 20, 30, 40, 50], 0.2, None).unwrap();
//! assert_eq!(mean, 30.0);
//!
//! // Asymmetric: trim only the upper tail.
//! let mean = trimmed_mean(&[1.0, 2.0, 3.0, 100.0], 0.0, Some(0.25)).unwrap();
//! assert_eq!(mean, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::error::{TrimError, TrimResult};
use crate::sample::{sorted_copy, SampleValue};

/// Upper bound (exclusive) for a single tail fraction.
pub const MAX_TAIL_FRACTION: f64 = 0.5;

/// Trim counts closer than this to a whole number are treated as whole.
///
/// Absorbs representation error in products like `0.05 * 100`.
pub const COUNT_TOLERANCE: f64 = 1e-9;

/// A validated pair of tail fractions.
///
/// Each fraction lies in `[0, 0.5)` and their sum is below 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrimSpec")]
pub struct TrimSpec {
    low: f64,
    high: f64,
}

impl TrimSpec {
    /// No trimming; the trimmed mean equals the arithmetic mean.
    pub const NONE: TrimSpec = TrimSpec {
        low: 0.0,
        high: 0.0,
    };

    /// Creates a trim specification with independent tail fractions.
    pub fn new(low: f64, high: f64) -> TrimResult<Self> {
        if !(0.0..MAX_TAIL_FRACTION).contains(&low) {
            return Err(TrimError::invalid_fraction(
                low,
                high,
                "low fraction must lie in [0, 0.5)",
            ));
        }
        if !(0.0..MAX_TAIL_FRACTION).contains(&high) {
            return Err(TrimError::invalid_fraction(
                low,
                high,
                "high fraction must lie in [0, 0.5)",
            ));
        }
        if low + high >= 1.0 {
            return Err(TrimError::invalid_fraction(
                low,
                high,
                "fractions must sum to less than 1.0",
            ));
        }
        Ok(Self { low, high })
    }

    /// Creates a specification trimming the same fraction from both tails.
    pub fn symmetric(fraction: f64) -> TrimResult<Self> {
        Self::new(fraction, fraction)
    }

    /// Returns the low-tail fraction.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the high-tail fraction.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns true if both tails are trimmed equally.
    pub fn is_symmetric(&self) -> bool {
        self.low == self.high
    }

    /// Fraction of the sample's weight that survives trimming.
    pub fn retained_fraction(&self) -> f64 {
        1.0 - self.low - self.high
    }
}

#[derive(Deserialize)]
struct RawTrimSpec {
    low: f64,
    high: f64,
}

impl TryFrom<RawTrimSpec> for TrimSpec {
    type Error = TrimError;

    fn try_from(raw: RawTrimSpec) -> TrimResult<Self> {
        TrimSpec::new(raw.low, raw.high)
    }
}

impl Default for TrimSpec {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for TrimSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "low={:.1}%, high={:.1}%",
            self.low * 100.0,
            self.high * 100.0
        )
    }
}

/// Computes the trimmed mean of a floating-point sample.
///
/// `high_trim` defaults to `low_trim` when `None`, giving a symmetric trim.
pub fn trimmed_mean(sample: &[f64], low_trim: f64, high_trim: Option<f64>) -> TrimResult<f64> {
    let spec = TrimSpec::new(low_trim, high_trim.unwrap_or(low_trim))?;
    trimmed_mean_with(sample, spec)
}

/// Computes the trimmed mean of an integer sample.
///
/// The values are converted to `f64` first; the result is a floating-point
/// mean regardless of the element type.
pub fn trimmed_mean_ints(sample: &[i64], low_trim: f64, high_trim: Option<f64>) -> TrimResult<f64> {
    let spec = TrimSpec::new(low_trim, high_trim.unwrap_or(low_trim))?;
    trimmed_mean_with(sample, spec)
}

/// Computes the trimmed mean of any numeric sample under a validated spec.
#[instrument(level = "debug", skip(sample, spec), fields(sample_size = sample.len(), spec = %spec))]
pub fn trimmed_mean_with<T: SampleValue>(sample: &[T], spec: TrimSpec) -> TrimResult<f64> {
    let sorted = sorted_copy(sample)?;
    trimmed_mean_sorted(&sorted, spec)
}

/// Computes the trimmed mean of a sample already sorted ascending.
///
/// The caller is responsible for ordering and finiteness; prefer
/// [`trimmed_mean_with`] unless a sorted buffer is already at hand.
pub fn trimmed_mean_sorted(sorted: &[f64], spec: TrimSpec) -> TrimResult<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(TrimError::EmptyInput);
    }

    let empty = || TrimError::EmptyResult {
        sample_size: n,
        low: spec.low,
        high: spec.high,
    };

    let low_count = snap_count(spec.low * n as f64);
    let high_count = snap_count(spec.high * n as f64);
    let low_whole = low_count.floor();
    let high_whole = high_count.floor();
    let low_frac = low_count - low_whole;
    let high_frac = high_count - high_whole;

    let first = low_whole as usize;
    let last = n
        .checked_sub(high_whole as usize + 1)
        .ok_or_else(empty)?;

    if first > last {
        return Err(empty());
    }

    // A single value cannot be trimmed at all.
    if n == 1 && (spec.low > 0.0 || spec.high > 0.0) {
        return Err(empty());
    }

    let (sum, weight) = if first == last {
        // Both fractional cuts land on the same rank.
        let weight = 1.0 - low_frac - high_frac;
        (sorted[first] * weight, weight)
    } else {
        let low_weight = 1.0 - low_frac;
        let high_weight = 1.0 - high_frac;
        let interior = &sorted[first + 1..last];
        let interior_sum: f64 = interior.iter().sum();
        (
            sorted[first] * low_weight + interior_sum + sorted[last] * high_weight,
            interior.len() as f64 + low_weight + high_weight,
        )
    };

    if weight <= 0.0 {
        return Err(empty());
    }

    debug!(
        low_count,
        high_count,
        retained_weight = weight,
        "Trimmed sample"
    );

    Ok(sum / weight)
}

/// Snaps a trim count to the nearest whole number when within tolerance.
fn snap_count(count: f64) -> f64 {
    let rounded = count.round();
    if (count - rounded).abs() < COUNT_TOLERANCE {
        rounded
    } else {
        count
    }
}
