//! Sample moments and the third standardized moment.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{TrimError, TrimResult};
use crate::sample::{to_f64_vec, SampleValue};

/// Central moments of a sample, as used by the trim advisor.
///
/// `std_dev` is the population standard deviation (divisor `n`), and
/// `skewness` is the moment coefficient `m3 / m2^(3/2)` without small-sample
/// correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Third standardized moment.
    pub skewness: f64,
}

/// Computes the mean, population standard deviation and skewness of a sample.
///
/// Uses two passes over the data in input order so results are reproducible.
/// Fails with [`TrimError::UndefinedSkewness`] when the sample has fewer than
/// two values or no spread.
#[instrument(level = "debug", skip(sample), fields(sample_size = sample.len()))]
pub fn moments<T: SampleValue>(sample: &[T]) -> TrimResult<Moments> {
    let values = to_f64_vec(sample)?;
    let count = values.len();
    if count < 2 {
        return Err(TrimError::undefined_skewness(
            count,
            "at least two values are required",
        ));
    }

    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return Err(TrimError::undefined_skewness(count, "sample is constant"));
    }

    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    if !mean.is_finite() {
        return Err(TrimError::undefined_skewness(count, "mean overflows"));
    }

    // Moments of deviations scaled into [-1, 1] cannot overflow.
    let scale = values
        .iter()
        .fold(0.0f64, |acc, &v| acc.max((v - mean).abs()));
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), &v| {
        let d = (v - mean) / scale;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d)
    });
    let m2 = m2 / n;
    let m3 = m3 / n;

    let std_dev = scale * m2.sqrt();
    if m2 == 0.0 || !std_dev.is_finite() {
        return Err(TrimError::undefined_skewness(
            count,
            "standard deviation is zero or not finite",
        ));
    }

    let skewness = m3 / (m2 * m2.sqrt());
    if !skewness.is_finite() {
        return Err(TrimError::undefined_skewness(count, "skewness is not finite"));
    }
    debug!(mean, std_dev, skewness, "Computed sample moments");

    Ok(Moments {
        count,
        mean,
        std_dev,
        skewness,
    })
}

/// Computes the sample skewness (third standardized moment).
pub fn skewness<T: SampleValue>(sample: &[T]) -> TrimResult<f64> {
    moments(sample).map(|m| m.skewness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let sample = vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let m = moments(&sample).unwrap();
        assert_eq!(m.count, 7);
        assert!(m.mean.abs() < 1e-12);
        assert!((m.std_dev - 2.0).abs() < 1e-12);
        assert!(m.skewness.abs() < 1e-12);
    }

    #[test]
    fn test_known_skewness() {
        // Deviations from mean 1: [-1, -1, 2]; m2 = 2, m3 = 2.
        let sample: Vec<i64> = vec![0, 0, 3];
        let expected = 2.0 / 2f64.powf(1.5);
        assert!((skewness(&sample).unwrap() - expected).abs() < 1e-12);

        let mirrored: Vec<i64> = vec![0, 0, -3];
        assert!((skewness(&mirrored).unwrap() + expected).abs() < 1e-12);
    }

    #[test]
    fn test_large_values_keep_finite_skewness() {
        // Same shape as [0, 0, 3], so the skewness is unchanged by the scale.
        let expected = 2.0 / 2f64.powf(1.5);
        let m = moments(&[0.0, 0.0, 1e120]).unwrap();
        assert!(m.skewness.is_finite());
        assert!((m.skewness - expected).abs() < 1e-12);
        assert!(m.std_dev.is_finite());

        let m = moments(&[0.0, 0.0, 1e300]).unwrap();
        assert!((m.skewness - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overflowing_sample_undefined() {
        assert!(matches!(
            skewness(&[f64::MAX, f64::MAX, 0.0]),
            Err(TrimError::UndefinedSkewness { sample_size: 3, .. })
        ));
    }

    #[test]
    fn test_constant_sample_undefined() {
        let sample = vec![0.1, 0.1, 0.1];
        assert!(matches!(
            skewness(&sample),
            Err(TrimError::UndefinedSkewness { sample_size: 3, .. })
        ));
    }

    #[test]
    fn test_too_small_sample_undefined() {
        assert!(matches!(
            skewness(&[5.0]),
            Err(TrimError::UndefinedSkewness { sample_size: 1, .. })
        ));
        assert_eq!(skewness::<f64>(&[]), Err(TrimError::EmptyInput));
    }
}
