//! Random sample generators for the demo program and tests.
//!
//! Both generators produce right-skewed data so the advisor has something to
//! react to.

use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal};

/// Share of [`skewed_integers`] drawn from the normal bulk.
pub const BULK_FRACTION: f64 = 0.9;
/// Mean of the normal bulk.
pub const BULK_MEAN: f64 = 50.0;
/// Standard deviation of the normal bulk.
pub const BULK_STD_DEV: f64 = 10.0;
/// Lower bound of the uniform outlier range.
pub const OUTLIER_LOW: f64 = 200.0;
/// Upper bound (exclusive) of the uniform outlier range.
pub const OUTLIER_HIGH: f64 = 600.0;

/// Mean of the exponential part of [`exponential_floats`].
pub const EXPONENTIAL_MEAN: f64 = 20.0;
/// Shift added to every exponential draw.
pub const EXPONENTIAL_SHIFT: f64 = 10.0;

/// Integers from a 90/10 mixture of N(50, 10) and uniform outliers in [200, 600).
///
/// Normal draws are truncated toward zero.
pub fn skewed_integers<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n)
        .map(|_| {
            if rng.random::<f64>() < BULK_FRACTION {
                let z: f64 = StandardNormal.sample(rng);
                (z * BULK_STD_DEV + BULK_MEAN) as i64
            } else {
                rng.random_range(OUTLIER_LOW..OUTLIER_HIGH) as i64
            }
        })
        .collect()
}

/// Floats from a shifted exponential distribution: Exp(mean 20) + 10.
pub fn exponential_floats<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let e: f64 = Exp1.sample(rng);
            e * EXPONENTIAL_MEAN + EXPONENTIAL_SHIFT
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{auto_trimmed_mean, auto_trimmed_mean_ints, SkewDirection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = skewed_integers(&mut StdRng::seed_from_u64(7), 50);
        let b = skewed_integers(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn test_exponential_floats_are_shifted() {
        let mut rng = StdRng::seed_from_u64(42);
        let sample = exponential_floats(&mut rng, 500);
        assert!(sample.iter().all(|&v| v >= EXPONENTIAL_SHIFT && v.is_finite()));
    }

    #[test]
    fn test_distribution_parameters() {
        let mut rng = StdRng::seed_from_u64(11);

        let floats = exponential_floats(&mut rng, 5000);
        let mean = floats.iter().sum::<f64>() / floats.len() as f64;
        assert!((mean - (EXPONENTIAL_MEAN + EXPONENTIAL_SHIFT)).abs() < 2.0, "mean {mean}");

        let ints = skewed_integers(&mut rng, 5000);
        let outliers = ints.iter().filter(|&&v| v >= OUTLIER_LOW as i64).count();
        assert!((350..650).contains(&outliers), "{outliers} outliers");
        assert!(ints.iter().all(|&v| v < OUTLIER_HIGH as i64));
    }

    #[test]
    fn test_generated_samples_are_right_skewed() {
        let mut rng = StdRng::seed_from_u64(42);

        let ints = skewed_integers(&mut rng, 2000);
        let (_, rec) = auto_trimmed_mean_ints(&ints).unwrap();
        assert_eq!(rec.interpretation.direction(), Some(SkewDirection::Right));
        assert!(rec.low_trim > 0.0);

        let floats = exponential_floats(&mut rng, 2000);
        let (_, rec) = auto_trimmed_mean(&floats).unwrap();
        assert_eq!(rec.interpretation.direction(), Some(SkewDirection::Right));
    }
}
