//! Property-based tests for the trimmed mean and the trim advisor.
//!
//! ## Test Categories
//!
//! - Zero trim reproduces the arithmetic mean
//! - Results never leave the sample's range
//! - Odd-sized samples trimmed just under one half give the median
//! - Order of the input does not matter
//! - Values beyond a whole trimmed count have no influence
//! - Integer and float entry points agree
//! - The advisor always recommends a trim from the policy table

use proptest::prelude::*;
use trim_guard::advisor::{TrimPolicy, STANDARD_BANDS};
use trim_guard::prelude::*;

fn sample_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, min_len..max_len)
}

fn tolerance(sample: &[f64]) -> f64 {
    let scale = sample.iter().fold(1.0f64, |acc, v| acc.max(v.abs()));
    scale * 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_zero_trim_equals_mean(sample in sample_strategy(1, 200)) {
        let expected = sample.iter().sum::<f64>() / sample.len() as f64;
        let actual = trimmed_mean(&sample, 0.0, None).unwrap();
        prop_assert!((actual - expected).abs() <= tolerance(&sample));
    }

    #[test]
    fn prop_result_within_sample_range(
        sample in sample_strategy(4, 200),
        low in 0.0..0.45f64,
        high in 0.0..0.45f64,
    ) {
        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // With more than one value, every valid trim leaves positive weight.
        let result = trimmed_mean(&sample, low, Some(high));
        prop_assert!(result.is_ok(), "unexpected {:?}", result);
        let result = result.unwrap();
        let tol = tolerance(&sample);
        prop_assert!(result >= min - tol && result <= max + tol);
    }

    #[test]
    fn prop_odd_sample_near_half_trim_is_median(
        sample in (1usize..50).prop_flat_map(|k| prop::collection::vec(-1.0e6..1.0e6f64, 2 * k + 1)),
        epsilon in 1.0e-6..5.0e-3f64,
    ) {
        let mut sorted = sample.clone();
        sorted.sort_by(f64::total_cmp);
        let median = sorted[sorted.len() / 2];

        let result = trimmed_mean(&sample, 0.5 - epsilon, None);
        prop_assert!(result.is_ok(), "unexpected {:?}", result);
        prop_assert!((result.unwrap() - median).abs() <= tolerance(&sample));
    }

    #[test]
    fn prop_permutation_invariance(
        (original, shuffled) in sample_strategy(1, 100)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        low in 0.0..0.4f64,
        high in 0.0..0.4f64,
    ) {
        let a = trimmed_mean(&original, low, Some(high));
        let b = trimmed_mean(&shuffled, low, Some(high));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_trimmed_tail_is_ignored(
        sample in sample_strategy(20, 200),
        high in 0.1..0.45f64,
        blowup in 1.0..1.0e9f64,
    ) {
        // high * n >= 2, so the largest value is always fully discarded.
        let baseline = trimmed_mean(&sample, 0.0, Some(high)).unwrap();

        let mut extreme = sample.clone();
        let max_index = extreme
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        extreme[max_index] += blowup;

        prop_assert_eq!(trimmed_mean(&extreme, 0.0, Some(high)).unwrap(), baseline);
    }

    #[test]
    fn prop_ints_match_floats(
        sample in prop::collection::vec(-1_000_000i64..1_000_000, 1..150),
        trim in 0.0..0.45f64,
    ) {
        let floats: Vec<f64> = sample.iter().map(|&v| v as f64).collect();
        prop_assert_eq!(
            trimmed_mean_ints(&sample, trim, None),
            trimmed_mean(&floats, trim, None)
        );
        prop_assert_eq!(auto_trimmed_mean_ints(&sample), auto_trimmed_mean(&floats));
    }

    #[test]
    fn prop_recommendation_comes_from_policy(sample in sample_strategy(2, 150)) {
        match auto_trimmed_mean(&sample) {
            Ok((_, rec)) => {
                prop_assert_eq!(rec.low_trim, rec.high_trim);
                prop_assert!(STANDARD_BANDS.iter().any(|band| band.trim == rec.low_trim));
                let band = TrimPolicy::standard().classify(rec.skewness).trim;
                prop_assert_eq!(band, rec.low_trim);
            }
            Err(err) => prop_assert!(
                matches!(err, TrimError::UndefinedSkewness { .. }),
                "unexpected {:?}",
                err
            ),
        }
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_single_value_sample() {
        assert_eq!(trimmed_mean(&[3.0], 0.0, None), Ok(3.0));
        assert!(trimmed_mean(&[3.0], 0.01, None).is_err());
        assert!(auto_trimmed_mean(&[3.0]).is_err());
    }

    #[test]
    fn test_two_value_sample() {
        let (result, rec) = auto_trimmed_mean(&[1.0, 3.0]).unwrap();
        assert_eq!(rec.skewness, 0.0);
        assert_eq!(result, 2.0);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(matches!(
            trimmed_mean(&[1.0, f64::NAN, 2.0], 0.0, None),
            Err(TrimError::NonFiniteValue { index: 1, .. })
        ));
        assert!(matches!(
            auto_trimmed_mean(&[f64::INFINITY, 1.0]),
            Err(TrimError::NonFiniteValue { index: 0, .. })
        ));
    }
}
