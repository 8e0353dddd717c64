//! Numeric sample handling shared by the trimming and skewness code.
//!
//! Samples are borrowed from the caller and never modified. Each operation
//! converts the values to `f64` into its own working buffer, rejecting
//! non-finite values up front so that ordering and moments stay well defined.

use crate::error::{TrimError, TrimResult};

/// A numeric element type that can appear in a sample.
///
/// Integer samples are treated as numerically equivalent to their
/// floating-point conversion.
pub trait SampleValue: Copy + Send + Sync {
    /// Converts the value to `f64` for trimming arithmetic.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SampleValue for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample_value!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8, usize, isize);

/// Converts a sample to `f64`, preserving order.
///
/// Fails with [`TrimError::EmptyInput`] for an empty sample and
/// [`TrimError::NonFiniteValue`] if any converted value is NaN or infinite.
pub fn to_f64_vec<T: SampleValue>(sample: &[T]) -> TrimResult<Vec<f64>> {
    if sample.is_empty() {
        return Err(TrimError::EmptyInput);
    }

    sample
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let value = value.to_f64();
            if value.is_finite() {
                Ok(value)
            } else {
                Err(TrimError::NonFiniteValue { index, value })
            }
        })
        .collect()
}

/// Returns an ascending sorted copy of the sample.
///
/// The sort is stable and uses the IEEE total order, so the result does not
/// depend on the input permutation.
pub fn sorted_copy<T: SampleValue>(sample: &[T]) -> TrimResult<Vec<f64>> {
    let mut values = to_f64_vec(sample)?;
    values.sort_by(f64::total_cmp);
    Ok(values)
}
