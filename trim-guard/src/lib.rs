//! # trim-guard - Robust trimmed means for Rust
//!
//! trim-guard computes trimmed means of numeric samples and can pick the trim
//! for you from the sample's skewness.
//!
//! ## Quick Start
//!
//! ```rust
//! use trim_guard::prelude::*;
//!
//! # fn main() -> TrimResult<()> {
//! // Symmetric 20% trim: drops 10 and 50, averages [20, 30, 40].
//! let mean = trimmed_mean_ints(&[10, 20, 30, 40, 50], 0.2, None)?;
//! assert_eq!(mean, 30.0);
//!
//! // Let the advisor choose the trim.
//! let mut sample: Vec<f64> = (0..90).map(|i| 45.0 + (i % 10) as f64).collect();
//! sample.extend((0..10).map(|i| 200.0 + 10.0 * i as f64));
//!
//! let (mean, recommendation) = auto_trimmed_mean(&sample)?;
//! println!(
//!     "{mean:.3} ({}, trimmed {:.1}% per tail)",
//!     recommendation.interpretation,
//!     recommendation.low_trim * 100.0
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Trimming
//!
//! Trim fractions are applied to ranks, and fractional counts are handled by
//! interpolation: when `low * n` is not a whole number, the next boundary
//! value stays in the average with a partial weight. Each tail fraction lies
//! in `[0, 0.5)`.
//!
//! ## Automatic trims
//!
//! [`advisor::AutoTrimAdvisor`] computes the third standardized moment of the
//! sample and looks its magnitude up in a [`advisor::TrimPolicy`]:
//!
//! | skewness   | trim per tail | interpretation            |
//! |------------|---------------|---------------------------|
//! | < 0.2      | 0%            | approximately symmetric   |
//! | 0.2 – 0.5  | 2.5%          | mildly skewed             |
//! | 0.5 – 1.0  | 5%            | moderately skewed         |
//! | ≥ 1.0      | 10%           | strongly skewed           |
//!
//! ## Architecture
//!
//! - **`trim`**: fixed-fraction trimmed means and [`trim::TrimSpec`]
//! - **`advisor`**: skewness, the band policy and recommendations
//! - **`analyzers`**: DataFusion analyzers running the above over table columns
//! - **`formatters`**: human-readable and JSON reports
//! - **`logging`**: `tracing-subscriber` setup
//! - **`error`**: the [`error::TrimError`] type

pub mod advisor;
pub mod analyzers;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod sample;
pub mod trim;

#[cfg(any(test, feature = "demo"))]
pub mod generators;
