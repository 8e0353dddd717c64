//! Prelude for commonly used types and functions in trim-guard.

pub use crate::advisor::{
    auto_trimmed_mean, auto_trimmed_mean_ints, AutoTrimAdvisor, Interpretation, Recommendation,
    TrimPolicy,
};
pub use crate::error::{TrimError, TrimResult};
pub use crate::formatters::{ReportFormatter, TrimReport};
pub use crate::sample::SampleValue;
pub use crate::trim::{trimmed_mean, trimmed_mean_ints, trimmed_mean_with, TrimSpec};
