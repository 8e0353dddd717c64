//! Report formatting for trimmed-mean results.
//!
//! A [`TrimReport`] collects the numbers produced for one sample: a fixed
//! trimmed mean, the automatic trimmed mean with its recommendation, and the
//! recommendation re-applied by hand. Formatters render it as console text or
//! JSON.
//!
//! # Examples
//!
//! ```rust
//! use trim_guard::formatters::{HumanFormatter, ReportFormatter, TrimReport};
//! use trim_guard::trim::TrimSpec;
//!
//! let sample: Vec<f64> = (1..=20).map(f64::from).collect();
//! let report = TrimReport::compute("floats", &sample, TrimSpec::symmetric(0.05).unwrap()).unwrap();
//! let output = HumanFormatter::new().format(&report).unwrap();
//! assert!(output.contains("approximately symmetric"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::advisor::{AutoTrimAdvisor, Recommendation};
use crate::error::TrimResult;
use crate::sample::SampleValue;
use crate::trim::{trimmed_mean_with, TrimSpec};

/// Trimmed-mean results for one labelled sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimReport {
    /// Name shown in output, e.g. `"integers"`.
    pub label: String,
    /// Number of values in the sample.
    pub sample_size: usize,
    /// Fixed trim requested by the caller.
    pub fixed_trim: TrimSpec,
    /// Trimmed mean under `fixed_trim`.
    pub fixed_mean: f64,
    /// Trimmed mean under the recommended trim.
    pub auto_mean: f64,
    /// Recommendation produced by the advisor.
    pub recommendation: Recommendation,
    /// Recommended trim applied explicitly through the fixed-trim path.
    pub manual_mean: f64,
}

impl TrimReport {
    /// Computes a report with the standard policy.
    pub fn compute<T: SampleValue>(
        label: impl Into<String>,
        sample: &[T],
        fixed_trim: TrimSpec,
    ) -> TrimResult<Self> {
        Self::compute_with(label, sample, fixed_trim, &AutoTrimAdvisor::new())
    }

    /// Computes a report using `advisor` for the automatic trim.
    pub fn compute_with<T: SampleValue>(
        label: impl Into<String>,
        sample: &[T],
        fixed_trim: TrimSpec,
        advisor: &AutoTrimAdvisor,
    ) -> TrimResult<Self> {
        let fixed_mean = trimmed_mean_with(sample, fixed_trim)?;
        let (auto_mean, recommendation) = advisor.trimmed_mean(sample)?;
        let manual_mean = trimmed_mean_with(sample, recommendation.trim_spec()?)?;

        Ok(Self {
            label: label.into(),
            sample_size: sample.len(),
            fixed_trim,
            fixed_mean,
            auto_mean,
            recommendation,
            manual_mean,
        })
    }
}

/// Configuration options for formatting reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Decimal places for means
    pub precision: usize,
    /// Include the manually re-applied trim
    pub include_manual: bool,
    /// Include the skewness value
    pub include_skewness: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            include_manual: true,
            include_skewness: true,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only the means.
    pub fn minimal() -> Self {
        Self {
            precision: 4,
            include_manual: false,
            include_skewness: false,
        }
    }

    /// Sets the number of decimal places for means.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets whether to include the manual re-application.
    pub fn with_manual(mut self, include: bool) -> Self {
        self.include_manual = include;
        self
    }
}

/// Renders trim reports into a string representation.
pub trait ReportFormatter {
    /// Formats a single report.
    fn format(&self, report: &TrimReport) -> TrimResult<String>;

    /// Formats several reports, one after another.
    fn format_all(&self, reports: &[TrimReport]) -> TrimResult<String> {
        let mut output = String::new();
        for report in reports {
            output.push_str(&self.format(report)?);
        }
        Ok(output)
    }
}

/// Formats reports as JSON.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new pretty-printing JSON formatter.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> TrimResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        Ok(json?)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &TrimReport) -> TrimResult<String> {
        self.to_json(report)
    }

    fn format_all(&self, reports: &[TrimReport]) -> TrimResult<String> {
        self.to_json(reports)
    }
}

/// Formats reports as console text.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a new human formatter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format(&self, report: &TrimReport) -> TrimResult<String> {
        let p = self.config.precision;
        let rec = &report.recommendation;
        let mut out = String::new();

        writeln!(out, "Sample: {} (n = {})", report.label, report.sample_size).unwrap();
        writeln!(
            out,
            "  Trimmed mean ({}): {:.p$}",
            report.fixed_trim, report.fixed_mean
        )
        .unwrap();
        writeln!(out, "  Auto trimmed mean: {:.p$}", report.auto_mean).unwrap();
        writeln!(
            out,
            "    - Recommended trimming: low={:.1}%, high={:.1}%",
            rec.low_trim * 100.0,
            rec.high_trim * 100.0
        )
        .unwrap();
        if self.config.include_skewness {
            writeln!(out, "    - Skewness: {:.4}", rec.skewness).unwrap();
        }
        writeln!(out, "    - Interpretation: {}", rec.interpretation).unwrap();
        if self.config.include_manual {
            writeln!(
                out,
                "  Manual trimming with recommendation: {:.p$}",
                report.manual_mean
            )
            .unwrap();
        }

        Ok(out)
    }
}
