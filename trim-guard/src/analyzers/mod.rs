//! DataFusion analyzers computing trimmed means over table columns.
//!
//! Analyzers pull a numeric column out of a registered table, hold it as a
//! [`ColumnSampleState`], and run the trimming code over it. The state keeps
//! every value because a trimmed mean cannot be computed from a summary.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trim_guard::analyzers::{Analyzer, AutoTrimAnalyzer, MetricValue};
//! use datafusion::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = SessionContext::new();
//! ctx.register_csv("data", "float_sample.csv", CsvReadOptions::new()).await?;
//!
//! let metric = AutoTrimAnalyzer::new("value").analyze(&ctx).await?;
//! if let Some(MetricValue::String(label)) = metric.get("interpretation") {
//!     println!("Column is {label}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auto_trim;
pub mod column;
pub mod errors;
pub mod traits;
pub mod trimmed_mean;
pub mod types;

pub use auto_trim::AutoTrimAnalyzer;
pub use column::{collect_column, ColumnSampleState, DEFAULT_TABLE};
pub use errors::{AnalyzerError, AnalyzerResult};
pub use traits::{Analyzer, AnalyzerState};
pub use trimmed_mean::TrimmedMeanAnalyzer;
pub use types::MetricValue;
