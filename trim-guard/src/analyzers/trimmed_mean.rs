//! Trimmed mean analyzer for a numeric column.

use async_trait::async_trait;
use datafusion::prelude::*;
use tracing::instrument;

use super::column::{collect_column, ColumnSampleState, DEFAULT_TABLE};
use super::{Analyzer, AnalyzerError, AnalyzerResult, AnalyzerState, MetricValue};
use crate::trim::{trimmed_mean_with, TrimSpec};

/// Analyzer that computes a fixed-fraction trimmed mean of a column.
///
/// # Example
///
/// ```rust,no_run
/// use trim_guard::analyzers::{Analyzer, TrimmedMeanAnalyzer};
/// use trim_guard::trim::TrimSpec;
/// use datafusion::prelude::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let ctx = SessionContext::new();
/// ctx.register_csv("data", "latencies.csv", CsvReadOptions::new()).await?;
///
/// let analyzer = TrimmedMeanAnalyzer::new("latency_ms", TrimSpec::symmetric(0.05)?);
/// let metric = analyzer.analyze(&ctx).await?;
/// println!("5% trimmed mean: {metric}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrimmedMeanAnalyzer {
    column: String,
    table: String,
    spec: TrimSpec,
}

impl TrimmedMeanAnalyzer {
    /// Creates a trimmed mean analyzer over `column` of the `data` table.
    pub fn new(column: impl Into<String>, spec: TrimSpec) -> Self {
        Self {
            column: column.into(),
            table: DEFAULT_TABLE.to_string(),
            spec,
        }
    }

    /// Reads from `table` instead of the default table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Returns the column being analyzed.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the trim applied.
    pub fn spec(&self) -> TrimSpec {
        self.spec
    }
}

#[async_trait]
impl Analyzer for TrimmedMeanAnalyzer {
    type State = ColumnSampleState;
    type Metric = MetricValue;

    #[instrument(skip(ctx), fields(analyzer = "trimmed_mean", column = %self.column))]
    async fn compute_state_from_data(&self, ctx: &SessionContext) -> AnalyzerResult<Self::State> {
        collect_column(ctx, &self.table, &self.column).await
    }

    fn compute_metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        if state.is_empty() {
            return Err(AnalyzerError::NoData);
        }

        Ok(MetricValue::Double(trimmed_mean_with(
            &state.values,
            self.spec,
        )?))
    }

    fn name(&self) -> &str {
        "trimmed_mean"
    }

    fn description(&self) -> &str {
        "Computes the trimmed mean of a numeric column"
    }

    fn metric_key(&self) -> String {
        format!("{}.{}", self.name(), self.column)
    }

    fn columns(&self) -> Vec<&str> {
        vec![&self.column]
    }
}
