//! Skewness-driven trimmed mean analyzer.

use async_trait::async_trait;
use datafusion::prelude::*;
use std::collections::BTreeMap;
use tracing::instrument;

use super::column::{collect_column, ColumnSampleState, DEFAULT_TABLE};
use super::{Analyzer, AnalyzerError, AnalyzerResult, AnalyzerState, MetricValue};
use crate::advisor::{AutoTrimAdvisor, TrimPolicy};

/// Analyzer that recommends a trim from the column's skewness and applies it.
///
/// The metric is a map with `trimmed_mean`, `skewness`, `low_trim`,
/// `high_trim`, `interpretation` and `count` entries.
#[derive(Debug, Clone)]
pub struct AutoTrimAnalyzer {
    column: String,
    table: String,
    advisor: AutoTrimAdvisor,
}

impl AutoTrimAnalyzer {
    /// Creates an analyzer over `column` of the `data` table using the standard policy.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            table: DEFAULT_TABLE.to_string(),
            advisor: AutoTrimAdvisor::new(),
        }
    }

    /// Reads from `table` instead of the default table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Uses a custom policy table.
    pub fn with_policy(mut self, policy: TrimPolicy) -> Self {
        self.advisor = self.advisor.with_policy(policy);
        self
    }

    /// Returns the column being analyzed.
    pub fn column(&self) -> &str {
        &self.column
    }
}

#[async_trait]
impl Analyzer for AutoTrimAnalyzer {
    type State = ColumnSampleState;
    type Metric = MetricValue;

    #[instrument(skip(ctx), fields(analyzer = "auto_trimmed_mean", column = %self.column))]
    async fn compute_state_from_data(&self, ctx: &SessionContext) -> AnalyzerResult<Self::State> {
        collect_column(ctx, &self.table, &self.column).await
    }

    fn compute_metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        if state.is_empty() {
            return Err(AnalyzerError::NoData);
        }

        let (mean, recommendation) = self.advisor.trimmed_mean(&state.values)?;

        let mut stats = BTreeMap::new();
        stats.insert("trimmed_mean".to_string(), MetricValue::Double(mean));
        stats.insert(
            "skewness".to_string(),
            MetricValue::Double(recommendation.skewness),
        );
        stats.insert(
            "low_trim".to_string(),
            MetricValue::Double(recommendation.low_trim),
        );
        stats.insert(
            "high_trim".to_string(),
            MetricValue::Double(recommendation.high_trim),
        );
        stats.insert(
            "interpretation".to_string(),
            MetricValue::String(recommendation.interpretation.label()),
        );
        stats.insert("count".to_string(), MetricValue::Long(state.len() as i64));

        Ok(MetricValue::Map(stats))
    }

    fn name(&self) -> &str {
        "auto_trimmed_mean"
    }

    fn description(&self) -> &str {
        "Computes a trimmed mean with the trim chosen from the column's skewness"
    }

    fn metric_key(&self) -> String {
        format!("{}.{}", self.name(), self.column)
    }

    fn columns(&self) -> Vec<&str> {
        vec![&self.column]
    }
}
