//! Core analyzer traits.

use async_trait::async_trait;
use datafusion::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::errors::AnalyzerResult;
use super::types::MetricValue;

/// Computes a metric from a column of a registered table.
///
/// Computation is split in two: [`compute_state_from_data`] pulls what the
/// analyzer needs out of DataFusion, and [`compute_metric_from_state`] turns
/// that state into the metric. States from different partitions or tables can
/// be merged in between.
///
/// [`compute_state_from_data`]: Analyzer::compute_state_from_data
/// [`compute_metric_from_state`]: Analyzer::compute_metric_from_state
#[async_trait]
pub trait Analyzer: Send + Sync + Debug {
    /// The intermediate state type.
    type State: AnalyzerState;

    /// The metric type produced by this analyzer.
    type Metric: Into<MetricValue> + Send + Sync + Debug;

    /// Computes the state from the data registered in `ctx`.
    async fn compute_state_from_data(&self, ctx: &SessionContext) -> AnalyzerResult<Self::State>;

    /// Computes the final metric from the accumulated state.
    fn compute_metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric>;

    /// Merges multiple states into a single state.
    fn merge_states(&self, states: Vec<Self::State>) -> AnalyzerResult<Self::State> {
        Self::State::merge(states)
    }

    /// Runs both stages against `ctx`.
    async fn analyze(&self, ctx: &SessionContext) -> AnalyzerResult<Self::Metric> {
        let state = self.compute_state_from_data(ctx).await?;
        self.compute_metric_from_state(&state)
    }

    /// Returns the name of this analyzer.
    fn name(&self) -> &str;

    /// Returns a description of what this analyzer computes.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the metric key for storing results.
    fn metric_key(&self) -> String {
        self.name().to_string()
    }

    /// Returns the column(s) this analyzer operates on, if any.
    fn columns(&self) -> Vec<&str> {
        vec![]
    }
}

/// Intermediate analyzer state.
///
/// States are serializable so they can be cached or shipped between workers.
pub trait AnalyzerState:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// Merges multiple states into a single state.
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self>
    where
        Self: Sized;

    /// Returns whether this state represents an empty computation.
    fn is_empty(&self) -> bool {
        false
    }
}
