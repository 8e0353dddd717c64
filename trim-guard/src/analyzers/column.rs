//! Loading a numeric column out of DataFusion into an in-memory sample.

use arrow::array::{Array, Float64Array};
use datafusion::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{AnalyzerError, AnalyzerResult};
use super::traits::AnalyzerState;

/// Default table name analyzers read from.
pub const DEFAULT_TABLE: &str = "data";

/// Maximum accepted identifier length.
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// State holding every non-null value of a column.
///
/// Trimmed means need the whole sample, so merging concatenates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSampleState {
    /// Non-null column values converted to `f64`.
    pub values: Vec<f64>,
}

impl ColumnSampleState {
    /// Creates a state from already collected values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl AnalyzerState for ColumnSampleState {
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self> {
        if states.is_empty() {
            return Err(AnalyzerError::state_merge("No states to merge"));
        }

        let total = states.iter().map(|s| s.values.len()).sum();
        let mut values = Vec::with_capacity(total);
        for state in states {
            values.extend(state.values);
        }
        Ok(Self { values })
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Quotes a SQL identifier after rejecting anything that could escape the quotes.
pub fn escape_identifier(identifier: &str) -> AnalyzerResult<String> {
    if identifier.trim().is_empty() {
        return Err(AnalyzerError::invalid_config(
            "SQL identifier cannot be empty or whitespace-only",
        ));
    }
    if identifier.len() > MAX_IDENTIFIER_LENGTH {
        return Err(AnalyzerError::invalid_config(format!(
            "SQL identifier too long (max {MAX_IDENTIFIER_LENGTH} characters)"
        )));
    }
    if identifier.contains(['"', '\0', ';']) {
        return Err(AnalyzerError::invalid_config(format!(
            "SQL identifier contains forbidden characters: {identifier:?}"
        )));
    }
    Ok(format!("\"{identifier}\""))
}

/// Reads the non-null values of `column` in `table` as `f64`.
///
/// Any numeric column type is accepted; DataFusion casts it to `DOUBLE`.
pub async fn collect_column(
    ctx: &SessionContext,
    table: &str,
    column: &str,
) -> AnalyzerResult<ColumnSampleState> {
    let table_ident = escape_identifier(table)?;
    let column_ident = escape_identifier(column)?;

    let sql = format!(
        "SELECT CAST({column_ident} AS DOUBLE) AS value FROM {table_ident} WHERE {column_ident} IS NOT NULL"
    );

    let df = ctx.sql(&sql).await?;
    let batches = df.collect().await?;

    let mut values = Vec::new();
    for batch in &batches {
        let array = batch
            .column(0)
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| AnalyzerError::invalid_data("Expected Float64 array for column"))?;
        values.reserve(array.len());
        values.extend(array.iter().flatten());
    }

    debug!(table, column, rows = values.len(), "Collected column sample");
    Ok(ColumnSampleState { values })
}
