//! Error types for the analyzer framework.

use thiserror::Error;

use crate::error::TrimError;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Errors that can occur while analyzing a table column.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The trimming or skewness computation rejected the column's values.
    #[error("Computation failed: {0}")]
    Computation(#[from] TrimError),

    /// Error occurred while merging states.
    #[error("Failed to merge states: {0}")]
    StateMerge(String),

    /// DataFusion query execution error.
    #[error("Query execution failed: {0}")]
    QueryExecution(#[from] datafusion::error::DataFusionError),

    /// Arrow computation error.
    #[error("Arrow computation failed: {0}")]
    ArrowComputation(#[from] arrow::error::ArrowError),

    /// Invalid configuration or parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Data type mismatch or invalid data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// No data available for analysis.
    #[error("No data available for analysis")]
    NoData,
}

impl AnalyzerError {
    /// Creates a state merge error with the given message.
    pub fn state_merge(msg: impl Into<String>) -> Self {
        Self::StateMerge(msg.into())
    }

    /// Creates an invalid configuration error with the given message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates an invalid data error with the given message.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}
