//! Types for analyzer metrics and values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metric values produced by analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum MetricValue {
    /// A floating-point metric value (e.g., a trimmed mean or skewness).
    Double(f64),

    /// An integer metric value (e.g., a count).
    Long(i64),

    /// A string metric value (e.g., an interpretation label).
    String(String),

    /// Named sub-metrics, ordered by key.
    Map(BTreeMap<String, MetricValue>),
}

impl MetricValue {
    /// Attempts to get the numeric value as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Double(v) => Some(*v),
            MetricValue::Long(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Looks up a sub-metric of a `Map` value.
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        match self {
            MetricValue::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns a human-readable string representation of the metric value.
    pub fn to_string_pretty(&self) -> String {
        match self {
            MetricValue::Double(v) => {
                if v.fract() == 0.0 {
                    format!("{v:.0}")
                } else {
                    format!("{v:.4}")
                }
            }
            MetricValue::Long(v) => v.to_string(),
            MetricValue::String(s) => s.clone(),
            MetricValue::Map(m) => format!("Map({} entries)", m.len()),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_pretty())
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Double(value)
    }
}
