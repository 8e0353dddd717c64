//! Integration tests for the trimmed mean analyzers over CSV sources.

use datafusion::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use trim_guard::analyzers::{
    Analyzer, AnalyzerError, AutoTrimAnalyzer, MetricValue, TrimmedMeanAnalyzer,
};
use trim_guard::prelude::*;

fn skewed_values() -> Vec<i64> {
    let mut values: Vec<i64> = (0..90).map(|i| 45 + (i % 11)).collect();
    values.extend((0..10).map(|i| 200 + 25 * i));
    values
}

fn write_csv(values: &[i64]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "value").unwrap();
    for v in values {
        writeln!(file, "{v}").unwrap();
    }
    file.flush().unwrap();
    file
}

async fn context_for(file: &NamedTempFile, table: &str) -> SessionContext {
    let ctx = SessionContext::new();
    ctx.register_csv(
        table,
        file.path().to_str().unwrap(),
        CsvReadOptions::new(),
    )
    .await
    .unwrap();
    ctx
}

#[tokio::test]
async fn test_trimmed_mean_from_csv_matches_library() {
    let values = skewed_values();
    let file = write_csv(&values);
    let ctx = context_for(&file, "data").await;

    let spec = TrimSpec::symmetric(0.05).unwrap();
    let analyzer = TrimmedMeanAnalyzer::new("value", spec);
    let metric = analyzer.analyze(&ctx).await.unwrap();

    let expected = trimmed_mean_with(&values, spec).unwrap();
    assert_eq!(metric, MetricValue::Double(expected));
}

#[tokio::test]
async fn test_auto_trim_from_csv_matches_library() {
    let values = skewed_values();
    let file = write_csv(&values);
    let ctx = context_for(&file, "samples").await;

    let analyzer = AutoTrimAnalyzer::new("value").with_table("samples");
    let metric = analyzer.analyze(&ctx).await.unwrap();
    let (expected, rec) = auto_trimmed_mean_ints(&values).unwrap();

    assert_eq!(
        metric.get("trimmed_mean").and_then(MetricValue::as_f64),
        Some(expected)
    );
    assert_eq!(
        metric.get("low_trim").and_then(MetricValue::as_f64),
        Some(rec.low_trim)
    );
    assert_eq!(metric.get("count"), Some(&MetricValue::Long(100)));
    assert_eq!(
        metric.get("interpretation"),
        Some(&MetricValue::String(rec.interpretation.to_string()))
    );
}

#[tokio::test]
async fn test_states_from_split_files_merge() {
    let values = skewed_values();
    let (head, tail) = values.split_at(40);
    let head_file = write_csv(head);
    let tail_file = write_csv(tail);

    let analyzer = TrimmedMeanAnalyzer::new("value", TrimSpec::symmetric(0.1).unwrap());
    let head_state = analyzer
        .compute_state_from_data(&context_for(&head_file, "data").await)
        .await
        .unwrap();
    let tail_state = analyzer
        .compute_state_from_data(&context_for(&tail_file, "data").await)
        .await
        .unwrap();

    let merged = analyzer.merge_states(vec![head_state, tail_state]).unwrap();
    assert_eq!(merged.len(), values.len());

    let metric = analyzer.compute_metric_from_state(&merged).unwrap();
    assert_eq!(
        metric,
        MetricValue::Double(trimmed_mean_ints(&values, 0.1, None).unwrap())
    );
}

#[tokio::test]
async fn test_constant_column_reports_computation_error() {
    let file = write_csv(&[7; 10]);
    let ctx = context_for(&file, "data").await;

    let result = AutoTrimAnalyzer::new("value").analyze(&ctx).await;
    assert!(matches!(
        result,
        Err(AnalyzerError::Computation(TrimError::UndefinedSkewness { .. }))
    ));
}

#[tokio::test]
async fn test_injection_in_column_name_rejected() {
    let file = write_csv(&[1, 2, 3]);
    let ctx = context_for(&file, "data").await;

    let analyzer = TrimmedMeanAnalyzer::new("value\"; DROP TABLE data; --", TrimSpec::NONE);
    assert!(matches!(
        analyzer.analyze(&ctx).await,
        Err(AnalyzerError::InvalidConfiguration(_))
    ));
}
