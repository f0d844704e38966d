//! Summary to power-log join tests

use super::write_artifact;
use crate::aggregator::Aggregator;
use crate::config::AggregatorConfig;
use tempfile::TempDir;

const POWER_LOG: &str = "Elapsed Time (sec),Package Power (W)\n0,10\n1,10\n";

#[test]
fn test_join_requires_exact_name() {
    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path();
    write_artifact(logs_dir, "summary_r1_A2B.txt", "");
    // Same run, wrong mode and wrong case: neither may be joined
    write_artifact(logs_dir, "run_r1_B2A.csv", POWER_LOG);
    write_artifact(logs_dir, "run_R1_A2B.csv", POWER_LOG);

    let aggregation = Aggregator::new(AggregatorConfig::new(logs_dir))
        .collect()
        .unwrap();

    let row = &aggregation.rows[0];
    assert_eq!(row.powerlog_file, None);
    assert_eq!(row.energy_j, None);
    assert_eq!(row.power_col_used, None);
    assert_eq!(
        aggregation.unmatched_power_logs,
        vec!["run_R1_A2B.csv".to_string(), "run_r1_B2A.csv".to_string()]
    );
}

#[test]
fn test_each_mode_joins_its_own_log() {
    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path();
    write_artifact(logs_dir, "summary_r1_A2B.txt", "");
    write_artifact(logs_dir, "summary_r1_B2A.txt", "");
    write_artifact(logs_dir, "run_r1_A2B.csv", "time,power\n0,10\n1,10\n");
    write_artifact(logs_dir, "run_r1_B2A.csv", "time,power\n0,4\n5,4\n");

    let aggregator = Aggregator::new(AggregatorConfig::new(logs_dir));
    let aggregation = aggregator.collect().unwrap();

    assert_eq!(aggregation.rows.len(), 2);
    assert_eq!(aggregation.rows[0].energy_j, Some(10.0));
    assert_eq!(aggregation.rows[1].energy_j, Some(20.0));
    assert_eq!(aggregation.rows_with_power(), 2);
    assert!(aggregation.unmatched_power_logs.is_empty());
}

#[test]
fn test_text_and_tabular_summaries_share_a_power_log() {
    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path();
    write_artifact(logs_dir, "summary_r1_BOTH.txt", "");
    write_artifact(logs_dir, "summary_r1_BOTH.csv", "order_effect_bits\nnone\n");
    write_artifact(logs_dir, "run_r1_BOTH.csv", POWER_LOG);

    let stats = Aggregator::new(AggregatorConfig::new(logs_dir))
        .run()
        .unwrap();

    assert_eq!(stats.rows_written, 2);
    assert_eq!(stats.rows_with_power, 2);
}
