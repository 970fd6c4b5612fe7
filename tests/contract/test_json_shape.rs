//! Contract test for the JSON view of a flat scan

use crate::fixtures::create_basic_fixture;
use dut::cli::output::format_json;
use tempfile::TempDir;

#[test]
fn test_json_output_fields() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let result = dut::scan_flat(root);
    let json = format_json(&result);

    let value: serde_json::Value = serde_json::from_str(&json).expect("report should be valid JSON");

    assert_eq!(value["root"]["max_depth"], 1);
    assert_eq!(value["root"]["size_bytes"], 30);
    assert_eq!(value["root"]["recursive_counts"]["files"], 2);
    assert_eq!(value["root"]["recursive_counts"]["directories"], 1);

    let records = value["records"]
        .as_array()
        .expect("records should be an array");
    assert_eq!(records.len(), 3);
    for record in records {
        assert!(record["path"].is_string());
        assert!(record["size_bytes"].is_u64());
        assert!(record["depth"].is_u64());
        assert!(record["kind"].is_string());
        assert!(record["timestamp"].is_string());
    }
}

#[test]
fn test_json_round_trips_through_the_model() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let result = dut::scan_flat(root);
    let json = serde_json::to_string(&result).unwrap();
    let parsed: dut::FlatScanResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.summary.size_bytes, result.summary.size_bytes);
    assert_eq!(parsed.records.len(), result.records.len());
    assert_eq!(parsed.summary.recursive_counts, result.summary.recursive_counts);
}
