//! End-to-end tests driving the binary itself

use crate::fixtures::create_basic_fixture;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "dut", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Disk Usage Tree"));
    assert!(stdout.contains("flat"));
    assert!(stdout.contains("tree"));
}

#[test]
fn test_cli_writes_report_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let report_path = root.join("report.txt");
    let output = Command::new("cargo")
        .args(["run", "--bin", "dut", "--", "flat"])
        .arg(root)
        .arg("--quiet")
        .arg("--output")
        .arg(&report_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with("root: "));
    assert!(report.contains("(dirs, files, others): (1, 2, 0)"));
    assert!(report.contains("a.txt"));
}

#[test]
fn test_cli_rejects_unknown_command() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "dut", "--", "shrink", "/tmp"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
