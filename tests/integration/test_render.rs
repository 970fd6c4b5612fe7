//! Integration tests for report rendering

use crate::fixtures::{create_basic_fixture, create_deep_fixture};
use dut::cli::output::{IndentStyle, RenderOptions, render_flat, render_tree};
use tempfile::TempDir;

fn render_flat_to_string(result: &dut::FlatScanResult, opts: &RenderOptions) -> String {
    let mut out = Vec::new();
    render_flat(&mut out, result, opts).unwrap();
    String::from_utf8(out).unwrap()
}

fn render_tree_to_string(node: &dut::TreeNode, opts: &RenderOptions) -> String {
    let mut out = Vec::new();
    render_tree(&mut out, node, opts).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_flat_report_header_and_root_line() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let result = dut::scan_flat(root);
    let report = render_flat_to_string(&result, &RenderOptions::default());

    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines[0], format!("root: {}", root.display()));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "max_depth: 1");
    assert_eq!(lines[3], "total entries: 3");
    assert_eq!(lines[4], "(dirs, files, others): (1, 2, 0)");
    assert_eq!(lines[5], "");

    // Root line: timestamp, directory tag, megabyte column, path.
    assert!(lines[6].contains("[D]"));
    assert!(lines[6].contains("0.0 [MB]"));
    assert!(lines[6].ends_with(&root.display().to_string()));
}

#[test]
fn test_display_depth_zero_omits_deeper_records() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let result = dut::scan_flat(root);
    let opts = RenderOptions {
        max_display_depth: 0,
        ..RenderOptions::default()
    };
    let report = render_flat_to_string(&result, &opts);

    assert!(report.contains("a.txt"));
    assert!(report.contains("sub"));
    assert!(!report.contains("b.txt"));
}

#[test]
fn test_row_cap_applies_per_depth_band() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_deep_fixture(root).unwrap();

    let result = dut::scan_flat(root);
    let opts = RenderOptions {
        max_rows_per_band: 1,
        ..RenderOptions::default()
    };
    let report = render_flat_to_string(&result, &opts);

    // Files sort first in every band, so with one row per band each level
    // shows exactly its file and suppresses the directory that follows.
    assert!(report.contains("top.txt"));
    assert!(report.contains("one.txt"));
    assert!(report.contains("two.txt"));
    assert!(report.contains("three.txt"));

    let dir_lines = report
        .lines()
        .filter(|line| line.contains("[D]"))
        .count();
    assert_eq!(dir_lines, 1, "only the root line should show a directory");
}

#[test]
fn test_branch_and_flat_indentation_styles() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let result = dut::scan_flat(root);

    let branch = render_flat_to_string(&result, &RenderOptions::default());
    assert!(branch.contains("|----[F]"));

    let flat = render_flat_to_string(
        &result,
        &RenderOptions {
            indent_style: IndentStyle::Flat,
            ..RenderOptions::default()
        },
    );
    assert!(flat.contains(" ----[F]"));
    assert!(flat.contains(" --------[F]"));
    assert!(!flat.contains('|'));
}

#[test]
fn test_rendering_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_deep_fixture(root).unwrap();

    let first = render_flat_to_string(&dut::scan_flat(root), &RenderOptions::default());
    let second = render_flat_to_string(&dut::scan_flat(root), &RenderOptions::default());
    assert_eq!(first, second);

    let tree_first = render_tree_to_string(&dut::scan_tree(root, None), &RenderOptions::default());
    let tree_second = render_tree_to_string(&dut::scan_tree(root, None), &RenderOptions::default());
    assert_eq!(tree_first, tree_second);
}

#[test]
fn test_tree_report_respects_display_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_deep_fixture(root).unwrap();

    let node = dut::scan_tree(root, None);
    let opts = RenderOptions {
        max_display_depth: 0,
        ..RenderOptions::default()
    };
    let report = render_tree_to_string(&node, &opts);

    // Root line plus the two level-zero children; nothing below them.
    assert_eq!(report.lines().count(), 3);
    assert!(report.contains("top.txt"));
    assert!(!report.contains("one.txt"));
    assert!(!report.contains("two.txt"));
}

#[test]
fn test_tree_report_sizes_show_subtree_totals() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_basic_fixture(root).unwrap();

    let node = dut::scan_tree(root, None);
    let report = render_tree_to_string(&node, &RenderOptions::default());

    let sub_line = report
        .lines()
        .find(|line| line.contains("[D]") && line.contains("sub"))
        .expect("should render the sub directory");
    assert!(sub_line.contains("0.0 [MB]"));

    // The root line carries the aggregate of the whole fixture.
    let root_line = report.lines().next().unwrap();
    assert!(root_line.contains("[D]"));
    assert!(root_line.contains("0.0 [MB]"));
}
