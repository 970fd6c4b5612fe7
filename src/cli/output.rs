//! Report rendering for scan results
//!
//! Writes the indented, depth- and row-limited text report to a caller-chosen
//! sink. Writing is the only fallible step of a scan-and-report operation;
//! every read-side failure has already been degraded into the result by the
//! scanners.

use crate::models::{FlatScanResult, NodeKind, SubtreeSummary, TreeNode};
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Indentation style for descendant lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Repeat the indent unit once per depth level
    Flat,
    /// Space blocks per ancestor level with a vertical-bar branch marker
    Branch,
}

/// Display configuration consumed by the renderer
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Deepest record/level to print
    pub max_display_depth: u16,
    /// Row cap applied independently per depth band (flat mode only)
    pub max_rows_per_band: usize,
    pub indent_width: usize,
    pub indent_style: IndentStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_display_depth: 10,
            max_rows_per_band: 20,
            indent_width: 4,
            indent_style: IndentStyle::Branch,
        }
    }
}

/// Render a flat scan: header block, root line, then the sorted records.
///
/// Records deeper than `max_display_depth` are skipped; the per-band row
/// counter resets whenever the depth strictly increases over the previously
/// printed record, so the cap applies per depth band rather than globally.
/// Because records are depth-sorted the loop exits as soon as the depth bound
/// is exceeded.
pub fn render_flat<W: Write>(
    out: &mut W,
    result: &FlatScanResult,
    opts: &RenderOptions,
) -> Result<()> {
    write_header(out, &result.summary)?;
    write_line(
        out,
        &result.summary.timestamp,
        "",
        result.summary.kind,
        result.summary.size_bytes,
        &result.summary.path,
    )?;

    let mut band_depth: Option<u16> = None;
    let mut printed_in_band = 0usize;

    for record in &result.records {
        if record.depth > opts.max_display_depth {
            break;
        }
        if band_depth.is_none_or(|d| record.depth > d) {
            band_depth = Some(record.depth);
            printed_in_band = 0;
        }
        if printed_in_band < opts.max_rows_per_band {
            let indent = indent_for(opts, record.depth);
            write_line(
                out,
                &record.timestamp,
                &indent,
                record.kind,
                record.size_bytes,
                &record.path,
            )?;
            printed_in_band += 1;
        }
    }

    Ok(())
}

/// Render a nested scan: root line, then one line per node, recursing until
/// the display depth bound is crossed.
pub fn render_tree<W: Write>(out: &mut W, node: &TreeNode, opts: &RenderOptions) -> Result<()> {
    write_line(
        out,
        &node.summary.timestamp,
        "",
        node.summary.kind,
        node.summary.size_bytes,
        &node.summary.path,
    )?;
    render_tree_level(out, &node.children, 0, opts)
}

fn render_tree_level<W: Write>(
    out: &mut W,
    children: &[TreeNode],
    cur_depth: u16,
    opts: &RenderOptions,
) -> Result<()> {
    if cur_depth > opts.max_display_depth {
        return Ok(());
    }
    for child in children {
        let indent = indent_for(opts, cur_depth);
        write_line(
            out,
            &child.summary.timestamp,
            &indent,
            child.summary.kind,
            child.summary.size_bytes,
            &child.summary.path,
        )?;
        render_tree_level(out, &child.children, cur_depth + 1, opts)?;
    }
    Ok(())
}

/// Header block preceding the flat listing: root path, max depth, total
/// recursive count, and the per-kind triple.
fn write_header<W: Write>(out: &mut W, summary: &SubtreeSummary) -> Result<()> {
    let counts = summary.recursive_counts;
    writeln!(out, "root: {}", summary.path.display())?;
    writeln!(out)?;
    writeln!(out, "max_depth: {}", summary.max_depth)?;
    writeln!(out, "total entries: {}", counts.total())?;
    writeln!(
        out,
        "(dirs, files, others): ({}, {}, {})",
        counts.directories, counts.files, counts.others
    )?;
    writeln!(out)?;
    Ok(())
}

/// One report line: timestamp, indent, kind tag, megabyte column, path.
/// The size column always shows the node's own aggregate size.
fn write_line<W: Write>(
    out: &mut W,
    timestamp: &str,
    indent: &str,
    kind: NodeKind,
    size_bytes: u64,
    path: &Path,
) -> Result<()> {
    #[allow(clippy::cast_precision_loss)]
    let megabytes = size_bytes as f64 / 1_000_000.0;
    writeln!(
        out,
        "{timestamp} {indent}{} {megabytes:>6.1} [MB]    {}",
        kind.tag(),
        path.display()
    )?;
    Ok(())
}

fn indent_for(opts: &RenderOptions, depth: u16) -> String {
    let depth = usize::from(depth);
    match opts.indent_style {
        IndentStyle::Flat => "-".repeat(opts.indent_width * (depth + 1)),
        IndentStyle::Branch => {
            let block = " ".repeat(opts.indent_width + 1);
            let mut prefix = block.repeat(depth);
            prefix.push('|');
            prefix.push_str(&"-".repeat(opts.indent_width));
            prefix
        }
    }
}

/// Format a flat scan result as JSON (machine-readable mirror of the report)
#[must_use]
pub fn format_json(result: &FlatScanResult) -> String {
    let output = serde_json::json!({
        "root": result.summary,
        "records": result.records,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
