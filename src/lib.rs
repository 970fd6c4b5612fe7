//! Disk Usage Tree Library
//!
//! This library walks a filesystem subtree and produces depth- and
//! size-annotated reports of its contents: a flat, depth-tagged listing of
//! every reachable descendant, or a nested tree truncated at a caller-chosen
//! depth bound. Scans are read-only and tolerate per-entry failures
//! (permission-denied nodes, vanished entries, unreadable timestamps) by
//! logging and skipping instead of aborting.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{
    ChildRefresh, DescendantRecord, FlatScanResult, KindCounts, NodeKind, SubtreeSummary, TreeNode,
};
pub use services::tree::refresh_children;

use std::path::Path;
use std::result;

use services::traverse::WalkStats;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Scan a subtree exhaustively, producing one depth-tagged record per
/// reachable entry plus aggregate statistics for the root.
///
/// Read-side failures never fail the scan: unreadable directories are logged
/// and their contents omitted, entries whose stat fails are recorded with
/// size 0, and an unreachable root degrades to an `Other` summary with
/// `max_depth = -2` and no records.
#[must_use]
pub fn scan_flat<P: AsRef<Path>>(root: P) -> FlatScanResult {
    let root = root.as_ref();
    let cls = services::classify::classify(root);

    match cls.kind {
        NodeKind::Directory => {
            let (mut records, stats) = services::traverse::walk_records(root);
            services::sort::sort_records(&mut records);
            FlatScanResult {
                summary: directory_summary(root, &stats, cls.timestamp),
                records,
            }
        }
        NodeKind::File | NodeKind::Other => FlatScanResult {
            summary: leaf_summary(root, &cls),
            records: Vec::new(),
        },
    }
}

/// Scan a subtree down to `levels` nesting levels, producing a tree of
/// per-directory summaries.
///
/// `None` means unbounded. Every directory node carries full-subtree
/// statistics even when enumeration below the bound stops; children beyond
/// the bound are omitted entirely.
#[must_use]
pub fn scan_tree<P: AsRef<Path>>(root: P, levels: Option<u32>) -> TreeNode {
    services::tree::build_node(root.as_ref(), levels)
}

fn directory_summary(path: &Path, stats: &WalkStats, timestamp: String) -> SubtreeSummary {
    SubtreeSummary {
        kind: NodeKind::Directory,
        path: path.to_path_buf(),
        size_bytes: stats.size_bytes,
        max_depth: i32::from(stats.max_depth),
        recursive_counts: stats.counts,
        timestamp,
    }
}

fn leaf_summary(path: &Path, cls: &services::classify::Classification) -> SubtreeSummary {
    SubtreeSummary {
        kind: cls.kind,
        path: path.to_path_buf(),
        size_bytes: cls.size_bytes,
        max_depth: if cls.kind == NodeKind::File { -1 } else { -2 },
        recursive_counts: KindCounts::default(),
        timestamp: cls.timestamp.clone(),
    }
}
