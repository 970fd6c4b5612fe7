//! Data models for scan results: node kinds, descendant records, and
//! subtree summaries

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// Classification of a filesystem node
///
/// `Other` covers symlinks, sockets, devices, and any path whose type cannot
/// be determined (vanished or permission-denied paths included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Directory,
    File,
    Other,
}

impl NodeKind {
    /// Display ordering priority: files sort before directories, directories
    /// before others
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            NodeKind::File => 0,
            NodeKind::Directory => 1,
            NodeKind::Other => 2,
        }
    }

    /// Fixed-width tag used in rendered report lines
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Directory => "[D]",
            NodeKind::File => "[F]",
            NodeKind::Other => "[O]",
        }
    }
}

/// Per-kind entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub directories: u64,
    pub files: u64,
    pub others: u64,
}

impl KindCounts {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.directories + self.files + self.others
    }
}

/// One entry encountered during a flat recursive walk
///
/// `depth` is 0 for entries directly inside the scanned root and increments
/// by one per nesting level. `size_bytes` is 0 unless the entry is a regular
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescendantRecord {
    pub kind: NodeKind,
    pub depth: u16,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub timestamp: String,
    /// Modification instant kept for ordering only; rendering uses `timestamp`
    pub instant: Option<SystemTime>,
}

/// Statistics for one directory or file node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtreeSummary {
    pub kind: NodeKind,
    pub path: PathBuf,
    /// Aggregate regular-file bytes for directories, own size for files,
    /// 0 for others
    pub size_bytes: u64,
    /// -2 = other/unreachable, -1 = regular file, >= 0 = deepest descendant
    /// depth reached (0 when a directory has no descendants)
    pub max_depth: i32,
    /// Entries encountered anywhere below this node
    pub recursive_counts: KindCounts,
    pub timestamp: String,
}

/// Result of a flat unbounded scan: root summary plus sorted descendant
/// records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatScanResult {
    pub summary: SubtreeSummary,
    pub records: Vec<DescendantRecord>,
}

/// One node of a depth-bounded nested scan
///
/// Children are present only down to the configured bound; a parent owns its
/// children exclusively, so the structure is a strict tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub summary: SubtreeSummary,
    /// Counts among direct children only
    pub immediate_counts: KindCounts,
    pub children: Vec<TreeNode>,
}

/// Replacement child collection produced by a one-level re-enumeration
///
/// Returned by value so callers holding the old snapshot are unaffected; the
/// owner decides when to splice it into an existing node.
#[derive(Debug, Clone)]
pub struct ChildRefresh {
    pub children: Vec<TreeNode>,
    pub immediate_counts: KindCounts,
}
