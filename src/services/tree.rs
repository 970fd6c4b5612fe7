//! Depth-bounded nested scanning producing an owned tree of summaries

use crate::models::{ChildRefresh, KindCounts, NodeKind, SubtreeSummary, TreeNode};
use crate::services::classify::{self, Classification};
use crate::services::{sort, traverse};
use std::fs;
use std::path::Path;

/// Build a tree rooted at `path`, enumerating direct children while `levels`
/// permits. `None` means unbounded.
///
/// Every directory node gets a full-subtree summary from the aggregator even
/// when enumeration stops at the bound; children beyond the bound are omitted
/// entirely. An unreachable root degrades to an `Other` leaf with
/// `max_depth = -2`.
#[must_use]
pub fn build_node(path: &Path, levels: Option<u32>) -> TreeNode {
    let cls = classify::classify(path);
    node_from_classification(path, &cls, levels)
}

/// Re-enumerate a node's direct children one level deep.
///
/// Pure with respect to the node: the replacement collection and immediate
/// counts are returned instead of mutated in place, so readers of the old
/// snapshot are unaffected. The node's own summary is left for the caller to
/// recompute if desired. Classification and aggregation run afresh for every
/// new child.
#[must_use]
pub fn refresh_children(node: &TreeNode) -> ChildRefresh {
    if node.summary.kind != NodeKind::Directory {
        log::warn!(
            "refusing to refresh non-directory node {}",
            node.summary.path.display()
        );
        return ChildRefresh {
            children: Vec::new(),
            immediate_counts: KindCounts::default(),
        };
    }

    let (children, immediate_counts) = enumerate_children(&node.summary.path, Some(0));
    ChildRefresh {
        children,
        immediate_counts,
    }
}

fn node_from_classification(path: &Path, cls: &Classification, levels: Option<u32>) -> TreeNode {
    match cls.kind {
        NodeKind::Directory => {
            let stats = traverse::aggregate(path);
            let summary = SubtreeSummary {
                kind: NodeKind::Directory,
                path: path.to_path_buf(),
                size_bytes: stats.size_bytes,
                max_depth: i32::from(stats.max_depth),
                recursive_counts: stats.counts,
                timestamp: cls.timestamp.clone(),
            };

            let (children, immediate_counts) = if expansion_permitted(levels) {
                enumerate_children(path, levels.map(|l| l - 1))
            } else {
                (Vec::new(), KindCounts::default())
            };

            TreeNode {
                summary,
                immediate_counts,
                children,
            }
        }
        NodeKind::File => leaf(path, cls, -1),
        NodeKind::Other => leaf(path, cls, -2),
    }
}

fn expansion_permitted(levels: Option<u32>) -> bool {
    levels.is_none_or(|l| l > 0)
}

/// Enumerate one level of direct children, building a (sorted) node per
/// child. Child directories recurse with the decremented bound.
fn enumerate_children(dir: &Path, child_levels: Option<u32>) -> (Vec<TreeNode>, KindCounts) {
    let mut children = Vec::new();
    let mut counts = KindCounts::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot enumerate {}: {err}", dir.display());
            return (children, counts);
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        let cls = classify::classify_entry(&path, entry.metadata());
        match cls.kind {
            NodeKind::Directory => counts.directories += 1,
            NodeKind::File => counts.files += 1,
            NodeKind::Other => counts.others += 1,
        }
        children.push(node_from_classification(&path, &cls, child_levels));
    }

    sort::sort_children(&mut children);
    (children, counts)
}

fn leaf(path: &Path, cls: &Classification, max_depth: i32) -> TreeNode {
    TreeNode {
        summary: SubtreeSummary {
            kind: cls.kind,
            path: path.to_path_buf(),
            size_bytes: cls.size_bytes,
            max_depth,
            recursive_counts: KindCounts::default(),
            timestamp: cls.timestamp.clone(),
        },
        immediate_counts: KindCounts::default(),
        children: Vec::new(),
    }
}
