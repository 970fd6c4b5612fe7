//! Depth-first filesystem traversal: exhaustive aggregation and flat record
//! collection

use crate::models::{DescendantRecord, KindCounts, NodeKind};
use crate::services::classify;
use std::fs;
use std::path::Path;

/// Statistics accumulated over one subtree walk
///
/// `max_depth` is the deepest enumeration level reached, with the direct
/// children of the walked path at depth 0; it stays 0 when the subtree has
/// no descendants.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkStats {
    pub size_bytes: u64,
    pub max_depth: u16,
    pub counts: KindCounts,
}

/// Exhaustively walk the subtree under `root` and accumulate its statistics.
///
/// Per-entry failures are logged and skipped at the smallest granularity: an
/// unreadable directory drops only its own contents, an entry whose stat
/// fails is counted as `Other` with 0 bytes. The walk itself never fails.
#[must_use]
pub fn aggregate(root: &Path) -> WalkStats {
    let mut stats = WalkStats::default();
    walk(root, 0, &mut stats, None);
    stats
}

/// Walk the subtree under `root`, producing one record per reachable entry
/// alongside the same statistics [`aggregate`] computes.
///
/// Records come back in enumeration order; callers impose display order
/// separately.
#[must_use]
pub fn walk_records(root: &Path) -> (Vec<DescendantRecord>, WalkStats) {
    let mut stats = WalkStats::default();
    let mut records = Vec::new();
    walk(root, 0, &mut stats, Some(&mut records));
    (records, stats)
}

fn walk(
    dir: &Path,
    depth: u16,
    stats: &mut WalkStats,
    mut records: Option<&mut Vec<DescendantRecord>>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot enumerate {}: {err}", dir.display());
            return;
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
        if depth > stats.max_depth {
            stats.max_depth = depth;
        }

        let cls = classify::classify_entry(&path, entry.metadata());
        match cls.kind {
            NodeKind::Directory => stats.counts.directories += 1,
            NodeKind::File => {
                stats.counts.files += 1;
                stats.size_bytes += cls.size_bytes;
            }
            NodeKind::Other => stats.counts.others += 1,
        }

        let is_dir = cls.kind == NodeKind::Directory;
        log::debug!(
            "entry {} (kind {:?}, depth {depth}, size {})",
            path.display(),
            cls.kind,
            cls.size_bytes
        );

        if let Some(out) = records.as_deref_mut() {
            out.push(DescendantRecord {
                kind: cls.kind,
                depth,
                path: path.clone(),
                size_bytes: cls.size_bytes,
                timestamp: cls.timestamp,
                instant: cls.instant,
            });
        }

        if is_dir {
            walk(&path, depth + 1, stats, records.as_deref_mut());
        }
    }
}
