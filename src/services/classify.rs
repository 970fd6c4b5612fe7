//! Path classification: node kind, byte size, and modification timestamp

use crate::models::NodeKind;
use crate::services::timefmt;
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

/// Best-effort classification of one path
#[derive(Debug, Clone)]
pub struct Classification {
    pub kind: NodeKind,
    /// 0 unless the path is a regular file
    pub size_bytes: u64,
    pub timestamp: String,
    pub instant: Option<SystemTime>,
}

impl Classification {
    fn unavailable() -> Self {
        Self {
            kind: NodeKind::Other,
            size_bytes: 0,
            timestamp: timefmt::unavailable(),
            instant: None,
        }
    }
}

/// Classify a path by statting it.
///
/// Symlinks are not followed and classify as `Other`. A path that cannot be
/// statted (vanished, permission denied) degrades to `Other` with size 0 and
/// an unavailable timestamp; this function never fails.
#[must_use]
pub fn classify(path: &Path) -> Classification {
    classify_entry(path, fs::symlink_metadata(path))
}

/// Classify from an already-fetched stat result, avoiding a second stat when
/// the caller holds a `DirEntry`.
#[must_use]
pub fn classify_entry(path: &Path, metadata: std::io::Result<Metadata>) -> Classification {
    let metadata = match metadata {
        Ok(m) => m,
        Err(err) => {
            log::warn!("cannot stat {}: {err}", path.display());
            return Classification::unavailable();
        }
    };

    let kind = if metadata.is_dir() {
        NodeKind::Directory
    } else if metadata.is_file() {
        NodeKind::File
    } else {
        NodeKind::Other
    };

    let size_bytes = if kind == NodeKind::File { metadata.len() } else { 0 };

    let (timestamp, instant) = match metadata.modified() {
        Ok(instant) => (timefmt::format_instant(instant), Some(instant)),
        Err(err) => {
            log::warn!("cannot read mtime of {}: {err}", path.display());
            (timefmt::unavailable(), None)
        }
    };

    Classification {
        kind,
        size_bytes,
        timestamp,
        instant,
    }
}
