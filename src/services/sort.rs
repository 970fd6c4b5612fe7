//! Deterministic display ordering for scan results

use crate::models::{DescendantRecord, TreeNode};
use std::cmp::Ordering;

/// Order flat records by `(depth, kind priority, modification instant, path)`.
///
/// The path tie-break makes the order total: no two distinct paths compare
/// equal, so repeated sorts of the same input are byte-identical.
pub fn sort_records(records: &mut [DescendantRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(a: &DescendantRecord, b: &DescendantRecord) -> Ordering {
    a.depth
        .cmp(&b.depth)
        .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
        .then_with(|| a.instant.cmp(&b.instant))
        .then_with(|| a.path.cmp(&b.path))
}

/// Order one level of tree children by `(kind priority, path)`.
pub fn sort_children(children: &mut [TreeNode]) {
    children.sort_by(|a, b| {
        a.summary
            .kind
            .priority()
            .cmp(&b.summary.kind.priority())
            .then_with(|| a.summary.path.cmp(&b.summary.path))
    });
}
