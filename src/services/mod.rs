//! Core services for classification, traversal, ordering, and formatting

pub mod classify;
pub mod format;
pub mod sort;
pub mod timefmt;
pub mod traverse;
pub mod tree;
