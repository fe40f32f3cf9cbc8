//! Internal helpers for tracking traversal progress over dense vertex ids.

pub(crate) mod visited;
