//! Per-run traversal bookkeeping.
//!
//! `TraversalState` holds the discovered/processed flags and the parent forest
//! for one run of the engine. Everything is a dense vector indexed by
//! [`VertexId`], the same identity the graph uses for adjacency.

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Lifecycle of a vertex during one run. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VisitState {
    /// Not reached yet.
    Undiscovered,
    /// Queued on the frontier.
    Discovered,
    /// Dequeued and its edges examined.
    Processed,
}

/// Discovered/processed flags plus the parent forest of one traversal run.
#[derive(Debug, Clone)]
pub(crate) struct TraversalState {
    discovered: Vec<bool>,
    processed: Vec<bool>,
    parent: Vec<VertexId>,
}

impl TraversalState {
    /// Fresh state: nothing discovered, every vertex its own parent.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            discovered: vec![false; len],
            processed: vec![false; len],
            parent: (0..len).collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns every vertex to `Undiscovered` and makes it its own parent.
    pub(crate) fn clear(&mut self) {
        self.discovered.fill(false);
        self.processed.fill(false);
        for (v, p) in self.parent.iter_mut().enumerate() {
            *p = v;
        }
    }

    #[inline(always)]
    pub(crate) fn is_discovered(&self, v: VertexId) -> bool {
        self.discovered[v]
    }

    #[inline(always)]
    pub(crate) fn is_processed(&self, v: VertexId) -> bool {
        self.processed[v]
    }

    #[inline(always)]
    pub(crate) fn mark_discovered(&mut self, v: VertexId) {
        self.discovered[v] = true;
    }

    #[inline(always)]
    pub(crate) fn mark_processed(&mut self, v: VertexId) {
        debug_assert!(self.discovered[v], "vertex {v} processed before discovery");
        self.processed[v] = true;
    }

    /// Marks `child` discovered through the tree edge `parent -> child`.
    #[inline(always)]
    pub(crate) fn discover_from(&mut self, parent: VertexId, child: VertexId) {
        self.discovered[child] = true;
        self.parent[child] = parent;
    }

    #[inline(always)]
    pub(crate) fn parent(&self, v: VertexId) -> VertexId {
        self.parent[v]
    }

    pub(crate) fn state(&self, v: VertexId) -> VisitState {
        if self.processed[v] {
            VisitState::Processed
        } else if self.discovered[v] {
            VisitState::Discovered
        } else {
            VisitState::Undiscovered
        }
    }
}
