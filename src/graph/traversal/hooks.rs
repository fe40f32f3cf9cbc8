//! Extension points of the breadth-first engine.
//!
//! A specialization implements [`BfsHooks`] and overrides any subset of the
//! three callbacks. Every callback receives the run's [`AbortFlag`]; setting it
//! asks the engine to stop at its next checkpoint.

use crate::graph::VertexId;

/// Cooperative cancellation signal shared by the engine and its hooks.
///
/// The engine reads it at the top of every dequeue iteration and between
/// components of a full run. Nothing else interrupts a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbortFlag(bool);

impl AbortFlag {
    /// Requests that the current run stop.
    #[inline]
    pub fn set(&mut self) {
        self.0 = true;
    }

    /// Whether a stop was requested.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.0 = false;
    }
}

/// Callbacks invoked by [`Bfs`](super::Bfs) at fixed points of the walk.
///
/// For each dequeued vertex `v` the engine calls, in order:
/// 1. `on_vertex_early(v)`
/// 2. `on_edge(v, w)` for each outgoing edge, unless the graph is undirected
///    and `w` is already processed
/// 3. `on_vertex_late(v)`
pub trait BfsHooks {
    /// Called when `v` leaves the frontier, before its edges are examined.
    fn on_vertex_early(&mut self, _v: VertexId, _abort: &mut AbortFlag) {}

    /// Called for an edge `from -> to` of the vertex being processed.
    fn on_edge(&mut self, _from: VertexId, _to: VertexId, _abort: &mut AbortFlag) {}

    /// Called after every outgoing edge of `v` was examined.
    fn on_vertex_late(&mut self, _v: VertexId, _abort: &mut AbortFlag) {}
}

/// Plain traversal.
impl BfsHooks for () {}

impl<H: BfsHooks + ?Sized> BfsHooks for &mut H {
    fn on_vertex_early(&mut self, v: VertexId, abort: &mut AbortFlag) {
        (**self).on_vertex_early(v, abort);
    }

    fn on_edge(&mut self, from: VertexId, to: VertexId, abort: &mut AbortFlag) {
        (**self).on_edge(from, to, abort);
    }

    fn on_vertex_late(&mut self, v: VertexId, abort: &mut AbortFlag) {
        (**self).on_vertex_late(v, abort);
    }
}

/// Signature of the vertex callbacks of [`HookFns`] before one is supplied.
pub type VertexFn = fn(VertexId, &mut AbortFlag);
/// Signature of the edge callback of [`HookFns`] before one is supplied.
pub type EdgeFn = fn(VertexId, VertexId, &mut AbortFlag);

fn skip_vertex(_: VertexId, _: &mut AbortFlag) {}
fn skip_edge(_: VertexId, _: VertexId, _: &mut AbortFlag) {}

/// [`BfsHooks`] assembled from closures.
///
/// ```rust
/// use graphwalk::graph::{Bfs, Graph, HookFns};
///
/// let mut g = Graph::undirected(3);
/// g.insert_edge_unweighted(0, 1).unwrap();
/// g.insert_edge_unweighted(1, 2).unwrap();
///
/// let mut order = Vec::new();
/// let mut hooks = HookFns::new().with_vertex_early(|v, _| order.push(v));
/// Bfs::new(&g).run_from(0, &mut hooks).unwrap();
/// drop(hooks);
/// assert_eq!(order, vec![0, 1, 2]);
/// ```
pub struct HookFns<E = VertexFn, D = EdgeFn, L = VertexFn> {
    early: E,
    edge: D,
    late: L,
}

impl HookFns {
    /// Hooks that do nothing until callbacks are attached.
    pub fn new() -> Self {
        Self {
            early: skip_vertex,
            edge: skip_edge,
            late: skip_vertex,
        }
    }
}

impl Default for HookFns {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, D, L> HookFns<E, D, L> {
    /// Replaces the early vertex callback.
    pub fn with_vertex_early<F>(self, f: F) -> HookFns<F, D, L>
    where
        F: FnMut(VertexId, &mut AbortFlag),
    {
        HookFns {
            early: f,
            edge: self.edge,
            late: self.late,
        }
    }

    /// Replaces the edge callback.
    pub fn with_edge<F>(self, f: F) -> HookFns<E, F, L>
    where
        F: FnMut(VertexId, VertexId, &mut AbortFlag),
    {
        HookFns {
            early: self.early,
            edge: f,
            late: self.late,
        }
    }

    /// Replaces the late vertex callback.
    pub fn with_vertex_late<F>(self, f: F) -> HookFns<E, D, F>
    where
        F: FnMut(VertexId, &mut AbortFlag),
    {
        HookFns {
            early: self.early,
            edge: self.edge,
            late: f,
        }
    }
}

impl<E, D, L> BfsHooks for HookFns<E, D, L>
where
    E: FnMut(VertexId, &mut AbortFlag),
    D: FnMut(VertexId, VertexId, &mut AbortFlag),
    L: FnMut(VertexId, &mut AbortFlag),
{
    fn on_vertex_early(&mut self, v: VertexId, abort: &mut AbortFlag) {
        (self.early)(v, abort);
    }

    fn on_edge(&mut self, from: VertexId, to: VertexId, abort: &mut AbortFlag) {
        (self.edge)(from, to, abort);
    }

    fn on_vertex_late(&mut self, v: VertexId, abort: &mut AbortFlag) {
        (self.late)(v, abort);
    }
}
