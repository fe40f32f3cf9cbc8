//! Breadth-first traversal engine.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::access::visited::{TraversalState, VisitState};
use crate::graph::{Graph, VertexId};

use super::hooks::{AbortFlag, BfsHooks};
use super::Outcome;

/// A breadth-first walk over a borrowed [`Graph`].
///
/// The engine owns the bookkeeping of its most recent run (discovered and
/// processed flags, parent forest, frontier, abort flag). Every public run
/// starts from fresh state; after it returns, the state stays readable through
/// [`Bfs::state`], [`Bfs::parent`] and [`Bfs::path_between`] until the next
/// run. The graph itself is never modified.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `run_full` | \(O(n + m)\) | Plus the cost of the hooks |
/// | `run_from` | \(O(n + m)\) | Resets all `n` flags first |
/// | `path_between` | \(O(\text{depth})\) | Iterative parent walk |
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    pub(super) visits: TraversalState,
    frontier: VecDeque<VertexId>,
    abort: AbortFlag,
}

impl<'g> Bfs<'g> {
    /// Binds a new engine to `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visits: TraversalState::new(graph.vertex_count()),
            frontier: VecDeque::new(),
            abort: AbortFlag::default(),
        }
    }

    /// The graph this engine walks.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forgets the previous run: every vertex becomes `Undiscovered` and its
    /// own parent, and the abort flag is cleared.
    pub fn reset(&mut self) {
        self.visits.clear();
        self.frontier.clear();
        self.abort.clear();
    }

    /// Walks every component of the graph.
    ///
    /// Vertices are taken in [`Graph::vertices`] order; each one still
    /// undiscovered roots a new breadth-first tree. A set abort flag stops the
    /// run before the next component.
    pub fn run_full<H: BfsHooks + ?Sized>(&mut self, hooks: &mut H) -> Outcome {
        self.reset();
        tracing::debug!(vertices = self.graph.vertex_count(), "full traversal started");

        let mut components = 0usize;
        for v in self.graph.vertices() {
            if self.abort.is_set() {
                break;
            }
            if !self.visits.is_discovered(v) {
                components += 1;
                tracing::trace!(root = v, component = components, "component started");
                self.search_component(v, hooks);
            }
        }
        self.frontier.clear();

        self.finish(components)
    }

    /// Walks the component containing `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is not a vertex of the bound graph; the previous run's state
    /// is kept in that case.
    pub fn run_from<H: BfsHooks + ?Sized>(
        &mut self,
        start: VertexId,
        hooks: &mut H,
    ) -> Result<Outcome> {
        self.graph.check_vertex(start)?;
        self.reset();
        tracing::debug!(start, "traversal started");

        self.search_component(start, hooks);
        Ok(self.finish(1))
    }

    fn finish(&mut self, components: usize) -> Outcome {
        if self.abort.is_set() {
            tracing::debug!(components, "traversal aborted by hook");
            Outcome::Aborted
        } else {
            tracing::debug!(components, "traversal completed");
            Outcome::Completed
        }
    }

    /// Breadth-first loop over one component. Does not reset earlier state,
    /// so a full run accumulates its trees in one parent forest.
    fn search_component<H: BfsHooks + ?Sized>(&mut self, start: VertexId, hooks: &mut H) {
        let graph = self.graph;
        let directed = graph.is_directed();

        self.frontier.clear();
        self.visits.mark_discovered(start);
        self.frontier.push_back(start);

        while !self.abort.is_set() {
            let Some(v) = self.frontier.pop_front() else {
                break;
            };
            tracing::trace!(vertex = v, "processing vertex");

            hooks.on_vertex_early(v, &mut self.abort);
            self.visits.mark_processed(v);

            for edge in graph.edges_of(v) {
                let w = edge.target();
                // An undirected edge back to a processed vertex was already
                // examined from the other side.
                if directed || !self.visits.is_processed(w) {
                    hooks.on_edge(v, w, &mut self.abort);
                }
                if !self.visits.is_discovered(w) {
                    self.visits.discover_from(v, w);
                    self.frontier.push_back(w);
                }
            }

            hooks.on_vertex_late(v, &mut self.abort);
        }
    }

    /// Whether the last run was stopped by a hook.
    pub fn is_aborted(&self) -> bool {
        self.abort.is_set()
    }

    /// Where `v` got to in the last run.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `v` is not a vertex of the bound graph.
    pub fn state(&self, v: VertexId) -> Result<VisitState> {
        self.graph.check_vertex(v)?;
        Ok(self.visits.state(v))
    }

    /// The vertex `v` was discovered from, or `v` itself for a root or an
    /// undiscovered vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `v` is not a vertex of the bound graph.
    pub fn parent(&self, v: VertexId) -> Result<VertexId> {
        self.graph.check_vertex(v)?;
        Ok(self.visits.parent(v))
    }

    /// Roots of the breadth-first trees built by the last run, in the order
    /// their components were entered.
    pub fn roots(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph
            .vertices()
            .filter(move |&v| self.visits.is_discovered(v) && self.visits.parent(v) == v)
    }
}
