//! Bipartiteness test layered on the breadth-first engine.
//!
//! The first vertex dequeued in each component is painted [`Color::A`]; every
//! examined edge paints an unpainted target with the opposite color of its
//! source. An edge between two vertices of the same color proves the graph is
//! not two-colorable and aborts the walk.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::traversal::{AbortFlag, Bfs, BfsHooks, Outcome};
use crate::graph::{Graph, VertexId};

/// Color assigned to a vertex by [`TwoColor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Not reached yet.
    #[default]
    None,
    /// Color of every component root.
    A,
    /// The other color.
    B,
}

impl Color {
    /// Swaps `A` and `B`; `None` stays `None`.
    pub fn complement(self) -> Self {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
            Color::None => Color::None,
        }
    }
}

/// Per-vertex colors, written by the hooks during a run.
#[derive(Debug, Clone)]
struct Coloring {
    colors: Vec<Color>,
}

impl BfsHooks for Coloring {
    fn on_vertex_early(&mut self, v: VertexId, _abort: &mut AbortFlag) {
        if self.colors[v] == Color::None {
            self.colors[v] = Color::A;
        }
    }

    fn on_edge(&mut self, from: VertexId, to: VertexId, abort: &mut AbortFlag) {
        if self.colors[to] == Color::None {
            self.colors[to] = self.colors[from].complement();
        } else if self.colors[to] == self.colors[from] {
            tracing::debug!(from, to, color = ?self.colors[to], "adjacent vertices share a color");
            abort.set();
        }
    }
}

/// Two-coloring checker for one graph.
///
/// ```rust
/// use graphwalk::graph::{Color, Graph, TwoColor};
///
/// let mut square = Graph::undirected(4);
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     square.insert_edge_unweighted(u, v).unwrap();
/// }
///
/// let mut check = TwoColor::new(&square);
/// assert!(check.is_bipartite().unwrap());
/// assert_eq!(check.colors(), &[Color::A, Color::B, Color::A, Color::B]);
/// ```
#[derive(Debug)]
pub struct TwoColor<'g> {
    bfs: Bfs<'g>,
    coloring: Coloring,
}

impl<'g> TwoColor<'g> {
    /// Prepares a check of `graph` with every vertex uncolored.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            bfs: Bfs::new(graph),
            coloring: Coloring {
                colors: vec![Color::None; graph.vertex_count()],
            },
        }
    }

    /// Whether every component of the graph is two-colorable.
    ///
    /// # Errors
    /// Propagates any engine error unchanged; an aborted walk is the `false`
    /// answer, not an error.
    pub fn is_bipartite(&mut self) -> Result<bool> {
        self.check(None)
    }

    /// Whether the component containing `start` is two-colorable.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if `start` is not a vertex of the graph.
    pub fn is_bipartite_from(&mut self, start: VertexId) -> Result<bool> {
        self.check(Some(start))
    }

    fn check(&mut self, start: Option<VertexId>) -> Result<bool> {
        let outcome = match start {
            Some(start) => {
                // Validate before wiping the previous coloring.
                self.bfs.graph().check_vertex(start)?;
                self.coloring.colors.fill(Color::None);
                self.bfs.run_from(start, &mut self.coloring)?
            }
            None => {
                self.coloring.colors.fill(Color::None);
                self.bfs.run_full(&mut self.coloring)
            }
        };
        Ok(match outcome {
            Outcome::Aborted => false,
            Outcome::Completed => true,
        })
    }

    /// Colors from the last check, indexed by vertex id.
    ///
    /// After a `false` answer the coloring is partial and contains the
    /// conflicting pair.
    pub fn colors(&self) -> &[Color] {
        &self.coloring.colors
    }

    /// Color of `v` from the last check, or `None` if `v` is out of range.
    pub fn color(&self, v: VertexId) -> Option<Color> {
        self.coloring.colors.get(v).copied()
    }

    /// The two color classes, if the last check answered `true`.
    pub fn partition(&self) -> Option<(Vec<VertexId>, Vec<VertexId>)> {
        if self.bfs.is_aborted() {
            return None;
        }
        let mut a = Vec::new();
        let mut b = Vec::new();
        for (v, color) in self.coloring.colors.iter().enumerate() {
            match color {
                Color::A => a.push(v),
                Color::B => b.push(v),
                Color::None => {}
            }
        }
        Some((a, b))
    }

    /// The engine driving the check, for inspecting its last run.
    pub fn bfs(&self) -> &Bfs<'g> {
        &self.bfs
    }
}
