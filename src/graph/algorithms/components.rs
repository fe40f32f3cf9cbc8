//! Breadth-first forest labelling.
//!
//! Runs the engine over the whole graph and tags each vertex with the root of
//! the tree that reached it. On an undirected graph the trees are exactly the
//! connected components.

use crate::graph::traversal::{AbortFlag, Bfs, BfsHooks};
use crate::graph::{Graph, VertexId};

#[derive(Debug)]
struct Labeler {
    root: Vec<Option<VertexId>>,
    order: Vec<VertexId>,
    roots: Vec<VertexId>,
}

impl BfsHooks for Labeler {
    fn on_vertex_early(&mut self, v: VertexId, _abort: &mut AbortFlag) {
        if self.root[v].is_none() {
            self.root[v] = Some(v);
            self.roots.push(v);
        }
        self.order.push(v);
    }

    fn on_edge(&mut self, from: VertexId, to: VertexId, _abort: &mut AbortFlag) {
        if self.root[to].is_none() {
            self.root[to] = self.root[from];
        }
    }
}

/// Tree membership of every vertex after a full breadth-first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    root: Vec<VertexId>,
    order: Vec<VertexId>,
    roots: Vec<VertexId>,
}

impl ComponentLabels {
    /// Labels every vertex of `graph`.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut labeler = Labeler {
            root: vec![None; n],
            order: Vec::with_capacity(n),
            roots: Vec::new(),
        };
        let mut bfs = Bfs::new(graph);
        let outcome = bfs.run_full(&mut labeler);
        debug_assert!(!outcome.is_aborted());

        // A full run without aborts dequeues every vertex, and a dequeued
        // vertex always has a label by the time its early hook returns.
        let root = labeler
            .root
            .into_iter()
            .enumerate()
            .map(|(v, r)| r.unwrap_or(v))
            .collect();

        Self {
            root,
            order: labeler.order,
            roots: labeler.roots,
        }
    }

    /// Root of the tree containing `v`, or `None` if `v` is out of range.
    pub fn root_of(&self, v: VertexId) -> Option<VertexId> {
        self.root.get(v).copied()
    }

    /// Number of trees in the forest.
    pub fn count(&self) -> usize {
        self.roots.len()
    }

    /// Tree roots, in the order their trees were built.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Every vertex, in the order the engine dequeued it.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Whether `u` and `v` landed in the same tree.
    pub fn same_tree(&self, u: VertexId, v: VertexId) -> bool {
        match (self.root_of(u), self.root_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_components() {
        let mut g = Graph::undirected(6);
        for (u, v) in [(0, 3), (3, 5), (1, 4)] {
            g.insert_edge_unweighted(u, v).unwrap();
        }
        let labels = ComponentLabels::compute(&g);

        assert_eq!(labels.count(), 3);
        assert_eq!(labels.roots(), &[0, 1, 2]);
        assert_eq!(labels.root_of(5), Some(0));
        assert_eq!(labels.root_of(4), Some(1));
        assert_eq!(labels.root_of(2), Some(2));
        assert!(labels.same_tree(0, 5));
        assert!(!labels.same_tree(0, 4));
        assert_eq!(labels.order(), &[0, 3, 5, 1, 4, 2]);
    }

    #[test]
    fn directed_trees_follow_enumeration_order() {
        // 1 -> 0: vertex 0 roots its own tree before 1 is reached.
        let mut g = Graph::directed(2);
        g.insert_edge_unweighted(1, 0).unwrap();
        let labels = ComponentLabels::compute(&g);

        assert_eq!(labels.roots(), &[0, 1]);
        assert_eq!(labels.root_of(0), Some(0));
        assert_eq!(labels.root_of(7), None);
    }
}
