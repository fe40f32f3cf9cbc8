//! Route reconstruction from the parent forest of the last run.

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

use super::Bfs;

impl Bfs<'_> {
    /// Returns the tree path `[from, ..., to]` recorded by the last run.
    ///
    /// The walk starts at `to` and follows parents until it meets `from`, so
    /// it only finds `from` if the run that discovered `to` went through it.
    /// `path_between(x, x)` is `[x]` whether or not anything ran.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if either id is not in the graph.
    /// - [`GraphError::NoPath`] if the walk reaches a root without meeting
    ///   `from`, which includes the case where no run covered `to`.
    pub fn path_between(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>> {
        let graph = self.graph();
        graph.check_vertex(from)?;
        graph.check_vertex(to)?;

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            let parent = self.visits.parent(current);
            if parent == current {
                return Err(GraphError::NoPath { from, to });
            }
            // Parents form a forest, so a path can never outgrow the graph.
            debug_assert!(path.len() < self.visits.len());
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Bfs, Graph};
    use crate::GraphError;

    fn diamond() -> Graph {
        // 0 - 1 - 3
        //  \- 2 -/
        let mut g = Graph::undirected(5);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            g.insert_edge_unweighted(u, v).unwrap();
        }
        g
    }

    #[test]
    fn path_follows_first_discovery() {
        let g = diamond();
        let mut bfs = Bfs::new(&g);
        bfs.run_from(0, &mut ()).unwrap();

        assert_eq!(bfs.path_between(0, 3).unwrap(), vec![0, 1, 3]);
        assert_eq!(bfs.path_between(0, 2).unwrap(), vec![0, 2]);
        assert_eq!(bfs.path_between(1, 3).unwrap(), vec![1, 3]);
    }

    #[test]
    fn trivial_path_needs_no_run() {
        let g = diamond();
        let bfs = Bfs::new(&g);
        assert_eq!(bfs.path_between(4, 4).unwrap(), vec![4]);
    }

    #[test]
    fn no_run_means_no_path() {
        let g = diamond();
        let bfs = Bfs::new(&g);
        assert_eq!(bfs.path_between(0, 3), Err(GraphError::NoPath { from: 0, to: 3 }));
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let g = diamond();
        let mut bfs = Bfs::new(&g);
        bfs.run_full(&mut ());

        assert_eq!(bfs.path_between(0, 4), Err(GraphError::NoPath { from: 0, to: 4 }));
        // Going up the tree is not the same as going down it.
        assert_eq!(bfs.path_between(3, 0), Err(GraphError::NoPath { from: 3, to: 0 }));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let g = diamond();
        let bfs = Bfs::new(&g);
        assert_eq!(
            bfs.path_between(0, 5),
            Err(GraphError::InvalidVertex { id: 5, node_count: 5 })
        );
        assert_eq!(
            bfs.path_between(9, 9),
            Err(GraphError::InvalidVertex { id: 9, node_count: 5 })
        );
    }

    #[test]
    fn long_chain_is_walked_without_recursion() {
        let n = 200_000;
        let mut g = Graph::directed(n);
        for v in 1..n {
            g.insert_edge_unweighted(v - 1, v).unwrap();
        }
        let mut bfs = Bfs::new(&g);
        bfs.run_from(0, &mut ()).unwrap();

        let path = bfs.path_between(0, n - 1).unwrap();
        assert_eq!(path.len(), n);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&(n - 1)));
    }
}
