//! Integration tests for the breadth-first engine and its hook protocol.

use graphwalk::*;

fn undirected(n: usize, edges: &[(VertexId, VertexId)]) -> Graph {
    let mut g = Graph::undirected(n);
    for &(u, v) in edges {
        g.insert_edge_unweighted(u, v).unwrap();
    }
    g
}

#[test]
fn full_run_processes_every_vertex() {
    let g = undirected(7, &[(0, 1), (1, 2), (4, 5), (5, 6), (6, 4)]);
    let mut bfs = Bfs::new(&g);

    assert_eq!(bfs.run_full(&mut ()), Outcome::Completed);
    for v in g.vertices() {
        assert_eq!(bfs.state(v).unwrap(), VisitState::Processed);
    }
    assert_eq!(bfs.roots().collect::<Vec<_>>(), vec![0, 3, 4]);
}

#[test]
fn parent_forest_gives_paths_inside_components() {
    let g = undirected(7, &[(0, 1), (1, 2), (4, 5), (5, 6), (6, 4)]);
    let mut bfs = Bfs::new(&g);
    bfs.run_full(&mut ());

    assert_eq!(bfs.path_between(0, 2).unwrap(), vec![0, 1, 2]);
    assert_eq!(bfs.path_between(4, 6).unwrap(), vec![4, 6]);
    assert_eq!(
        bfs.path_between(0, 6),
        Err(GraphError::NoPath { from: 0, to: 6 })
    );
}

#[test]
fn directed_pair_examines_both_directions() {
    let mut g = Graph::directed(2);
    g.insert_edge_unweighted(0, 1).unwrap();
    g.insert_edge_unweighted(1, 0).unwrap();

    let mut edges = Vec::new();
    let mut hooks = HookFns::new().with_edge(|from, to, _: &mut AbortFlag| edges.push((from, to)));
    Bfs::new(&g).run_full(&mut hooks);
    drop(hooks);

    assert_eq!(edges, vec![(0, 1), (1, 0)]);
}

#[test]
fn undirected_edge_examined_once() {
    let g = undirected(2, &[(0, 1)]);

    let mut edges = Vec::new();
    let mut hooks = HookFns::new().with_edge(|from, to, _: &mut AbortFlag| edges.push((from, to)));
    Bfs::new(&g).run_full(&mut hooks);
    drop(hooks);

    assert_eq!(edges, vec![(0, 1)]);
}

#[test]
fn late_hook_sees_children_discovered() {
    // Star centred on 0.
    let g = undirected(4, &[(0, 1), (0, 2), (0, 3)]);
    let mut late_order = Vec::new();
    let mut hooks = HookFns::new().with_vertex_late(|v, _: &mut AbortFlag| late_order.push(v));
    let mut bfs = Bfs::new(&g);
    bfs.run_from(0, &mut hooks).unwrap();
    drop(hooks);

    assert_eq!(late_order, vec![0, 1, 2, 3]);
    for leaf in 1..4 {
        assert_eq!(bfs.parent(leaf).unwrap(), 0);
    }
}

#[test]
fn graph_is_shared_by_sequential_runs() {
    let g = undirected(3, &[(0, 1), (1, 2)]);

    let first = TwoColor::new(&g).is_bipartite().unwrap();
    let labels = ComponentLabels::compute(&g);
    let mut bfs = Bfs::new(&g);
    bfs.run_from(2, &mut ()).unwrap();

    assert!(first);
    assert_eq!(labels.count(), 1);
    assert_eq!(bfs.path_between(2, 0).unwrap(), vec![2, 1, 0]);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn errors_format_for_humans() {
    let g = Graph::undirected(2);
    let err = Bfs::new(&g).run_from(5, &mut ()).unwrap_err();
    assert_eq!(err.to_string(), "invalid vertex 5: graph has 2 vertices");
    assert_eq!(
        GraphError::NoPath { from: 0, to: 1 }.to_string(),
        "no path from vertex 0 to vertex 1"
    );
}
