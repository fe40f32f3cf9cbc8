//! Bipartiteness scenarios driven end to end through the loader.

use graphwalk::io::{parse_str, write_graphs};
use graphwalk::*;

fn four_cycle() -> Graph {
    let mut g = Graph::undirected(4);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.insert_edge_unweighted(u, v).unwrap();
    }
    g
}

#[test]
fn four_cycle_is_bipartite_with_alternating_colors() {
    let g = four_cycle();
    let mut check = TwoColor::new(&g);

    assert!(check.is_bipartite().unwrap());
    for v in 0..4 {
        let next = (v + 1) % 4;
        assert_ne!(check.color(v), check.color(next));
        assert_ne!(check.color(v), Some(Color::None));
    }
}

#[test]
fn triangle_chord_breaks_bipartiteness() {
    let mut g = four_cycle();
    g.insert_edge_unweighted(0, 2).unwrap();
    assert!(!TwoColor::new(&g).is_bipartite().unwrap());
}

#[test]
fn edgeless_graphs_are_bipartite() {
    for n in [0, 1, 5] {
        let g = Graph::undirected(n);
        let mut check = TwoColor::new(&g);
        assert!(check.is_bipartite().unwrap());
        assert!(check.colors().iter().all(|&c| c == Color::A));
    }
}

#[test]
fn loader_fixture_answers_match() {
    // A triangle, then a star.
    let input = "uva\nundirected\n3\n3\n0 1\n1 2\n2 0\n\
                 9\n8\n0 1\n0 2\n0 3\n0 4\n0 5\n0 6\n0 7\n0 8\n0\n";
    let graphs = parse_str(input).unwrap();

    let answers: Vec<bool> = graphs
        .iter()
        .map(|g| TwoColor::new(g).is_bipartite().unwrap())
        .collect();
    assert_eq!(answers, vec![false, true]);
}

#[test]
fn written_fixture_round_trips_answers() {
    let mut triangle = four_cycle();
    triangle.insert_edge_unweighted(0, 2).unwrap();
    let graphs = vec![four_cycle(), triangle];

    let mut buf = Vec::new();
    write_graphs(&mut buf, &graphs).unwrap();
    let reread = parse_str(std::str::from_utf8(&buf).unwrap()).unwrap();

    let answers: Vec<bool> = reread
        .iter()
        .map(|g| TwoColor::new(g).is_bipartite().unwrap())
        .collect();
    assert_eq!(answers, vec![true, false]);
}
