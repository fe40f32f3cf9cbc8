//! # `graphwalk` - Hook-Driven Graph Traversal
//!
//! An adjacency-list graph plus a breadth-first traversal engine whose
//! behavior is specialized through three hooks and a shared abort flag.
//! Algorithms such as the two-coloring (bipartiteness) check are written as
//! small hook sets instead of bespoke traversals.
//!
//! ## Guarantees
//!
//! ### Identity
//! - **One id per vertex**: vertices are the dense ids `0..node_count`. Adjacency,
//!   degree counters and all traversal bookkeeping are vectors indexed by that id,
//!   so no vertex can be tracked twice under different identities.
//! - **Rejected inserts change nothing**: an out-of-range id or an allocation
//!   failure leaves edge lists, degrees and counts as they were.
//!
//! ### Traversal
//! - **Monotonic progress**: within a run a vertex moves
//!   `Undiscovered -> Discovered -> Processed` and never back.
//! - **Fixed hook order**: `on_vertex_early`, then `on_edge` per outgoing edge,
//!   then `on_vertex_late`, for every dequeued vertex.
//! - **Cooperative abort**: hooks set the [`AbortFlag`]; the engine checks it at
//!   the top of each dequeue and between components. An aborted run is a normal
//!   [`Outcome`], not an error.
//! - **Bounded stack**: path reconstruction walks parents iteratively.
//!
//! ## Architecture
//!
//! 1. **Storage** ([`Graph`]): fixed capacity and directedness, edges appended
//!    in insertion order, undirected edges mirrored automatically.
//! 2. **Engine** ([`Bfs`]): borrows a graph, owns the per-run state
//!    (discovered, processed, parent forest, frontier, abort flag).
//! 3. **Hooks** ([`BfsHooks`], [`HookFns`]): the extension points.
//! 4. **Algorithms** ([`TwoColor`], [`ComponentLabels`]): hook sets with their
//!    own per-vertex state.
//! 5. **Loader** ([`io::uva`]): the text format used by the `graphwalk` binary.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{Graph, TwoColor};
//!
//! let mut g = Graph::undirected(3);
//! g.insert_edge_unweighted(0, 1).unwrap();
//! g.insert_edge_unweighted(1, 2).unwrap();
//! assert!(TwoColor::new(&g).is_bipartite().unwrap());
//!
//! g.insert_edge_unweighted(2, 0).unwrap();
//! assert!(!TwoColor::new(&g).is_bipartite().unwrap());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod io;

pub use error::{GraphError, Result};
pub use graph::{
    AbortFlag, Bfs, BfsHooks, Color, ComponentLabels, Edge, Graph, HookFns, Outcome, TwoColor,
    Vertex, VertexId, VisitState, Weight,
};

// Compile-time assertions for the per-vertex state layouts.
const _: () = {
    use core::mem;

    // Colors and visit states are stored once per vertex; keep them a byte.
    assert!(mem::size_of::<Color>() == 1);
    assert!(mem::size_of::<VisitState>() == 1);
    assert!(mem::size_of::<Outcome>() == 1);

    // The abort flag is a plain bool behind a newtype.
    assert!(mem::size_of::<AbortFlag>() == mem::size_of::<bool>());
};
