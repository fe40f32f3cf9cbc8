//! Graph storage, breadth-first traversal and the algorithms layered on it.
//!
//! The module is organized into:
//! - `basic`: the adjacency-list [`Graph`]
//! - `traversal`: the hook-driven [`Bfs`] engine and path reconstruction
//! - `algorithms`: hook sets such as [`TwoColor`] and [`ComponentLabels`]

pub mod algorithms;
pub mod basic;
pub mod traversal;
pub(crate) mod access;

pub use access::visited::VisitState;
pub use algorithms::{Color, ComponentLabels, TwoColor};
pub use basic::{Edge, Graph, Vertex, VertexId, Weight};
pub use traversal::{AbortFlag, Bfs, BfsHooks, HookFns, Outcome};
