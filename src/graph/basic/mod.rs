//! Basic graph storage.
//!
//! This module contains the adjacency-list representation every traversal
//! in the crate runs on.

pub mod adj_list;

pub use adj_list::{Edge, Graph, Vertex, VertexId, Weight};
