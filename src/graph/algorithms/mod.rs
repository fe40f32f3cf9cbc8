//! Algorithms built as hook sets on top of [`Bfs`](crate::graph::Bfs).

pub mod components;
pub mod two_color;

pub use components::ComponentLabels;
pub use two_color::{Color, TwoColor};
