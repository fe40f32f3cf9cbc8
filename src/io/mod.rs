//! Loading graphs from text descriptions.

pub mod uva;

pub use uva::{load_file, parse_str, read_graphs, write_graphs, LoadError};
