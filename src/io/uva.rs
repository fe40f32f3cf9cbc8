//! Reader and writer for the `uva` graph description format.
//!
//! ```text
//! uva                 format token
//! undirected          `directed` selects directed graphs, anything else undirected
//! 4 3                 node count, edge count
//! 0 1                 one `source target` pair per edge
//! 1 2
//! 2 3
//! 0                   node count 0 (or end of input) ends the list
//! ```
//!
//! All graphs in one description share the directedness from the header, and
//! every edge is inserted with weight `0`.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::str::SplitWhitespace;

use thiserror::Error;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};

/// Format token that must open every description.
pub const FORMAT_TOKEN: &str = "uva";

/// Graph-type token selecting directed graphs.
pub const DIRECTED_TOKEN: &str = "directed";

/// Errors raised while reading a graph description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read.
    #[error("failed to read graph description")]
    Io(#[from] std::io::Error),

    /// The first token does not name a supported format.
    #[error("unsupported graph format {0:?}")]
    UnknownFormat(String),

    /// Input ended inside a graph block.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token that should be a non-negative integer is not one.
    #[error("invalid {what}: {token:?}")]
    InvalidToken {
        /// What the token was supposed to be.
        what: &'static str,
        /// The token as read.
        token: String,
    },

    /// Building graph number `index` (zero-based) failed.
    #[error("graph {index}: {source}")]
    Graph {
        /// Position of the graph in the description.
        index: usize,
        /// The underlying graph error.
        source: GraphError,
    },
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn number(&mut self, what: &'static str) -> Result<usize, LoadError> {
        let token = self.inner.next().ok_or(LoadError::UnexpectedEof(what))?;
        token.parse().map_err(|_| LoadError::InvalidToken {
            what,
            token: token.to_owned(),
        })
    }
}

/// Parses every graph in `input`.
///
/// # Errors
/// Returns a [`LoadError`] describing the first problem found; no graphs are
/// returned in that case.
pub fn parse_str(input: &str) -> Result<Vec<Graph>, LoadError> {
    let mut tokens = Tokens::new(input);

    match tokens.next_token() {
        Some(FORMAT_TOKEN) => {}
        Some(other) => return Err(LoadError::UnknownFormat(other.to_owned())),
        None => return Err(LoadError::UnexpectedEof("format token")),
    }
    let directed = tokens.next_token() == Some(DIRECTED_TOKEN);

    let mut graphs = Vec::new();
    loop {
        let node_count = match tokens.next_token() {
            None => break,
            Some(token) => token.parse::<usize>().map_err(|_| LoadError::InvalidToken {
                what: "node count",
                token: token.to_owned(),
            })?,
        };
        if node_count == 0 {
            break;
        }

        let index = graphs.len();
        let mut graph = Graph::try_new(node_count, directed)
            .map_err(|source| LoadError::Graph { index, source })?;
        let edge_count = tokens.number("edge count")?;
        for _ in 0..edge_count {
            let source: VertexId = tokens.number("edge source")?;
            let target: VertexId = tokens.number("edge target")?;
            graph
                .insert_edge_unweighted(source, target)
                .map_err(|err| LoadError::Graph { index, source: err })?;
        }

        tracing::debug!(index, node_count, edge_count, directed, "loaded graph");
        graphs.push(graph);
    }
    Ok(graphs)
}

/// Reads every graph from `reader`.
///
/// # Errors
/// Returns [`LoadError::Io`] if reading fails, otherwise as [`parse_str`].
pub fn read_graphs<R: Read>(mut reader: R) -> Result<Vec<Graph>, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_str(&input)
}

/// Reads every graph from the file at `path`.
///
/// # Errors
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_str`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Graph>, LoadError> {
    let input = fs::read_to_string(path)?;
    parse_str(&input)
}

/// Logical edges of `graph` as `(source, target)` pairs in insertion order
/// per source. Undirected edges are reported once.
fn logical_edges(graph: &Graph) -> Vec<(VertexId, VertexId)> {
    let mut pairs = Vec::with_capacity(graph.edge_count());
    for u in graph.vertices() {
        let mut self_loops = 0usize;
        for edge in graph.edges_of(u) {
            let v = edge.target();
            if graph.is_directed() || u < v {
                pairs.push((u, v));
            } else if u == v {
                // An undirected self-loop is stored twice under `u`.
                if self_loops % 2 == 0 {
                    pairs.push((u, v));
                }
                self_loops += 1;
            }
        }
    }
    pairs
}

/// Writes `graphs` in the `uva` format, closing the list with `0`.
///
/// The graph type in the header comes from the first graph; an empty slice
/// produces an undirected header. Reading the output back yields graphs with
/// the same vertex counts and edge multisets.
///
/// # Errors
/// Propagates any I/O error from `out`.
pub fn write_graphs<W: Write>(mut out: W, graphs: &[Graph]) -> std::io::Result<()> {
    let directed = graphs.first().is_some_and(Graph::is_directed);
    writeln!(out, "{FORMAT_TOKEN}")?;
    writeln!(out, "{}", if directed { DIRECTED_TOKEN } else { "undirected" })?;
    for graph in graphs {
        let pairs = logical_edges(graph);
        writeln!(out, "{}", graph.vertex_count())?;
        writeln!(out, "{}", pairs.len())?;
        for (u, v) in pairs {
            writeln!(out, "{u} {v}")?;
        }
    }
    writeln!(out, "0")?;
    Ok(())
}
