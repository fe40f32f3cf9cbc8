use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphwalk::io::{self, LoadError};
use graphwalk::{Bfs, Color, GraphError, TwoColor, VertexId};

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(about = "Breadth-first graph tools", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether each graph in a description is two-colorable
    Twocolor {
        /// Graph description in the `uva` format
        input: PathBuf,
    },
    /// Print the breadth-first path between two vertices of the first graph
    Path {
        /// Graph description in the `uva` format
        input: PathBuf,

        /// Start vertex (defaults to the first vertex)
        #[arg(long)]
        from: Option<VertexId>,

        /// End vertex (defaults to the last vertex)
        #[arg(long)]
        to: Option<VertexId>,
    },
}

#[derive(Serialize)]
struct TwoColorReport {
    graph: usize,
    vertices: usize,
    edges: usize,
    bipartite: bool,
    colors: Vec<Color>,
}

#[derive(Serialize)]
struct PathReport {
    from: VertexId,
    to: VertexId,
    path: Vec<VertexId>,
}

// errno-style exit statuses.
const EXIT_EIO: u8 = 5;
const EXIT_ENOMEM: u8 = 12;
const EXIT_EINVAL: u8 = 22;

fn exit_code(err: &anyhow::Error) -> u8 {
    let graph_error = err.chain().find_map(|cause| {
        if let Some(graph_error) = cause.downcast_ref::<GraphError>() {
            return Some(*graph_error);
        }
        match cause.downcast_ref::<LoadError>() {
            Some(LoadError::Graph { source, .. }) => Some(*source),
            _ => None,
        }
    });
    match graph_error {
        Some(GraphError::AllocationFailure) => EXIT_ENOMEM,
        Some(GraphError::NoPath { .. }) => EXIT_EIO,
        Some(GraphError::InvalidVertex { .. }) | None => EXIT_EINVAL,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Twocolor { input } => twocolor(input, cli.json),
        Commands::Path { input, from, to } => path(input, *from, *to, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn twocolor(input: &Path, json: bool) -> Result<()> {
    let graphs = io::load_file(input)
        .with_context(|| format!("Failed to load graphs from {}", input.display()))?;

    let mut reports = Vec::with_capacity(graphs.len());
    for (index, graph) in graphs.iter().enumerate() {
        let mut check = TwoColor::new(graph);
        let bipartite = check
            .is_bipartite()
            .with_context(|| format!("Two-coloring of graph {index} failed"))?;
        tracing::info!(graph = index, bipartite, "two-coloring finished");

        if json {
            reports.push(TwoColorReport {
                graph: index,
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                bipartite,
                colors: check.colors().to_vec(),
            });
        } else if bipartite {
            println!("BICOLORABLE.");
        } else {
            println!("NOT BICOLORABLE.");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn path(input: &Path, from: Option<VertexId>, to: Option<VertexId>, json: bool) -> Result<()> {
    let graphs = io::load_file(input)
        .with_context(|| format!("Failed to load graphs from {}", input.display()))?;
    let Some(graph) = graphs.first() else {
        anyhow::bail!("{} contains no graphs", input.display());
    };

    let from = from.unwrap_or(0);
    let to = to.unwrap_or_else(|| graph.vertex_count().saturating_sub(1));

    let mut bfs = Bfs::new(graph);
    bfs.run_from(from, &mut ())
        .with_context(|| format!("Search from vertex {from} failed"))?;
    let route = bfs
        .path_between(from, to)
        .with_context(|| format!("No route from {from} to {to}"))?;

    if json {
        let report = PathReport { from, to, path: route };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Path from {from} to {to}");
        let ids: Vec<String> = route.iter().map(ToString::to_string).collect();
        println!("{}", ids.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn wrapped(err: impl std::error::Error + Send + Sync + 'static) -> anyhow::Error {
        anyhow::Error::new(err).context("outer context")
    }

    #[test]
    fn graph_errors_map_to_errno_codes() {
        let invalid = GraphError::InvalidVertex { id: 9, node_count: 2 };
        assert_eq!(exit_code(&wrapped(invalid)), EXIT_EINVAL);
        assert_eq!(exit_code(&wrapped(GraphError::AllocationFailure)), EXIT_ENOMEM);
        assert_eq!(exit_code(&wrapped(GraphError::NoPath { from: 0, to: 1 })), EXIT_EIO);
    }

    #[test]
    fn loader_errors_map_through_their_source() {
        let oom = LoadError::Graph {
            index: 1,
            source: GraphError::AllocationFailure,
        };
        assert_eq!(exit_code(&wrapped(oom)), EXIT_ENOMEM);

        let bad_edge = LoadError::Graph {
            index: 0,
            source: GraphError::InvalidVertex { id: 5, node_count: 3 },
        };
        assert_eq!(exit_code(&wrapped(bad_edge)), EXIT_EINVAL);

        assert_eq!(exit_code(&wrapped(LoadError::UnknownFormat("csv".into()))), EXIT_EINVAL);
        assert_eq!(exit_code(&wrapped(LoadError::UnexpectedEof("edge count"))), EXIT_EINVAL);
    }

    #[test]
    fn other_errors_are_invalid_input() {
        assert_eq!(exit_code(&anyhow!("no graphs")), EXIT_EINVAL);
    }

    #[test]
    fn missing_path_from_search_exits_with_eio() {
        let graph = graphwalk::Graph::undirected(3);
        let mut bfs = Bfs::new(&graph);
        bfs.run_from(0, &mut ()).unwrap();
        let err = bfs
            .path_between(0, 2)
            .with_context(|| "No route from 0 to 2")
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_EIO);
    }
}
