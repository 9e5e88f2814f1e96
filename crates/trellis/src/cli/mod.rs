//! CLI command implementations.

pub mod edgelist;
pub mod paths;
pub mod reachable;
pub mod show;

use anyhow::Context;
use clap::ValueEnum;
use tracing::debug;
use trellis::{Graph, ListGraph, MatrixGraph};

use self::edgelist::EdgeList;

/// Which graph representation backs a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Representation {
    /// Adjacency list: sparse-friendly, O(V + E) traversal
    List,
    /// Adjacency matrix: dense-friendly, O(1) edge checks
    Matrix,
}

/// Build a graph of the chosen representation from a parsed edge list.
///
/// The driver always constructs directed graphs; the matrix
/// representation is directed-only anyway.
pub fn build_graph(
    edge_list: &EdgeList,
    representation: Representation,
) -> anyhow::Result<Box<dyn Graph>> {
    let mut graph: Box<dyn Graph> = match representation {
        Representation::List => Box::new(ListGraph::new(edge_list.vertex_count, true)),
        Representation::Matrix => Box::new(MatrixGraph::new(edge_list.vertex_count)),
    };

    for &(u, v) in &edge_list.edges {
        graph
            .add_edge(u, v)
            .with_context(|| format!("inserting edge ({u}, {v})"))?;
    }

    debug!(
        vertices = edge_list.vertex_count,
        edges = edge_list.edges.len(),
        representation = ?representation,
        "graph constructed"
    );

    Ok(graph)
}
