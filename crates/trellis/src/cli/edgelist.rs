//! Edge-list file parsing for the demonstration driver.
//!
//! The format is line-oriented and whitespace-tolerant: two integers N
//! (vertex count) and M (edge count), followed by M pairs `u v`, each
//! describing one directed edge to insert. Parsing lives here in the
//! binary; the core library never reads files.

use std::path::Path;

use anyhow::{Context, Result};

/// A parsed edge-list file, not yet validated against any graph.
///
/// Vertex indices are checked by the graph itself at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices the graph should be constructed with.
    pub vertex_count: usize,
    /// Directed edges `(source, target)` in file order.
    pub edges: Vec<(usize, usize)>,
}

/// Load and parse an edge-list file.
pub fn load(path: &Path) -> Result<EdgeList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading edge list {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing edge list {}", path.display()))
}

/// Parse edge-list text.
///
/// Tokens beyond the declared M edges are ignored; the reader stops
/// after M pairs.
pub fn parse(text: &str) -> Result<EdgeList> {
    let mut tokens = text.split_whitespace();
    let mut next_int = |what: String| -> Result<usize> {
        let token = tokens.next().with_context(|| format!("missing {what}"))?;
        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    };

    let vertex_count = next_int("vertex count".to_string())?;
    let edge_count = next_int("edge count".to_string())?;

    let mut edges = Vec::with_capacity(edge_count);
    for index in 0..edge_count {
        let u = next_int(format!("source of edge {index}"))?;
        let v = next_int(format!("target of edge {index}"))?;
        edges.push((u, v));
    }

    Ok(EdgeList {
        vertex_count,
        edges,
    })
}
