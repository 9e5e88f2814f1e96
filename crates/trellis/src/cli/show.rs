//! `trellis show` command implementation.

use std::path::Path;

use colored::Colorize;

use super::{build_graph, edgelist, Representation};

/// Run the show command: print each vertex's out-edges.
pub fn run(file: &Path, representation: Representation) -> anyhow::Result<()> {
    let edge_list = edgelist::load(file)?;
    let graph = build_graph(&edge_list, representation)?;

    for vertex in 0..graph.vertex_count() {
        let targets = graph.out_edges(vertex)?;
        let rendered = targets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {rendered}", vertex.to_string().cyan());
    }

    println!();
    println!(
        "{}: {} vertices, {} edges",
        "Summary".dimmed(),
        graph.vertex_count().to_string().green(),
        edge_list.edges.len().to_string().green()
    );

    Ok(())
}
