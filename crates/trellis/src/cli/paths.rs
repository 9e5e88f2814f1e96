//! `trellis paths` command implementation.

use std::path::Path;

use colored::Colorize;

use super::{build_graph, edgelist, Representation};

/// Run the paths command: depth-first discovery, then reconstruct the
/// path to every reached vertex by walking the predecessor array
/// backward until the start.
pub fn run(file: &Path, representation: Representation, start: usize) -> anyhow::Result<()> {
    let edge_list = edgelist::load(file)?;
    let graph = build_graph(&edge_list, representation)?;

    let pred = graph.dfs(start)?;

    let mut discovered = 0;
    for target in 0..graph.vertex_count() {
        if pred[target].is_none() {
            continue;
        }
        discovered += 1;

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = pred[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        let rendered = path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        println!(
            "{} {}",
            format!("Path to vertex {target}:").yellow(),
            rendered
        );
    }

    if discovered == 0 {
        println!("No vertex is discovered from vertex {start}.");
    }

    Ok(())
}
