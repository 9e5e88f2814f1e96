//! `trellis reachable` command implementation.

use std::path::Path;

use colored::Colorize;

use super::{build_graph, edgelist, Representation};

/// Run the reachable command: breadth-first reachability from `start`.
pub fn run(file: &Path, representation: Representation, start: usize) -> anyhow::Result<()> {
    let edge_list = edgelist::load(file)?;
    let graph = build_graph(&edge_list, representation)?;

    let reached = graph.reachable(start)?;

    println!(
        "{} from vertex {}:",
        "Reachability".white().bold(),
        start.to_string().cyan().bold()
    );
    for (vertex, reachable) in reached.iter().enumerate() {
        if *reachable {
            println!("  {} vertex {vertex}", "•".dimmed());
        }
    }

    let reached_count = reached.iter().filter(|&&r| r).count();
    let unreached_count = graph.vertex_count() - reached_count;
    println!();
    println!(
        "{}: {} reachable, {} unreachable",
        "Summary".dimmed(),
        reached_count.to_string().green(),
        unreached_count.to_string().yellow()
    );

    Ok(())
}
