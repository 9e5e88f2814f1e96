//! Trellis CLI - graph demonstration driver.
//!
//! Reads a graph from a line-oriented edge-list file and exercises the
//! public graph operations: out-edge listing, breadth-first
//! reachability, and depth-first path discovery. All graph logic lives
//! in the library; this binary only constructs a graph, feeds it edges,
//! and prints results.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::Representation;

/// Trellis: graph representations and traversal from the command line.
#[derive(Parser)]
#[command(name = "trellis")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Graph representation backing the command
    #[arg(short, long, value_enum, default_value = "list", global = true)]
    representation: Representation,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each vertex's out-edges
    Show {
        /// Edge-list file: N and M, then M pairs "u v"
        file: PathBuf,
    },

    /// List the vertices reachable from a start vertex
    Reachable {
        /// Edge-list file: N and M, then M pairs "u v"
        file: PathBuf,

        /// Vertex to start the breadth-first exploration from
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },

    /// Print the discovered path from a start vertex to every reached vertex
    Paths {
        /// Edge-list file: N and M, then M pairs "u v"
        file: PathBuf,

        /// Vertex to root the depth-first discovery tree at
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let representation = cli.representation;
    let result = match cli.command {
        Commands::Show { file } => cli::show::run(&file, representation),
        Commands::Reachable { file, start } => cli::reachable::run(&file, representation, start),
        Commands::Paths { file, start } => cli::paths::run(&file, representation, start),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
