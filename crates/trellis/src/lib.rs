//! # Trellis: interchangeable graph representations
//!
//! Trellis provides two representations of a finite, vertex-indexed
//! graph behind one contract, the [`Graph`] trait:
//!
//! - [`ListGraph`]: adjacency list; each vertex owns an ordered
//!   sequence of outgoing edges. Sparse-friendly: traversal is O(V + E).
//! - [`MatrixGraph`]: adjacency matrix; an N x N weight table with 0
//!   meaning absent. Dense-friendly: edge checks are O(1), traversal is
//!   O(V^2).
//!
//! Both support edge mutation and edge/weight queries, and both run the
//! same traversal algorithms: breadth-first reachability and
//! depth-first predecessor discovery (see [`traversal`]).
//!
//! ## Quick start
//!
//! ```
//! use trellis::{Graph, ListGraph};
//!
//! let mut graph = ListGraph::new(5, true);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(0, 3)?;
//! graph.add_edge(3, 4)?;
//!
//! assert!(graph.is_connected()?);
//!
//! // Reconstruct the discovered path to vertex 4 from the predecessor array.
//! let pred = graph.dfs(0)?;
//! assert_eq!(pred[4], Some(3));
//! assert_eq!(pred[3], Some(0));
//! # Ok::<(), trellis::Error>(())
//! ```
//!
//! ## Design
//!
//! - The vertex count is fixed at construction; vertex indices are
//!   `usize` values in `[0, vertex_count)`, and every index-taking
//!   operation bounds-checks uniformly across representations.
//! - The only error kind is [`Error::OutOfRange`]; missing edges are
//!   normal outcomes (no-op removal, `None` weight).
//! - Single-threaded by design: no internal synchronization, no
//!   suspension points. Callers needing shared access wrap a graph in
//!   their own lock.

pub mod error;
pub mod graph;
pub mod list;
pub mod matrix;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::{Graph, DEFAULT_WEIGHT};
pub use list::ListGraph;
pub use matrix::MatrixGraph;
