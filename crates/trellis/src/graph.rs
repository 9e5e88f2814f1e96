//! The graph contract shared by both representations.
//!
//! [`ListGraph`](crate::ListGraph) and [`MatrixGraph`](crate::MatrixGraph)
//! are two leaf implementations of one interface, selected by the caller
//! based on expected density and workload: dense graphs and frequent
//! edge-existence checks favor the matrix, sparse graphs and frequent
//! full-neighbor enumeration favor the list.
//!
//! The traversal algorithms are provided methods delegating to the
//! [`traversal`](crate::traversal) module, so they work identically over
//! either representation (and over `dyn Graph`).

use crate::error::Result;
use crate::traversal;

/// Weight stored when an edge is added through the unweighted API.
///
/// Must be distinguishable from "no edge" because the matrix
/// representation overloads weight-as-presence (weight 0 means absent).
pub const DEFAULT_WEIGHT: i64 = 1;

/// A finite, vertex-indexed directed graph with integer edge weights.
///
/// The vertex set is fixed at construction: indices run `0..vertex_count`
/// and never change. Every operation taking a vertex index returns
/// [`Error::OutOfRange`](crate::Error::OutOfRange) when the index is not
/// below `vertex_count`; no operation performs a silent out-of-bounds
/// access.
///
/// Returned sequences are independent copies, never views into internal
/// storage, so callers may hold or mutate them freely.
pub trait Graph: std::fmt::Debug {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Insert a directed edge `i -> j` with an explicit weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// index is not a valid vertex.
    fn add_weighted_edge(&mut self, i: usize, j: usize, weight: i64) -> Result<()>;

    /// Insert a directed edge `i -> j` with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// index is not a valid vertex.
    fn add_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_weighted_edge(i, j, DEFAULT_WEIGHT)
    }

    /// Remove one instance of the directed edge `i -> j`.
    ///
    /// Removing an edge that does not exist is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// index is not a valid vertex.
    fn remove_edge(&mut self, i: usize, j: usize) -> Result<()>;

    /// Whether a directed edge `i -> j` is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// index is not a valid vertex.
    fn has_edge(&self, i: usize, j: usize) -> Result<bool>;

    /// The stored weight of the edge `i -> j`, or `None` if absent.
    ///
    /// When duplicate edges exist (list representation), the weight of
    /// the first match in the vertex's edge sequence is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// index is not a valid vertex.
    fn edge_weight(&self, i: usize, j: usize) -> Result<Option<i64>>;

    /// Target indices reachable by one directed edge from `i`.
    ///
    /// Order is representation-defined: insertion order for the list,
    /// ascending index order for the matrix. Callers must not depend on
    /// a specific order across representations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `i` is
    /// not a valid vertex.
    fn out_edges(&self, i: usize) -> Result<Vec<usize>>;

    /// Source indices with a directed edge into `j`.
    ///
    /// The list representation has no reverse index, so this scans every
    /// vertex's out-edges in O(V + E); the matrix scans one column in
    /// O(V).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `j` is
    /// not a valid vertex.
    fn in_edges(&self, j: usize) -> Result<Vec<usize>>;

    /// Which vertices are reachable from `start` via directed edges.
    ///
    /// Breadth-first exploration; `result[start]` is always `true`. See
    /// [`traversal::reachable`] for the algorithm contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start`
    /// is not a valid vertex.
    fn reachable(&self, start: usize) -> Result<Vec<bool>> {
        traversal::reachable(self, start)
    }

    /// Depth-first predecessor discovery from `start`.
    ///
    /// `result[v]` is the vertex from which `v` was first discovered, or
    /// `None` if `v` is unreached or is `start` itself. See
    /// [`traversal::dfs`] for the discovery-order contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start`
    /// is not a valid vertex.
    fn dfs(&self, start: usize) -> Result<Vec<Option<usize>>> {
        traversal::dfs(self, start)
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// This is a one-sided reachability check from a fixed root, not a
    /// true undirected-connectivity or strongly-connected-components
    /// test. Vacuously `true` for a graph with no vertices.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` matches the rest of the
    /// contract so `dyn Graph` callers handle one error type.
    fn is_connected(&self) -> Result<bool> {
        traversal::is_connected(self)
    }
}
