//! Adjacency-list graph representation.
//!
//! Each vertex owns an ordered sequence of outgoing half-edges; the
//! source of an edge is encoded positionally by which sequence holds it.
//! Suits sparse graphs and workloads dominated by full-neighbor
//! enumeration: `out_edges` is O(deg), edge queries are O(deg), and the
//! traversal algorithms run in O(V + E).

use crate::error::{check_vertex, Result};
use crate::graph::Graph;

/// An outgoing edge. The source vertex is implicit in which vertex's
/// sequence contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalfEdge {
    target: usize,
    weight: i64,
}

/// Adjacency-list representation of a fixed-size graph.
///
/// Duplicate edges between the same ordered pair are permitted;
/// insertion does not dedupe, and queries return the first match in the
/// vertex's edge sequence.
///
/// In undirected mode every inserted edge is mirrored in both
/// directions with the same weight, and removal mirrors too, so the
/// symmetry invariant `has_edge(i, j) == has_edge(j, i)` holds after
/// any sequence of mutations. Undirected mode is simulated storage-wise;
/// it is not a distinct storage form.
#[derive(Debug, Clone)]
pub struct ListGraph {
    edges: Vec<Vec<HalfEdge>>,
    directed: bool,
}

impl ListGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// The vertex count and directedness are fixed for the lifetime of
    /// the graph.
    #[must_use]
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
            directed,
        }
    }

    /// Whether this graph was constructed in directed mode.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Remove the first half-edge `from -> to`, if any.
    ///
    /// Uses swap-remove: O(1), at the cost of perturbing the remaining
    /// sequence order. Order is not part of the correctness contract.
    fn remove_first_match(&mut self, from: usize, to: usize) {
        if let Some(position) = self.edges[from].iter().position(|e| e.target == to) {
            self.edges[from].swap_remove(position);
        }
    }
}

impl Graph for ListGraph {
    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn add_weighted_edge(&mut self, i: usize, j: usize, weight: i64) -> Result<()> {
        check_vertex(i, self.vertex_count())?;
        check_vertex(j, self.vertex_count())?;

        self.edges[i].push(HalfEdge { target: j, weight });
        if !self.directed {
            self.edges[j].push(HalfEdge { target: i, weight });
        }
        Ok(())
    }

    fn remove_edge(&mut self, i: usize, j: usize) -> Result<()> {
        check_vertex(i, self.vertex_count())?;
        check_vertex(j, self.vertex_count())?;

        self.remove_first_match(i, j);
        // Mirror the removal so undirected graphs keep their symmetry
        // invariant intact.
        if !self.directed {
            self.remove_first_match(j, i);
        }
        Ok(())
    }

    fn has_edge(&self, i: usize, j: usize) -> Result<bool> {
        check_vertex(i, self.vertex_count())?;
        check_vertex(j, self.vertex_count())?;

        Ok(self.edges[i].iter().any(|e| e.target == j))
    }

    fn edge_weight(&self, i: usize, j: usize) -> Result<Option<i64>> {
        check_vertex(i, self.vertex_count())?;
        check_vertex(j, self.vertex_count())?;

        Ok(self.edges[i].iter().find(|e| e.target == j).map(|e| e.weight))
    }

    fn out_edges(&self, i: usize) -> Result<Vec<usize>> {
        check_vertex(i, self.vertex_count())?;

        Ok(self.edges[i].iter().map(|e| e.target).collect())
    }

    fn in_edges(&self, j: usize) -> Result<Vec<usize>> {
        check_vertex(j, self.vertex_count())?;

        // Single scan of every vertex's out-edges: O(V + E). Each source
        // appears at most once, even with duplicate edges.
        Ok((0..self.vertex_count())
            .filter(|&source| self.edges[source].iter().any(|e| e.target == j))
            .collect())
    }
}
