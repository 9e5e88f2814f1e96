//! Adjacency-matrix graph representation.
//!
//! An N x N table of edge weights stored row-major, with weight 0
//! meaning "no edge". Suits dense graphs and workloads dominated by
//! edge-existence checks: `has_edge` and `edge_weight` are O(1), while
//! `out_edges` and each traversal step scan a full row.

use crate::error::{check_vertex, Result};
use crate::graph::Graph;

/// Adjacency-matrix representation of a fixed-size directed graph.
///
/// At most one weight exists per ordered pair; a later
/// [`add_weighted_edge`](Graph::add_weighted_edge) overwrites any prior
/// one, so duplicate edges are impossible by construction. Weight is
/// overloaded as presence: storing weight 0 is indistinguishable from
/// removing the edge.
///
/// This representation is directed-only. Callers wanting undirected
/// semantics must mirror edges themselves, or use
/// [`ListGraph`](crate::ListGraph) in undirected mode.
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    /// Row-major N x N weight table; 0 = absent.
    weights: Vec<i64>,
    vertex_count: usize,
}

impl MatrixGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: vec![0; vertex_count * vertex_count],
            vertex_count,
        }
    }

    /// Flat index of the cell for edge `i -> j`.
    ///
    /// Callers must have bounds-checked `i` and `j` already.
    fn cell(&self, i: usize, j: usize) -> usize {
        i * self.vertex_count + j
    }
}

impl Graph for MatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn add_weighted_edge(&mut self, i: usize, j: usize, weight: i64) -> Result<()> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;

        let cell = self.cell(i, j);
        self.weights[cell] = weight;
        Ok(())
    }

    fn remove_edge(&mut self, i: usize, j: usize) -> Result<()> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;

        let cell = self.cell(i, j);
        self.weights[cell] = 0;
        Ok(())
    }

    fn has_edge(&self, i: usize, j: usize) -> Result<bool> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;

        Ok(self.weights[self.cell(i, j)] != 0)
    }

    fn edge_weight(&self, i: usize, j: usize) -> Result<Option<i64>> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;

        let weight = self.weights[self.cell(i, j)];
        Ok((weight != 0).then_some(weight))
    }

    fn out_edges(&self, i: usize) -> Result<Vec<usize>> {
        check_vertex(i, self.vertex_count)?;

        // Row scan: targets come out in ascending index order.
        Ok((0..self.vertex_count)
            .filter(|&j| self.weights[self.cell(i, j)] != 0)
            .collect())
    }

    fn in_edges(&self, j: usize) -> Result<Vec<usize>> {
        check_vertex(j, self.vertex_count)?;

        // Column scan: O(V).
        Ok((0..self.vertex_count)
            .filter(|&i| self.weights[self.cell(i, j)] != 0)
            .collect())
    }
}
