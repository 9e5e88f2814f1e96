//! Representation-independent traversal algorithms.
//!
//! Both algorithms drive exploration through [`Graph::out_edges`], so
//! their cost follows the representation: O(V + E) over an adjacency
//! list, O(V^2) over an adjacency matrix (each visit scans a full row).
//! Termination is guaranteed because each vertex is marked visited at
//! most once.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{check_vertex, Result};
use crate::graph::Graph;

/// Breadth-first reachability from `start`.
///
/// Initializes a FIFO frontier containing only `start`, marked visited;
/// repeatedly dequeues a vertex and, for each out-edge to an unvisited
/// target, marks it visited and enqueues it. Each vertex is enqueued at
/// most once, so `result[start]` is always `true` and the frontier
/// drains in finite time.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is
/// not a valid vertex.
pub fn reachable<G>(graph: &G, start: usize) -> Result<Vec<bool>>
where
    G: Graph + ?Sized,
{
    let vertex_count = graph.vertex_count();
    check_vertex(start, vertex_count)?;

    let mut visited = vec![false; vertex_count];
    let mut frontier = VecDeque::new();
    visited[start] = true;
    frontier.push_back(start);

    while let Some(u) = frontier.pop_front() {
        for v in graph.out_edges(u)? {
            if !visited[v] {
                visited[v] = true;
                frontier.push_back(v);
            }
        }
    }

    debug!(
        start,
        reached = visited.iter().filter(|&&v| v).count(),
        vertex_count,
        "breadth-first reachability completed"
    );

    Ok(visited)
}

/// Depth-first predecessor discovery from `start`.
///
/// Initializes a LIFO frontier containing only `start`, marked visited,
/// with `pred[start]` left at `None`; repeatedly pops a vertex and, for
/// each out-edge to an unvisited target, marks it visited, records the
/// popped vertex as its predecessor, and pushes it.
///
/// All of a vertex's unvisited neighbors are pushed before the next
/// frontier element is popped. The resulting predecessor tree therefore
/// differs from what a recursive single-child-then-backtrack DFS would
/// produce, and also differs across representations when their edge
/// examination order differs. What every variant shares: following
/// `pred` backward from any reached vertex terminates at `start` after
/// exactly its discovery depth, with no cycles.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is
/// not a valid vertex.
pub fn dfs<G>(graph: &G, start: usize) -> Result<Vec<Option<usize>>>
where
    G: Graph + ?Sized,
{
    let vertex_count = graph.vertex_count();
    check_vertex(start, vertex_count)?;

    let mut pred = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut frontier = vec![start];
    visited[start] = true;

    while let Some(u) = frontier.pop() {
        for v in graph.out_edges(u)? {
            if !visited[v] {
                visited[v] = true;
                pred[v] = Some(u);
                frontier.push(v);
            }
        }
    }

    debug!(
        start,
        discovered = pred.iter().filter(|p| p.is_some()).count(),
        vertex_count,
        "depth-first predecessor discovery completed"
    );

    Ok(pred)
}

/// Whether every vertex is reachable from vertex 0.
///
/// A one-sided reachability test from a fixed root. Vacuously `true`
/// for a graph with no vertices.
///
/// # Errors
///
/// Currently infallible; see [`Graph::is_connected`].
pub fn is_connected<G>(graph: &G) -> Result<bool>
where
    G: Graph + ?Sized,
{
    if graph.vertex_count() == 0 {
        return Ok(true);
    }
    Ok(reachable(graph, 0)?.into_iter().all(|v| v))
}
