//! Integration tests for the uniform graph contract.
//!
//! These tests exercise both representations through `dyn Graph`,
//! verifying that the operations callers can rely on behave identically
//! regardless of the backing store.

use rstest::rstest;
use trellis::{Error, Graph, ListGraph, MatrixGraph};

/// Which representation a case runs against.
#[derive(Debug, Clone, Copy)]
enum Repr {
    List,
    Matrix,
}

/// An empty directed graph of the requested representation.
fn empty_graph(repr: Repr, vertex_count: usize) -> Box<dyn Graph> {
    match repr {
        Repr::List => Box::new(ListGraph::new(vertex_count, true)),
        Repr::Matrix => Box::new(MatrixGraph::new(vertex_count)),
    }
}

/// The demo topology: 0 -> 1 -> 2 and 0 -> 3 -> 4.
fn demo_graph(repr: Repr) -> Box<dyn Graph> {
    let mut graph = empty_graph(repr, 5);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(0, 3).unwrap();
    graph.add_edge(3, 4).unwrap();
    graph
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn add_edge_is_visible_to_queries(#[case] repr: Repr) {
    let mut graph = empty_graph(repr, 3);
    graph.add_weighted_edge(0, 2, 42).unwrap();

    assert!(graph.has_edge(0, 2).unwrap());
    assert_eq!(graph.edge_weight(0, 2).unwrap(), Some(42));
    assert!(!graph.has_edge(2, 0).unwrap());
    assert_eq!(graph.edge_weight(2, 0).unwrap(), None);
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn add_then_remove_clears_single_edge(#[case] repr: Repr) {
    let mut graph = empty_graph(repr, 3);
    graph.add_edge(1, 2).unwrap();
    graph.remove_edge(1, 2).unwrap();

    assert!(!graph.has_edge(1, 2).unwrap());
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn remove_missing_edge_is_not_an_error(#[case] repr: Repr) {
    let mut graph = empty_graph(repr, 3);

    assert!(graph.remove_edge(0, 1).is_ok());
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn every_indexed_operation_rejects_out_of_range(#[case] repr: Repr) {
    let mut graph = empty_graph(repr, 4);
    let expected = Error::OutOfRange {
        index: 4,
        vertex_count: 4,
    };

    assert_eq!(graph.add_edge(4, 0).unwrap_err(), expected);
    assert_eq!(graph.add_weighted_edge(0, 4, 2).unwrap_err(), expected);
    assert_eq!(graph.remove_edge(4, 0).unwrap_err(), expected);
    assert_eq!(graph.has_edge(0, 4).unwrap_err(), expected);
    assert_eq!(graph.edge_weight(4, 0).unwrap_err(), expected);
    assert_eq!(graph.out_edges(4).unwrap_err(), expected);
    assert_eq!(graph.in_edges(4).unwrap_err(), expected);
    assert_eq!(graph.reachable(4).unwrap_err(), expected);
    assert_eq!(graph.dfs(4).unwrap_err(), expected);
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn demo_topology_is_fully_reachable_from_zero(#[case] repr: Repr) {
    let graph = demo_graph(repr);

    assert_eq!(
        graph.reachable(0).unwrap(),
        vec![true, true, true, true, true]
    );
    assert!(graph.is_connected().unwrap());
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn demo_topology_out_edges_of_zero(#[case] repr: Repr) {
    // Insertion order happens to be ascending, so both representations
    // agree here; in general callers must not rely on that.
    let graph = demo_graph(repr);

    assert_eq!(graph.out_edges(0).unwrap(), vec![1, 3]);
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn demo_topology_dfs_predecessors(#[case] repr: Repr) {
    let graph = demo_graph(repr);

    let pred = graph.dfs(0).unwrap();
    assert_eq!(pred, vec![None, Some(0), Some(1), Some(0), Some(3)]);
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn edgeless_graph_reaches_only_start(#[case] repr: Repr) {
    let graph = empty_graph(repr, 3);

    assert_eq!(graph.reachable(0).unwrap(), vec![true, false, false]);
    assert!(!graph.is_connected().unwrap());
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn edge_elsewhere_does_not_make_vertices_reachable(#[case] repr: Repr) {
    // Edge 1 -> 2 exists, but exploration starts at 0.
    let mut graph = empty_graph(repr, 3);
    graph.add_edge(1, 2).unwrap();

    assert_eq!(graph.reachable(0).unwrap(), vec![true, false, false]);
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn reachability_is_monotonic_under_edge_additions(#[case] repr: Repr) {
    let mut graph = empty_graph(repr, 4);
    graph.add_edge(0, 1).unwrap();

    let before = graph.reachable(0).unwrap();

    graph.add_edge(1, 2).unwrap();
    graph.add_edge(3, 0).unwrap();
    let after = graph.reachable(0).unwrap();

    for vertex in 0..4 {
        assert!(
            !before[vertex] || after[vertex],
            "vertex {vertex} lost reachability after adding edges"
        );
    }
}

#[rstest]
#[case::list(Repr::List)]
#[case::matrix(Repr::Matrix)]
fn in_edges_lists_sources(#[case] repr: Repr) {
    let graph = demo_graph(repr);

    assert_eq!(graph.in_edges(0).unwrap(), Vec::<usize>::new());
    assert_eq!(graph.in_edges(2).unwrap(), vec![1]);
    assert_eq!(graph.in_edges(4).unwrap(), vec![3]);
}
