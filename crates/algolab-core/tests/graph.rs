// crates/algolab-core/tests/graph.rs
// ============================================================================
// Module: Graph Tests
// Description: Tests for shortest-path trees, spanning trees, and trace hooks.
// ============================================================================
//! ## Overview
//! Runs Dijkstra and Prim on small hand-checked graphs and verifies that the
//! trace hooks see every settled node and accepted edge.

#![allow(clippy::float_cmp, reason = "Fixture weights are small integers.")]

mod support;

use algolab_core::EdgeKind;
use algolab_core::Graph;
use algolab_core::GraphError;
use algolab_core::GraphTrace;
use algolab_core::NoopTrace;
use algolab_core::ValueGraph;
use algolab_core::minimum_spanning_tree;
use algolab_core::shortest_paths;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Builds a graph of `kind` from `(from, to, weight)` triples.
fn build(kind: EdgeKind, edges: &[(&str, &str, f64)]) -> TestResult<ValueGraph<String>> {
    let mut graph = ValueGraph::new(kind);
    for (from, to, weight) in edges {
        graph.put_edge((*from).to_string(), (*to).to_string(), *weight)?;
    }
    Ok(graph)
}

/// Builds a result graph from `(from, to)` pairs.
fn tree(edges: &[(&str, &str)]) -> Graph<String> {
    let mut graph = Graph::new();
    for (from, to) in edges {
        graph.put_edge((*from).to_string(), (*to).to_string());
    }
    graph
}

/// Records every trace callback in order.
#[derive(Default)]
struct RecordingTrace {
    /// Settled nodes with their costs.
    settled: Vec<(String, f64)>,
    /// Accepted edges with their weights.
    accepted: Vec<(String, String, f64)>,
}

impl GraphTrace<String> for RecordingTrace {
    fn on_node_settled(&mut self, node: &String, cost: f64) {
        self.settled.push((node.clone(), cost));
    }

    fn on_edge_accepted(&mut self, from: &String, to: &String, weight: f64) {
        self.accepted.push((from.clone(), to.clone(), weight));
    }
}

// ============================================================================
// SECTION: Value Graph
// ============================================================================

#[test]
fn test_value_graph_edges() -> TestResult {
    let mut graph = build(EdgeKind::Undirected, &[("a", "b", 1.0), ("b", "c", 2.0)])?;
    ensure(graph.node_count() == 3 && graph.edge_count() == 2, "Expected three nodes, two edges")?;
    let a = "a".to_string();
    let b = "b".to_string();
    ensure(graph.edge_weight(&b, &a) == Some(1.0), "Expected undirected edges both ways")?;
    ensure(graph.put_edge(b.clone(), a.clone(), 4.0)? == Some(1.0), "Expected the old weight")?;
    ensure(graph.edge_count() == 2, "Expected re-weighting not to add an edge")?;
    ensure(graph.edges().len() == 2, "Expected each undirected edge listed once")?;
    ensure(graph.successors(&b).count() == 2, "Expected b to reach a and c")?;
    ensure(
        graph.put_edge(a, b, f64::NAN).is_err_and(|err| matches!(err, GraphError::NonFiniteWeight { .. })),
        "Expected NaN weights to be rejected",
    )?;

    let directed = build(EdgeKind::Directed, &[("a", "b", 1.0)])?;
    let a = "a".to_string();
    let b = "b".to_string();
    ensure(directed.edge_weight(&b, &a).is_none(), "Expected directed edges one way only")?;
    Ok(())
}

// ============================================================================
// SECTION: Shortest Paths
// ============================================================================

#[test]
fn test_shortest_paths_undirected() -> TestResult {
    let graph = build(
        EdgeKind::Undirected,
        &[("a", "b", 1.0), ("a", "c", 1.0), ("b", "d", 2.0), ("d", "e", 3.0), ("c", "d", 1.0)],
    )?;
    let paths = shortest_paths(&graph, &"a".to_string(), &mut NoopTrace)?;

    let expected_costs = [("a", 0.0), ("b", 1.0), ("c", 1.0), ("d", 2.0), ("e", 5.0)];
    for (node, cost) in expected_costs {
        ensure(paths.cost(&node.to_string()) == Some(cost), format!("Expected {node} at {cost}"))?;
    }
    ensure(
        paths.as_graph() == tree(&[("a", "b"), ("a", "c"), ("c", "d"), ("d", "e")]),
        "Expected the cheaper route to d through c",
    )?;
    ensure(
        paths.path_to(&"e".to_string())
            == Some(vec!["a".to_string(), "c".to_string(), "d".to_string(), "e".to_string()]),
        "Expected the path a, c, d, e",
    )?;
    ensure(paths.root() == "a" && paths.len() == 5, "Expected every node reachable from a")?;
    Ok(())
}

#[test]
fn test_shortest_paths_directed() -> TestResult {
    let graph = build(
        EdgeKind::Directed,
        &[
            ("v1", "v3", 4.0),
            ("v2", "v3", 5.0),
            ("v2", "v1", 1.0),
            ("v3", "v5", 6.0),
            ("v5", "v2", 3.0),
            ("v5", "v4", 4.0),
            ("v4", "v2", 7.0),
            ("v6", "v3", 2.0),
            ("v6", "v4", 10.0),
        ],
    )?;
    let paths = shortest_paths(&graph, &"v6".to_string(), &mut NoopTrace)?;

    let expected_costs =
        [("v6", 0.0), ("v3", 2.0), ("v5", 8.0), ("v4", 10.0), ("v2", 11.0), ("v1", 12.0)];
    for (node, cost) in expected_costs {
        ensure(paths.cost(&node.to_string()) == Some(cost), format!("Expected {node} at {cost}"))?;
    }
    ensure(
        paths.as_graph()
            == tree(&[("v6", "v4"), ("v6", "v3"), ("v3", "v5"), ("v5", "v2"), ("v2", "v1")]),
        "Expected the directed shortest-path tree",
    )?;
    ensure(
        paths.entries().windows(2).all(|pair| pair[0].cost <= pair[1].cost),
        "Expected entries in settling order",
    )?;
    Ok(())
}

#[test]
fn test_shortest_paths_unreachable_and_errors() -> TestResult {
    let graph = build(EdgeKind::Directed, &[("a", "b", 1.0), ("c", "a", 1.0)])?;
    let paths = shortest_paths(&graph, &"a".to_string(), &mut NoopTrace)?;
    ensure(paths.cost(&"c".to_string()).is_none(), "Expected c unreachable against the edge")?;
    ensure(paths.path_to(&"c".to_string()).is_none(), "Expected no path to c")?;
    ensure(paths.parent(&"a".to_string()).is_none(), "Expected the root to have no parent")?;

    ensure(
        shortest_paths(&graph, &"z".to_string(), &mut NoopTrace).is_err_and(|err| err == GraphError::UnknownRoot),
        "Expected an unknown root to be rejected",
    )?;

    let negative = build(EdgeKind::Undirected, &[("a", "b", -1.0)])?;
    ensure(
        shortest_paths(&negative, &"a".to_string(), &mut NoopTrace).is_err_and(|err| {
            err == GraphError::NegativeWeight {
                weight: -1.0,
            }
        }),
        "Expected negative weights to be rejected",
    )?;
    Ok(())
}

#[test]
fn test_shortest_paths_cost_overflow() -> TestResult {
    let chain = build(EdgeKind::Undirected, &[("a", "b", f64::MAX), ("b", "c", f64::MAX)])?;
    ensure(
        shortest_paths(&chain, &"a".to_string(), &mut NoopTrace)
            .is_err_and(|err| err == GraphError::PathCostOverflow),
        "Expected an infinite cheapest cost to be rejected",
    )?;

    let shortcut = build(
        EdgeKind::Undirected,
        &[("a", "b", f64::MAX), ("b", "c", f64::MAX), ("a", "c", 1.0)],
    )?;
    let paths = shortest_paths(&shortcut, &"a".to_string(), &mut NoopTrace)?;
    ensure(paths.cost(&"c".to_string()) == Some(1.0), "Expected the finite route to c")?;
    ensure(paths.cost(&"b".to_string()) == Some(f64::MAX), "Expected b at the largest finite cost")?;
    ensure(paths.entries().iter().all(|entry| entry.cost.is_finite()), "Expected finite costs only")?;
    Ok(())
}

#[test]
fn test_shortest_paths_lone_root() -> TestResult {
    let mut graph: ValueGraph<String> = ValueGraph::directed();
    graph.add_node("solo".to_string());
    let paths = shortest_paths(&graph, &"solo".to_string(), &mut NoopTrace)?;
    ensure(paths.len() == 1 && !paths.is_empty(), "Expected a tree holding only the root")?;
    ensure(paths.path_to(&"solo".to_string()) == Some(vec!["solo".to_string()]), "Expected a one-node path")?;
    Ok(())
}

#[test]
fn test_shortest_paths_trace() -> TestResult {
    let graph = build(EdgeKind::Undirected, &[("a", "b", 2.0), ("b", "c", 3.0)])?;
    let mut trace = RecordingTrace::default();
    shortest_paths(&graph, &"a".to_string(), &mut trace)?;
    ensure(
        trace.settled
            == vec![("a".to_string(), 0.0), ("b".to_string(), 2.0), ("c".to_string(), 5.0)],
        "Expected nodes settled with cumulative costs",
    )?;
    ensure(
        trace.accepted
            == vec![("a".to_string(), "b".to_string(), 2.0), ("b".to_string(), "c".to_string(), 3.0)],
        "Expected tree edges with their own weights",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Minimum Spanning Tree
// ============================================================================

#[test]
fn test_minimum_spanning_tree_textbook() -> TestResult {
    let graph = build(
        EdgeKind::Undirected,
        &[
            ("A", "B", 4.0),
            ("A", "D", 3.0),
            ("B", "C", 3.0),
            ("B", "D", 5.0),
            ("C", "E", 4.0),
            ("C", "H", 2.0),
            ("D", "E", 7.0),
            ("D", "F", 4.0),
            ("E", "F", 5.0),
            ("E", "G", 3.0),
            ("F", "G", 7.0),
            ("G", "H", 5.0),
        ],
    )?;
    let mst = minimum_spanning_tree(&graph, &mut NoopTrace);
    let expected = tree(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "H"),
        ("C", "E"),
        ("E", "G"),
        ("A", "D"),
        ("D", "F"),
    ]);
    ensure(mst == expected, "Expected the textbook spanning tree")?;
    Ok(())
}

#[test]
fn test_minimum_spanning_tree_skips_heavy_chord() -> TestResult {
    let graph = build(
        EdgeKind::Undirected,
        &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("A", "D", 2.0)],
    )?;
    let mut trace = RecordingTrace::default();
    let mst = minimum_spanning_tree(&graph, &mut trace);
    ensure(mst == tree(&[("A", "B"), ("B", "C"), ("C", "D")]), "Expected the unit-weight chain")?;
    let total: f64 = trace.accepted.iter().map(|(_, _, weight)| weight).sum();
    ensure(total == 3.0, "Expected total spanning weight 3")?;
    ensure(trace.settled.len() == 4, "Expected every node to join the tree")?;
    Ok(())
}

#[test]
fn test_minimum_spanning_tree_edge_cases() -> TestResult {
    let empty: ValueGraph<String> = ValueGraph::undirected();
    ensure(minimum_spanning_tree(&empty, &mut NoopTrace).node_count() == 0, "Expected an empty tree")?;

    let directed = build(EdgeKind::Directed, &[("b", "a", 1.0), ("a", "c", 5.0), ("c", "b", 2.0)])?;
    let mst = minimum_spanning_tree(&directed, &mut NoopTrace);
    ensure(mst.node_count() == 3 && mst.edge_count() == 2, "Expected a spanning tree over 3 nodes")?;
    ensure(
        mst == tree(&[("b", "a"), ("b", "c")]),
        "Expected directed edges usable from either end",
    )?;

    let split = build(EdgeKind::Undirected, &[("a", "b", 1.0), ("c", "d", 1.0)])?;
    let mst = minimum_spanning_tree(&split, &mut NoopTrace);
    ensure(mst == tree(&[("a", "b")]), "Expected only the first node's component")?;
    Ok(())
}
