// crates/algolab-core/src/graph/spanning.rs
// ============================================================================
// Module: Minimum Spanning Tree
// Description: Prim's algorithm over a lazy binary heap.
// Purpose: Connect every node reachable from the first node at minimum weight.
// Dependencies: crate::graph
// ============================================================================

//! ## Overview
//! Prim's algorithm grows a tree from the graph's first inserted node. The
//! frontier holds every edge leaving the tree keyed by its own weight; the
//! lightest edge reaching a node outside the tree joins it. Result edges
//! point from the tree node to the newly added one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BinaryHeap;
use std::hash::Hash;

use super::EdgeKind;
use super::Frontier;
use super::Graph;
use super::GraphTrace;
use super::ValueGraph;

// ============================================================================
// SECTION: Prim
// ============================================================================

/// Builds a minimum spanning tree rooted at the graph's first node.
///
/// Directed graphs are read as undirected: an edge may join the tree from
/// either end. Only the first node's component is spanned; an empty graph
/// yields an empty tree.
#[must_use]
pub fn minimum_spanning_tree<N, T>(graph: &ValueGraph<N>, trace: &mut T) -> Graph<N>
where
    N: Clone + Eq + Hash,
    T: GraphTrace<N>,
{
    let mut tree = Graph::new();
    let Some(first) = graph.nodes().first() else {
        return tree;
    };

    let neighbours = undirected_adjacency(graph);
    let mut in_tree = vec![false; graph.node_count()];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0_u64;
    let mut expand = |from: usize, frontier: &mut BinaryHeap<Frontier>, in_tree: &[bool]| {
        for (to, weight) in &neighbours[from] {
            if in_tree[*to] {
                continue;
            }
            frontier.push(Frontier {
                priority: *weight,
                sequence,
                from,
                to: *to,
                weight: *weight,
            });
            sequence += 1;
        }
    };

    in_tree[0] = true;
    tree.add_node(first.clone());
    trace.on_node_settled(first, 0.0);
    expand(0, &mut frontier, &in_tree);

    while let Some(edge) = frontier.pop() {
        if in_tree[edge.to] {
            continue;
        }
        in_tree[edge.to] = true;
        let from = graph.node_at(edge.from);
        let to = graph.node_at(edge.to);
        trace.on_edge_accepted(from, to, edge.weight);
        trace.on_node_settled(to, edge.weight);
        tree.put_edge(from.clone(), to.clone());
        expand(edge.to, &mut frontier, &in_tree);
    }
    tree
}

/// Adjacency lists with every edge usable from both ends.
fn undirected_adjacency<N: Clone + Eq + Hash>(graph: &ValueGraph<N>) -> Vec<Vec<(usize, f64)>> {
    let mut neighbours: Vec<Vec<(usize, f64)>> =
        (0 .. graph.node_count()).map(|position| graph.adjacent(position).to_vec()).collect();
    if graph.kind() == EdgeKind::Directed {
        for from in 0 .. graph.node_count() {
            for (to, weight) in graph.adjacent(from) {
                if *to != from {
                    neighbours[*to].push((from, *weight));
                }
            }
        }
    }
    neighbours
}
