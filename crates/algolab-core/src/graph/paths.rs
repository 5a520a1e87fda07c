// crates/algolab-core/src/graph/paths.rs
// ============================================================================
// Module: Shortest Paths
// Description: Single-source shortest paths with a lazy binary heap.
// Purpose: Build the shortest-path tree rooted at one node.
// Dependencies: crate::graph
// ============================================================================

//! ## Overview
//! Dijkstra's algorithm over a frontier of tentative edges. Every edge out of
//! a newly settled node is pushed with the cost of reaching its far end; the
//! first time a node is popped its cost is final and the popped edge becomes
//! its tree edge. Stale entries for settled nodes are skipped when popped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use super::Frontier;
use super::Graph;
use super::GraphError;
use super::GraphTrace;
use super::ValueGraph;

// ============================================================================
// SECTION: Shortest-Path Tree
// ============================================================================

/// One settled node of a shortest-path tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<N> {
    /// The settled node.
    pub node: N,
    /// Cost of the cheapest path from the root.
    pub cost: f64,
    /// Predecessor on that path; `None` for the root.
    pub parent: Option<N>,
}

/// Cheapest costs and predecessors of every node reachable from a root.
///
/// # Invariants
/// - `entries[0]` is the root with cost `0.0`.
/// - Entries appear in settling order, so costs never decrease.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N> {
    /// Settled nodes in settling order.
    entries: Vec<PathEntry<N>>,
    /// Node to entry lookup.
    index: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash> ShortestPathTree<N> {
    /// The root node.
    #[must_use]
    pub fn root(&self) -> &N {
        &self.entries[0].node
    }

    /// Settled nodes in settling order.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry<N>] {
        &self.entries
    }

    /// Number of reachable nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the root is always reachable.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Cheapest cost from the root to `node`, if reachable.
    #[must_use]
    pub fn cost(&self, node: &N) -> Option<f64> {
        self.index.get(node).map(|position| self.entries[*position].cost)
    }

    /// Predecessor of `node` on its cheapest path.
    #[must_use]
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.index.get(node).and_then(|position| self.entries[*position].parent.as_ref())
    }

    /// Nodes on the cheapest path from the root to `node`, both included.
    #[must_use]
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        let mut position = *self.index.get(node)?;
        let mut path = vec![self.entries[position].node.clone()];
        while let Some(parent) = &self.entries[position].parent {
            position = *self.index.get(parent)?;
            path.push(parent.clone());
        }
        path.reverse();
        Some(path)
    }

    /// The tree as parent-to-child edges.
    #[must_use]
    pub fn as_graph(&self) -> Graph<N> {
        let mut graph = Graph::new();
        for entry in &self.entries {
            match &entry.parent {
                Some(parent) => {
                    graph.put_edge(parent.clone(), entry.node.clone());
                }
                None => {
                    graph.add_node(entry.node.clone());
                }
            }
        }
        graph
    }
}

// ============================================================================
// SECTION: Dijkstra
// ============================================================================

/// Computes cheapest paths from `root` to every reachable node.
///
/// Undirected edges are followed both ways; directed edges only forwards.
/// Equal-cost ties settle in the order their edges were discovered.
///
/// # Errors
///
/// Returns [`GraphError::UnknownRoot`] when `root` is not in the graph,
/// [`GraphError::NegativeWeight`] when any edge weight is negative, and
/// [`GraphError::PathCostOverflow`] when a reachable node's cheapest cost is
/// not finite.
pub fn shortest_paths<N, T>(
    graph: &ValueGraph<N>,
    root: &N,
    trace: &mut T,
) -> Result<ShortestPathTree<N>, GraphError>
where
    N: Clone + Eq + Hash,
    T: GraphTrace<N>,
{
    let root_position = graph.position(root).ok_or(GraphError::UnknownRoot)?;
    if let Some((_, _, weight)) = graph.edges().into_iter().find(|(_, _, weight)| *weight < 0.0) {
        return Err(GraphError::NegativeWeight {
            weight,
        });
    }

    let mut settled = vec![false; graph.node_count()];
    let mut entries = Vec::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0_u64;

    settled[root_position] = true;
    entries.push(PathEntry {
        node: root.clone(),
        cost: 0.0,
        parent: None,
    });
    trace.on_node_settled(root, 0.0);
    let mut expand = |from: usize, cost: f64, frontier: &mut BinaryHeap<Frontier>| {
        for (to, weight) in graph.adjacent(from) {
            frontier.push(Frontier {
                priority: cost + weight,
                sequence,
                from,
                to: *to,
                weight: *weight,
            });
            sequence += 1;
        }
    };
    expand(root_position, 0.0, &mut frontier);

    while let Some(edge) = frontier.pop() {
        if settled[edge.to] {
            continue;
        }
        if !edge.priority.is_finite() {
            return Err(GraphError::PathCostOverflow);
        }
        settled[edge.to] = true;
        let from = graph.node_at(edge.from);
        let to = graph.node_at(edge.to);
        trace.on_edge_accepted(from, to, edge.weight);
        trace.on_node_settled(to, edge.priority);
        entries.push(PathEntry {
            node: to.clone(),
            cost: edge.priority,
            parent: Some(from.clone()),
        });
        expand(edge.to, edge.priority, &mut frontier);
    }

    let index =
        entries.iter().enumerate().map(|(position, entry)| (entry.node.clone(), position)).collect();
    Ok(ShortestPathTree {
        entries,
        index,
    })
}
