// crates/algolab-core/src/graph/mod.rs
// ============================================================================
// Module: Weighted Graphs
// Description: Weighted input graphs, unweighted result graphs, trace hooks.
// Purpose: Shared graph model for shortest-path and spanning-tree searches.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`ValueGraph`] is the input model: nodes in insertion order and one finite
//! `f64` weight per edge, either directed or undirected. Algorithms return
//! [`Graph`] (an unweighted directed graph whose equality ignores insertion
//! order) or a [`ShortestPathTree`].
//!
//! Searches report progress through [`GraphTrace`]; pass [`NoopTrace`] when
//! nothing needs observing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod paths;
pub mod spanning;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

pub use paths::PathEntry;
pub use paths::ShortestPathTree;
pub use paths::shortest_paths;
pub use spanning::minimum_spanning_tree;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by graph construction and searches.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The start node is not part of the graph.
    #[error("root node is not in the graph")]
    UnknownRoot,
    /// Edge weights must be finite.
    #[error("edge weight {weight} is not finite")]
    NonFiniteWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// Shortest paths require non-negative weights.
    #[error("edge weight {weight} is negative")]
    NegativeWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// A cheapest path cost overflowed to infinity.
    #[error("path cost overflowed to infinity")]
    PathCostOverflow,
}

// ============================================================================
// SECTION: Edge Kind
// ============================================================================

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// `u -> v` does not imply `v -> u`.
    Directed,
    /// Every edge connects both ways.
    Undirected,
}

// ============================================================================
// SECTION: Value Graph
// ============================================================================

/// A graph with one `f64` weight per edge.
///
/// # Invariants
/// - `index[nodes[i]] == i` for every node.
/// - For undirected graphs every non-loop edge appears in both endpoints'
///   adjacency lists with the same weight.
#[derive(Debug, Clone)]
pub struct ValueGraph<N> {
    /// Edge direction semantics.
    kind: EdgeKind,
    /// Nodes in insertion order.
    nodes: Vec<N>,
    /// Node to position lookup.
    index: HashMap<N, usize>,
    /// Outgoing `(target, weight)` pairs per node.
    adjacency: Vec<Vec<(usize, f64)>>,
    /// Number of distinct edges.
    edge_count: usize,
}

impl<N: Clone + Eq + Hash> ValueGraph<N> {
    /// Creates an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(EdgeKind::Directed)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(EdgeKind::Undirected)
    }

    /// Edge direction semantics.
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true when `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Adds `node` if missing and returns its position.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(position) = self.index.get(&node) {
            return *position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        position
    }

    /// Adds or re-weights the edge `from -> to`, creating missing nodes.
    ///
    /// Returns the previous weight when the edge already existed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn put_edge(&mut self, from: N, to: N, weight: f64) -> Result<Option<f64>, GraphError> {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                weight,
            });
        }
        let source = self.add_node(from);
        let target = self.add_node(to);
        let previous = Self::set_adjacent(&mut self.adjacency[source], target, weight);
        if self.kind == EdgeKind::Undirected && source != target {
            Self::set_adjacent(&mut self.adjacency[target], source, weight);
        }
        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(previous)
    }

    /// Inserts or replaces `(target, weight)` in one adjacency list.
    fn set_adjacent(list: &mut Vec<(usize, f64)>, target: usize, weight: f64) -> Option<f64> {
        if let Some(entry) = list.iter_mut().find(|(node, _)| *node == target) {
            let previous = entry.1;
            entry.1 = weight;
            return Some(previous);
        }
        list.push((target, weight));
        None
    }

    /// Weight of the edge `from -> to` (either direction when undirected).
    #[must_use]
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        let source = *self.index.get(from)?;
        let target = *self.index.get(to)?;
        self.adjacency[source].iter().find(|(node, _)| *node == target).map(|(_, weight)| *weight)
    }

    /// Nodes reachable over one edge from `node`, with edge weights.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + use<'a, N> {
        let list: &'a [(usize, f64)] =
            self.index.get(node).map_or(&[], |position| self.adjacency[*position].as_slice());
        list.iter().map(|(target, weight)| (&self.nodes[*target], *weight))
    }

    /// Every edge once, as `(from, to, weight)`.
    #[must_use]
    pub fn edges(&self) -> Vec<(&N, &N, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (source, list) in self.adjacency.iter().enumerate() {
            for (target, weight) in list {
                if self.kind == EdgeKind::Undirected && *target < source {
                    continue;
                }
                edges.push((&self.nodes[source], &self.nodes[*target], *weight));
            }
        }
        edges
    }

    /// Position of `node`, when present.
    pub(crate) fn position(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Outgoing `(target, weight)` pairs by position.
    pub(crate) fn adjacent(&self, position: usize) -> &[(usize, f64)] {
        &self.adjacency[position]
    }

    /// Node at `position`.
    pub(crate) fn node_at(&self, position: usize) -> &N {
        &self.nodes[position]
    }
}

// ============================================================================
// SECTION: Result Graph
// ============================================================================

/// An unweighted directed graph.
///
/// Two graphs are equal when they hold the same nodes and the same edges,
/// regardless of insertion order.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Nodes in insertion order.
    nodes: Vec<N>,
    /// Node to position lookup.
    index: HashMap<N, usize>,
    /// Edges as `(from, to)` positions.
    edges: HashSet<(usize, usize)>,
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: HashSet::new(),
        }
    }

    /// Adds `node` if missing and returns its position.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(position) = self.index.get(&node) {
            return *position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        position
    }

    /// Adds the edge `from -> to`, creating missing nodes.
    ///
    /// Returns false when the edge already existed.
    pub fn put_edge(&mut self, from: N, to: N) -> bool {
        let source = self.add_node(from);
        let target = self.add_node(to);
        self.edges.insert((source, target))
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true when `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns true when the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(source), Some(target)) => self.edges.contains(&(*source, *target)),
            _ => false,
        }
    }

    /// Every edge as `(from, to)`, ordered by node insertion.
    #[must_use]
    pub fn edges(&self) -> Vec<(&N, &N)> {
        let mut positions: Vec<&(usize, usize)> = self.edges.iter().collect();
        positions.sort_unstable();
        positions.into_iter().map(|(from, to)| (&self.nodes[*from], &self.nodes[*to])).collect()
    }
}

impl<N: Clone + Eq + Hash> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.nodes.iter().all(|node| other.contains_node(node))
            && self.edges().into_iter().all(|(from, to)| other.has_edge(from, to))
    }
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook for graph searches.
pub trait GraphTrace<N> {
    /// Called when a node's final cost (or tree membership) is fixed.
    fn on_node_settled(&mut self, node: &N, cost: f64);

    /// Called when an edge joins the result tree.
    fn on_edge_accepted(&mut self, from: &N, to: &N, weight: f64);
}

/// No-op trace hook for fast paths.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl<N> GraphTrace<N> for NoopTrace {
    fn on_node_settled(&mut self, _node: &N, _cost: f64) {}

    fn on_edge_accepted(&mut self, _from: &N, _to: &N, _weight: f64) {}
}

// ============================================================================
// SECTION: Frontier Ordering
// ============================================================================

/// A tentative edge in a search frontier, ordered as a min-heap entry.
///
/// Lower `priority` pops first; ties pop in insertion order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frontier {
    /// Heap key (path cost or edge weight).
    pub(crate) priority: f64,
    /// Insertion counter for deterministic tie-breaking.
    pub(crate) sequence: u64,
    /// Position of the tree node the edge leaves from.
    pub(crate) from: usize,
    /// Position of the node the edge reaches.
    pub(crate) to: usize,
    /// Weight of the edge itself.
    pub(crate) weight: f64,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
