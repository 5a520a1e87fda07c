// crates/algolab-core/src/lib.rs
// ============================================================================
// Module: AlgoLab Core Root
// Description: Public API surface for the AlgoLab algorithm library.
// Purpose: Wire together data structures, algorithms, and the worker pool.
// Dependencies: crate::{array, concurrent, dynamic, geometry, graph, matrix, sorting}
// ============================================================================

//! ## Overview
//! `algolab-core` collects classic algorithms behind strongly typed APIs:
//! square matrices with three multiplication strategies, maximum sub-array,
//! quicksort and binary search, closest pair of points, subset sum, and
//! shortest paths plus minimum spanning trees over weighted graphs.
//!
//! Every fallible operation returns a module-specific error; nothing in this
//! crate logs. Graph algorithms accept a [`GraphTrace`] hook instead.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod array;
pub mod concurrent;
pub mod dynamic;
pub mod geometry;
pub mod graph;
pub mod matrix;
pub mod sorting;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use array::SubArray;
pub use array::max_sub_array;
pub use array::max_sub_array_divide;
pub use concurrent::DEFAULT_MATRIX_THREADS;
pub use concurrent::PoolError;
pub use concurrent::WorkerPool;
pub use concurrent::shared_matrix_pool;
pub use dynamic::DynamicError;
pub use dynamic::MAX_SUBSET_SUM_TARGET;
pub use dynamic::SubsetSum;
pub use dynamic::subset_sum;
pub use geometry::GeometryError;
pub use geometry::Point2D;
pub use geometry::PointPair;
pub use geometry::closest_pair;
pub use graph::EdgeKind;
pub use graph::Graph;
pub use graph::GraphError;
pub use graph::GraphTrace;
pub use graph::NoopTrace;
pub use graph::PathEntry;
pub use graph::ShortestPathTree;
pub use graph::ValueGraph;
pub use graph::minimum_spanning_tree;
pub use graph::shortest_paths;
pub use matrix::EQUALITY_TOLERANCE;
pub use matrix::MatrixError;
pub use matrix::MatrixResult;
pub use matrix::MultiplyAlgorithm;
pub use matrix::MultiplyOptions;
pub use matrix::SquareMatrix;
pub use matrix::multiply;
pub use matrix::multiply_divide_and_conquer;
pub use matrix::multiply_on;
pub use matrix::multiply_strassen;
pub use sorting::binary_search;
pub use sorting::quick_sort;
pub use sorting::quick_sort_randomized;
pub use sorting::quick_sort_randomized_with;
