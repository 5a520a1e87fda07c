// crates/algolab-cli/src/inputs.rs
// ============================================================================
// Module: CLI Inputs
// Description: Bounded JSON readers for matrices, points, and graphs.
// Purpose: Turn untrusted input files into validated core types.
// Dependencies: algolab-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Input files are JSON and read with a hard size limit before parsing.
//!
//! - Matrices: a list of equal-length rows, `[[1.0, 2.0], [3.0, 4.0]]`.
//! - Points: a list of objects, `[{"x": 1.0, "y": 2.0}, ...]`.
//! - Graphs: `{"kind": "undirected", "edges": [["a", "b", 1.0], ...]}`
//!   plus an optional `nodes` list for isolated nodes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use algolab_core::EdgeKind;
use algolab_core::GraphError;
use algolab_core::Point2D;
use algolab_core::SquareMatrix;
use algolab_core::ValueGraph;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum size of any JSON input file.
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while reading input files.
#[derive(Debug, Error)]
pub enum InputError {
    /// File I/O failure.
    #[error("failed to read {path}: {error}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying error message.
        error: String,
    },
    /// File size exceeds the limit.
    #[error("{path} is {size} bytes, above the {limit} byte limit")]
    TooLarge {
        /// Offending path.
        path: String,
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// The file is not valid JSON for the expected shape.
    #[error("invalid {kind} input in {path}: {error}")]
    Parse {
        /// Expected input kind.
        kind: &'static str,
        /// Offending path.
        path: String,
        /// Parser message.
        error: String,
    },
    /// The graph description was rejected.
    #[error("invalid graph input in {path}: {source}")]
    Graph {
        /// Offending path.
        path: String,
        /// Graph construction error.
        source: GraphError,
    },
}

// ============================================================================
// SECTION: Input Shapes
// ============================================================================

/// Graph file contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphInput {
    /// Whether edges are directed.
    pub kind: EdgeKind,
    /// Nodes to add before any edge; fixes insertion order.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Edges as `[from, to, weight]`.
    pub edges: Vec<(String, String, f64)>,
}

impl GraphInput {
    /// Builds the weighted graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn into_graph(self) -> Result<ValueGraph<String>, GraphError> {
        let mut graph = ValueGraph::new(self.kind);
        for node in self.nodes {
            graph.add_node(node);
        }
        for (from, to, weight) in self.edges {
            graph.put_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

// ============================================================================
// SECTION: Readers
// ============================================================================

/// Reads a file while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`InputError::Io`] on read failure and [`InputError::TooLarge`]
/// when the file exceeds `max_bytes`.
pub fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, InputError> {
    let io_error = |err: std::io::Error| InputError::Io {
        path: path.display().to_string(),
        error: err.to_string(),
    };
    let too_large = |size: u64| InputError::TooLarge {
        path: path.display().to_string(),
        size,
        limit: max_bytes,
    };
    let file = File::open(path).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();
    let limit = u64::try_from(max_bytes).map_err(|_| too_large(size))?;
    if size > limit {
        return Err(too_large(size));
    }

    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1)).read_to_end(&mut bytes).map_err(io_error)?;
    if bytes.len() > max_bytes {
        return Err(too_large(u64::try_from(bytes.len()).unwrap_or(u64::MAX)));
    }
    Ok(bytes)
}

/// Reads and parses a bounded JSON file.
fn read_json<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T, InputError> {
    let bytes = read_bytes_with_limit(path, MAX_INPUT_BYTES)?;
    serde_json::from_slice(&bytes).map_err(|err| InputError::Parse {
        kind,
        path: path.display().to_string(),
        error: err.to_string(),
    })
}

/// Reads a matrix file.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read or is not a square
/// list of rows.
pub fn read_matrix(path: &Path) -> Result<SquareMatrix, InputError> {
    read_json(path, "matrix")
}

/// Reads a point list file.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read or parsed.
pub fn read_points(path: &Path) -> Result<Vec<Point2D>, InputError> {
    read_json(path, "points")
}

/// Reads a graph file and builds the weighted graph.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read or parsed, or when an
/// edge weight is not finite.
pub fn read_graph(path: &Path) -> Result<ValueGraph<String>, InputError> {
    let input: GraphInput = read_json(path, "graph")?;
    input.into_graph().map_err(|source| InputError::Graph {
        path: path.display().to_string(),
        source,
    })
}
