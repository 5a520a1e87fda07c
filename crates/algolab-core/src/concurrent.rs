// crates/algolab-core/src/concurrent.rs
// ============================================================================
// Module: Worker Pools
// Description: Shared rayon pools for parallel matrix computation.
// Purpose: Give recursive algorithms a bounded set of workers to fork onto.
// Dependencies: rayon, thiserror
// ============================================================================

//! ## Overview
//! Recursive matrix products fork their sub-products with `rayon::join`.
//! Those joins run on whichever pool is current, so callers either use the
//! process-wide [`shared_matrix_pool`] or build a dedicated [`WorkerPool`] and
//! run the computation through [`WorkerPool::install`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Worker count of the shared matrix pool.
pub const DEFAULT_MATRIX_THREADS: usize = 16;

/// Thread name prefix for pool workers.
const WORKER_NAME_PREFIX: &str = "algolab-matrix";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a worker pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The underlying rayon pool failed to start.
    #[error("failed to build worker pool: {0}")]
    Build(String),
}

// ============================================================================
// SECTION: Worker Pool
// ============================================================================

/// A fixed-size pool of worker threads.
#[derive(Debug)]
pub struct WorkerPool {
    /// Underlying rayon pool.
    pool: ThreadPool,
}

impl WorkerPool {
    /// Builds a pool with `threads` workers; `0` picks rayon's default.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the worker threads cannot be spawned.
    pub fn new(threads: usize) -> Result<Self, PoolError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("{WORKER_NAME_PREFIX}-{index}"))
            .build()
            .map_err(|err| PoolError::Build(err.to_string()))?;
        Ok(Self {
            pool,
        })
    }

    /// Number of worker threads in this pool.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside this pool; nested `rayon::join` calls fork onto it.
    pub fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

/// Process-wide pool used by matrix multiplication when parallelism is on.
static MATRIX_POOL: OnceLock<Result<WorkerPool, PoolError>> = OnceLock::new();

/// Returns the shared matrix pool, building it on first use.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool failed to build. The failure is
/// remembered; later calls return the same error.
pub fn shared_matrix_pool() -> Result<&'static WorkerPool, PoolError> {
    MATRIX_POOL.get_or_init(|| WorkerPool::new(DEFAULT_MATRIX_THREADS)).as_ref().map_err(Clone::clone)
}

/// Runs `left` and `right`, concurrently when `parallel` is set.
pub(crate) fn fork<A, B, RA, RB>(parallel: bool, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel { rayon::join(left, right) } else { (left(), right()) }
}
