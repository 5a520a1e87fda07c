// crates/algolab-cli/src/bench.rs
// ============================================================================
// Module: Matrix Timing Benchmark
// Description: Warmup-then-measure timings of the multiplication strategies.
// Purpose: Back `algolab matrix bench` with a reproducible timing loop.
// Dependencies: algolab-config, algolab-core, rand, serde
// ============================================================================

//! ## Overview
//! For every configured size a fresh pair of random operands is drawn from a
//! seeded generator, then each strategy runs `warmup` untimed and
//! `iterations` timed multiplications. Every product is checked against the
//! classic product of the same operands before timing starts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Duration;
use std::time::Instant;

use algolab_config::BenchConfig;
use algolab_core::MatrixError;
use algolab_core::MultiplyAlgorithm;
use algolab_core::MultiplyOptions;
use algolab_core::SquareMatrix;
use algolab_core::WorkerPool;
use algolab_core::multiply_on;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A complete benchmark request.
#[derive(Debug, Clone)]
pub struct BenchPlan {
    /// Matrix sizes to time.
    pub sizes: Vec<usize>,
    /// Timed runs per case.
    pub iterations: u32,
    /// Untimed runs per case.
    pub warmup: u32,
    /// Strategies to time.
    pub algorithms: Vec<MultiplyAlgorithm>,
    /// Recursion and parallelism settings.
    pub options: MultiplyOptions,
    /// Seed for operand generation.
    pub seed: u64,
}

impl BenchPlan {
    /// Builds a plan from `[bench]` settings.
    #[must_use]
    pub fn from_config(config: &BenchConfig, options: MultiplyOptions, seed: u64) -> Self {
        Self {
            sizes: config.sizes.clone(),
            iterations: config.iterations,
            warmup: config.warmup,
            algorithms: config.algorithms.clone(),
            options,
            seed,
        }
    }
}

/// Timing summary for one strategy at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRecord {
    /// Strategy timed.
    pub algorithm: MultiplyAlgorithm,
    /// Operand size.
    pub size: usize,
    /// Timed runs.
    pub iterations: u32,
    /// Mean run time in milliseconds.
    pub mean_ms: f64,
    /// Fastest run in milliseconds.
    pub min_ms: f64,
    /// Slowest run in milliseconds.
    pub max_ms: f64,
}

/// Errors raised by a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A multiplication failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// A strategy disagreed with the classic product.
    #[error("{algorithm} disagrees with the classic product at size {size}")]
    Mismatch {
        /// Offending strategy.
        algorithm: MultiplyAlgorithm,
        /// Operand size.
        size: usize,
    },
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs every case of `plan` on `pool`.
///
/// # Errors
///
/// Returns [`BenchError`] when a multiplication fails or a strategy returns
/// a wrong product.
pub fn run_bench(plan: &BenchPlan, pool: &WorkerPool) -> Result<Vec<BenchRecord>, BenchError> {
    let mut rng = StdRng::seed_from_u64(plan.seed);
    let mut records = Vec::with_capacity(plan.sizes.len() * plan.algorithms.len());
    for size in &plan.sizes {
        let a = SquareMatrix::random_with(*size, &mut rng)?;
        let b = SquareMatrix::random_with(*size, &mut rng)?;
        let expected = a.product(&b)?;
        for algorithm in &plan.algorithms {
            let run = || multiply_on(pool, black_box(&a), black_box(&b), *algorithm, plan.options);
            if run()? != expected {
                return Err(BenchError::Mismatch {
                    algorithm: *algorithm,
                    size: *size,
                });
            }
            for _ in 0 .. plan.warmup {
                black_box(run()?);
            }
            let mut timings = Vec::with_capacity(usize::try_from(plan.iterations).unwrap_or(0));
            for _ in 0 .. plan.iterations {
                let started = Instant::now();
                black_box(run()?);
                timings.push(started.elapsed());
            }
            records.push(summarize(*algorithm, *size, &timings));
        }
    }
    Ok(records)
}

/// Folds run times into a record.
fn summarize(algorithm: MultiplyAlgorithm, size: usize, timings: &[Duration]) -> BenchRecord {
    let millis: Vec<f64> = timings.iter().map(|timing| timing.as_secs_f64() * 1_000.0).collect();
    let count = u32::try_from(millis.len()).unwrap_or(u32::MAX);
    if count == 0 {
        return BenchRecord {
            algorithm,
            size,
            iterations: 0,
            mean_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }
    let total: f64 = millis.iter().sum();
    BenchRecord {
        algorithm,
        size,
        iterations: count,
        mean_ms: total / f64::from(count),
        min_ms: millis.iter().copied().fold(f64::INFINITY, f64::min),
        max_ms: millis.iter().copied().fold(0.0, f64::max),
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders records as an aligned text table.
#[must_use]
pub fn render_bench_text(records: &[BenchRecord]) -> String {
    let mut output = format!(
        "{:<20} {:>6} {:>6} {:>12} {:>12} {:>12}\n",
        "algorithm", "size", "runs", "mean_ms", "min_ms", "max_ms"
    );
    for record in records {
        let _ = writeln!(
            output,
            "{:<20} {:>6} {:>6} {:>12.3} {:>12.3} {:>12.3}",
            record.algorithm.as_str(),
            record.size,
            record.iterations,
            record.mean_ms,
            record.min_ms,
            record.max_ms,
        );
    }
    output
}
