// crates/algolab-core/src/matrix.rs
// ============================================================================
// Module: Square Matrices
// Description: Dense square matrices and three multiplication strategies.
// Purpose: Compare the classic product with recursive and Strassen products.
// Dependencies: crate::concurrent, rand, serde, thiserror
// ============================================================================

//! ## Overview
//! [`SquareMatrix`] stores an `n x n` matrix of `f64` flat in column-major
//! order. Alongside the classic triple-loop [`SquareMatrix::product`] it
//! offers two recursive strategies:
//!
//! - [`multiply_divide_and_conquer`]: eight half-size products per level.
//! - [`multiply_strassen`]: seven half-size products per level.
//!
//! Recursive strategies accept any size by zero-padding the operands to the
//! next power of two and cropping the result. Recursion stops at
//! [`MultiplyOptions::leaf_size`]; sub-products at or above
//! [`MultiplyOptions::parallel_threshold`] fork onto the worker pool.
//!
//! Equality is approximate: two matrices are equal when their sizes match
//! and every entry differs by at most [`EQUALITY_TOLERANCE`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::concurrent::PoolError;
use crate::concurrent::WorkerPool;
use crate::concurrent::fork;
use crate::concurrent::shared_matrix_pool;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum per-entry difference for two matrices to compare equal.
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix must have at least one row.
    #[error("matrix size must be positive")]
    ZeroSize,
    /// Operands of a binary operation differ in size.
    #[error("matrix sizes are not equal: expected {expected}, was {actual}")]
    SizeMismatch {
        /// Size of the left operand.
        expected: usize,
        /// Size of the right operand.
        actual: usize,
    },
    /// An element index lies outside the matrix.
    #[error("element ({row}, {col}) is out of bounds for matrix of size {size}")]
    OutOfBounds {
        /// Matrix size.
        size: usize,
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// A block would extend past the matrix edge.
    #[error(
        "sub-matrix of size {sub_size} at ({row}, {col}) exceeds matrix of size {size}"
    )]
    SubMatrixOutOfBounds {
        /// Matrix size.
        size: usize,
        /// Top row of the block.
        row: usize,
        /// Left column of the block.
        col: usize,
        /// Block size.
        sub_size: usize,
    },
    /// A flat element list whose length is not a perfect square.
    #[error("element count is not a perfect square: {len}")]
    NotPerfectSquare {
        /// Number of elements supplied.
        len: usize,
    },
    /// A row of a nested element list has the wrong length.
    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Required row length.
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
    /// Four quadrants passed to [`SquareMatrix::from_parts`] differ in size.
    #[error("matrix parts must all have the same size")]
    PartSizeMismatch,
    /// The worker pool could not be started.
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Result alias for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

// ============================================================================
// SECTION: Multiplication Settings
// ============================================================================

/// Multiplication strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplyAlgorithm {
    /// Classic triple loop.
    Standard,
    /// Recursive product with eight sub-products per level.
    DivideAndConquer,
    /// Strassen's product with seven sub-products per level.
    Strassen,
}

impl MultiplyAlgorithm {
    /// All strategies, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::DivideAndConquer, Self::Strassen];

    /// Returns a stable label for the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::DivideAndConquer => "divide_and_conquer",
            Self::Strassen => "strassen",
        }
    }
}

impl fmt::Display for MultiplyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning knobs for the recursive strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplyOptions {
    /// Blocks of this size or smaller use the classic product. `0` acts as `1`.
    pub leaf_size: usize,
    /// Blocks of this size or larger fork their sub-products onto the worker
    /// pool. `None` keeps everything on the calling thread.
    pub parallel_threshold: Option<usize>,
}

impl Default for MultiplyOptions {
    fn default() -> Self {
        Self {
            leaf_size: 1,
            parallel_threshold: None,
        }
    }
}

impl MultiplyOptions {
    /// Returns true when a block of `size` should fork.
    fn forks_at(self, size: usize) -> bool {
        self.parallel_threshold.is_some_and(|threshold| size >= threshold)
    }

    /// Returns the effective leaf size.
    fn leaf(self) -> usize {
        self.leaf_size.max(1)
    }
}

// ============================================================================
// SECTION: Square Matrix
// ============================================================================

/// A dense `n x n` matrix of `f64`.
///
/// # Invariants
/// - `size >= 1` and `data.len() == size * size`.
/// - Entry `(row, col)` lives at `data[row + col * size]`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRows", into = "MatrixRows")]
pub struct SquareMatrix {
    /// Entries in column-major order.
    data: Vec<f64>,
    /// Number of rows (and columns).
    size: usize,
}

/// Row-major wire form of a matrix: a list of equal-length rows.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct MatrixRows(Vec<Vec<f64>>);

impl TryFrom<MatrixRows> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: MatrixRows) -> Result<Self, Self::Error> {
        Self::from_rows(&rows.0)
    }
}

impl From<SquareMatrix> for MatrixRows {
    fn from(matrix: SquareMatrix) -> Self {
        Self(matrix.rows())
    }
}

impl SquareMatrix {
    /// Wraps column-major data without validation.
    const fn from_raw(size: usize, data: Vec<f64>) -> Self {
        Self {
            data,
            size,
        }
    }

    /// Creates a zero matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroSize`] when `size == 0`.
    pub fn zeros(size: usize) -> MatrixResult<Self> {
        if size == 0 {
            return Err(MatrixError::ZeroSize);
        }
        Ok(Self::from_raw(size, vec![0.0; size * size]))
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroSize`] when `size == 0`.
    pub fn identity(size: usize) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(size)?;
        for index in 0 .. size {
            matrix.data[index + index * size] = 1.0;
        }
        Ok(matrix)
    }

    /// Creates a matrix from elements listed row by row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotPerfectSquare`] when the element count is
    /// zero or not a perfect square.
    pub fn from_elements(elements: &[f64]) -> MatrixResult<Self> {
        let len = elements.len();
        let size = len.isqrt();
        if size == 0 || size * size != len {
            return Err(MatrixError::NotPerfectSquare {
                len,
            });
        }
        let mut data = Vec::with_capacity(len);
        for col in 0 .. size {
            for row in 0 .. size {
                data.push(elements[row * size + col]);
            }
        }
        Ok(Self::from_raw(size, data))
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroSize`] for an empty list and
    /// [`MatrixError::RaggedRow`] when a row length differs from the row count.
    pub fn from_rows(rows: &[Vec<f64>]) -> MatrixResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::ZeroSize);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(size * size);
        for col in 0 .. size {
            data.extend(rows.iter().map(|values| values[col]));
        }
        Ok(Self::from_raw(size, data))
    }

    /// Creates a matrix with entries drawn uniformly from `[-1, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroSize`] when `size == 0`.
    pub fn random(size: usize) -> MatrixResult<Self> {
        Self::random_with(size, &mut rand::thread_rng())
    }

    /// Same as [`SquareMatrix::random`] with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroSize`] when `size == 0`.
    pub fn random_with<R: Rng>(size: usize, rng: &mut R) -> MatrixResult<Self> {
        if size == 0 {
            return Err(MatrixError::ZeroSize);
        }
        let data = (0 .. size * size).map(|_| rng.gen_range(-1.0 .. 1.0)).collect();
        Ok(Self::from_raw(size, data))
    }

    /// Builds a matrix twice the size of four equal quadrants.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::PartSizeMismatch`] when the quadrants differ in size.
    pub fn from_parts(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> MatrixResult<Self> {
        let half = c11.size;
        if [c12, c21, c22].iter().any(|part| part.size != half) {
            return Err(MatrixError::PartSizeMismatch);
        }
        let mut result = Self::zeros(half * 2)?;
        result.set_sub_matrix(0, 0, c11)?;
        result.set_sub_matrix(0, half, c12)?;
        result.set_sub_matrix(half, 0, c21)?;
        result.set_sub_matrix(half, half, c22)?;
        Ok(result)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the entries as a list of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0 .. self.size)
            .map(|row| (0 .. self.size).map(|col| self.data[row + col * self.size]).collect())
            .collect()
    }

    /// Flat offset of `(row, col)`, checked.
    const fn offset(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row >= self.size || col >= self.size {
            return Err(MatrixError::OutOfBounds {
                size: self.size,
                row,
                col,
            });
        }
        Ok(row + col * self.size)
    }

    /// Returns the entry at `(row, col)`, zero-based.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] when the index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the entry at `(row, col)`, zero-based.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] when the index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Fails unless `other` has the same size as `self`.
    const fn check_same_size(&self, other: &Self) -> MatrixResult<()> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                expected: self.size,
                actual: other.size,
            });
        }
        Ok(())
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn plus(&self, other: &Self) -> MatrixResult<Self> {
        let mut result = self.clone();
        result.plus_assign(other)?;
        Ok(result)
    }

    /// Adds `other` into `self`, returning `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn plus_assign(&mut self, other: &Self) -> MatrixResult<&mut Self> {
        self.check_same_size(other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(&other.data) {
            *lhs += rhs;
        }
        Ok(self)
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn minus(&self, other: &Self) -> MatrixResult<Self> {
        let mut result = self.clone();
        result.minus_assign(other)?;
        Ok(result)
    }

    /// Subtracts `other` from `self`, returning `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn minus_assign(&mut self, other: &Self) -> MatrixResult<&mut Self> {
        self.check_same_size(other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(&other.data) {
            *lhs -= rhs;
        }
        Ok(self)
    }

    /// Classic `O(n^3)` matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn product(&self, other: &Self) -> MatrixResult<Self> {
        self.check_same_size(other)?;
        let n = self.size;
        let mut data = vec![0.0; n * n];
        for col in 0 .. n {
            let other_col = &other.data[col * n .. (col + 1) * n];
            let out_col = &mut data[col * n .. (col + 1) * n];
            for (k, factor) in other_col.iter().enumerate() {
                let self_col = &self.data[k * n .. (k + 1) * n];
                for (out, value) in out_col.iter_mut().zip(self_col) {
                    *out += value * factor;
                }
            }
        }
        Ok(Self::from_raw(n, data))
    }

    /// Fails unless a `sub_size` block at `(row, col)` fits inside `self`.
    fn check_block(&self, row: usize, col: usize, sub_size: usize) -> MatrixResult<()> {
        if sub_size == 0 {
            return Err(MatrixError::ZeroSize);
        }
        let fits = |start: usize| start.checked_add(sub_size).is_some_and(|end| end <= self.size);
        if !fits(row) || !fits(col) {
            return Err(MatrixError::SubMatrixOutOfBounds {
                size: self.size,
                row,
                col,
                sub_size,
            });
        }
        Ok(())
    }

    /// Copies the `sub_size` block whose top-left corner is `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SubMatrixOutOfBounds`] when the block leaves
    /// the matrix and [`MatrixError::ZeroSize`] when `sub_size == 0`.
    pub fn sub_matrix(&self, row: usize, col: usize, sub_size: usize) -> MatrixResult<Self> {
        self.check_block(row, col, sub_size)?;
        let mut data = Vec::with_capacity(sub_size * sub_size);
        for k in 0 .. sub_size {
            let start = row + (col + k) * self.size;
            data.extend_from_slice(&self.data[start .. start + sub_size]);
        }
        Ok(Self::from_raw(sub_size, data))
    }

    /// Writes `block` into `self` with its top-left corner at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SubMatrixOutOfBounds`] when the block leaves the matrix.
    pub fn set_sub_matrix(&mut self, row: usize, col: usize, block: &Self) -> MatrixResult<()> {
        self.check_block(row, col, block.size)?;
        let sub_size = block.size;
        for k in 0 .. sub_size {
            let start = row + (col + k) * self.size;
            self.data[start .. start + sub_size]
                .copy_from_slice(&block.data[k * sub_size .. (k + 1) * sub_size]);
        }
        Ok(())
    }

    /// Splits an even-sized matrix into `[upper left, upper right, lower left, lower right]`.
    fn quadrants(&self) -> MatrixResult<[Self; 4]> {
        let half = self.size / 2;
        Ok([
            self.sub_matrix(0, 0, half)?,
            self.sub_matrix(0, half, half)?,
            self.sub_matrix(half, 0, half)?,
            self.sub_matrix(half, half, half)?,
        ])
    }
}

impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(lhs, rhs)| (lhs - rhs).abs() <= EQUALITY_TOLERANCE)
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0 .. self.size {
            for col in 0 .. self.size {
                if col > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:.2}", self.data[row + col * self.size])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquareMatrix").field("size", &self.size).field("rows", &self.rows()).finish()
    }
}

// ============================================================================
// SECTION: Padding
// ============================================================================

/// Copies `matrix` into the upper-left corner of a zero matrix of `size`.
///
/// `size` must be at least `matrix.size()`.
pub(crate) fn pad_to(matrix: &SquareMatrix, size: usize) -> SquareMatrix {
    if size <= matrix.size {
        return matrix.clone();
    }
    let mut data = vec![0.0; size * size];
    for col in 0 .. matrix.size {
        let src = &matrix.data[col * matrix.size .. (col + 1) * matrix.size];
        data[col * size .. col * size + matrix.size].copy_from_slice(src);
    }
    SquareMatrix::from_raw(size, data)
}

/// Pads both operands to a power of two, runs `op`, and crops the result.
fn with_power_of_two<F>(a: &SquareMatrix, b: &SquareMatrix, op: F) -> MatrixResult<SquareMatrix>
where
    F: FnOnce(&SquareMatrix, &SquareMatrix) -> MatrixResult<SquareMatrix>,
{
    a.check_same_size(b)?;
    let size = a.size;
    let padded = size.next_power_of_two();
    if padded == size {
        return op(a, b);
    }
    let result = op(&pad_to(a, padded), &pad_to(b, padded))?;
    result.sub_matrix(0, 0, size)
}

// ============================================================================
// SECTION: Divide and Conquer Product
// ============================================================================

/// Recursive eight-product multiplication over power-of-two sizes.
fn divide_and_conquer_recursive(
    a: &SquareMatrix,
    b: &SquareMatrix,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    if a.size <= options.leaf() {
        return a.product(b);
    }
    let parallel = options.forks_at(a.size);
    let [a11, a12, a21, a22] = a.quadrants()?;
    let [b11, b12, b21, b22] = b.quadrants()?;
    let recurse = |x: &SquareMatrix, y: &SquareMatrix| divide_and_conquer_recursive(x, y, options);
    let block = |x1: &SquareMatrix,
                 y1: &SquareMatrix,
                 x2: &SquareMatrix,
                 y2: &SquareMatrix|
     -> MatrixResult<SquareMatrix> {
        let (first, second) = fork(parallel, || recurse(x1, y1), || recurse(x2, y2));
        let mut sum = first?;
        sum.plus_assign(&second?)?;
        Ok(sum)
    };

    let ((c11, c12), (c21, c22)) = fork(
        parallel,
        || fork(parallel, || block(&a11, &b11, &a12, &b21), || block(&a11, &b12, &a12, &b22)),
        || fork(parallel, || block(&a21, &b11, &a22, &b21), || block(&a21, &b12, &a22, &b22)),
    );
    SquareMatrix::from_parts(&c11?, &c12?, &c21?, &c22?)
}

/// Recursive matrix product using eight half-size sub-products per level.
///
/// # Errors
///
/// Returns [`MatrixError::SizeMismatch`] when the sizes differ and
/// [`MatrixError::Pool`] when parallelism is requested but the shared pool
/// cannot start.
pub fn multiply_divide_and_conquer(
    a: &SquareMatrix,
    b: &SquareMatrix,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    run_recursive(a, b, options, None, divide_and_conquer_recursive)
}

// ============================================================================
// SECTION: Strassen Product
// ============================================================================

/// Recursive Strassen multiplication over power-of-two sizes.
fn strassen_recursive(
    a: &SquareMatrix,
    b: &SquareMatrix,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    if a.size <= options.leaf() {
        return a.product(b);
    }
    let parallel = options.forks_at(a.size);
    let [a11, a12, a21, a22] = a.quadrants()?;
    let [b11, b12, b21, b22] = b.quadrants()?;

    let s1 = b12.minus(&b22)?;
    let s2 = a11.plus(&a12)?;
    let s3 = a21.plus(&a22)?;
    let s4 = b21.minus(&b11)?;
    let s5 = a11.plus(&a22)?;
    let s6 = b11.plus(&b22)?;
    let s7 = a12.minus(&a22)?;
    let s8 = b21.plus(&b22)?;
    let s9 = a11.minus(&a21)?;
    let s10 = b11.plus(&b12)?;

    let recurse = |x: &SquareMatrix, y: &SquareMatrix| strassen_recursive(x, y, options);
    let (((p1, p2), (p3, p4)), ((p5, p6), p7)) = fork(
        parallel,
        || {
            fork(
                parallel,
                || fork(parallel, || recurse(&a11, &s1), || recurse(&s2, &b22)),
                || fork(parallel, || recurse(&s3, &b11), || recurse(&a22, &s4)),
            )
        },
        || {
            fork(
                parallel,
                || fork(parallel, || recurse(&s5, &s6), || recurse(&s7, &s8)),
                || recurse(&s9, &s10),
            )
        },
    );
    let (p1, p2, p3, p4, p5, p6, p7) = (p1?, p2?, p3?, p4?, p5?, p6?, p7?);

    let mut c11 = p5.plus(&p4)?;
    c11.minus_assign(&p2)?.plus_assign(&p6)?;
    let c12 = p1.plus(&p2)?;
    let c21 = p3.plus(&p4)?;
    let mut c22 = p5.plus(&p1)?;
    c22.minus_assign(&p3)?.minus_assign(&p7)?;

    SquareMatrix::from_parts(&c11, &c12, &c21, &c22)
}

/// Strassen matrix product using seven half-size sub-products per level.
///
/// # Errors
///
/// Returns [`MatrixError::SizeMismatch`] when the sizes differ and
/// [`MatrixError::Pool`] when parallelism is requested but the shared pool
/// cannot start.
pub fn multiply_strassen(
    a: &SquareMatrix,
    b: &SquareMatrix,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    run_recursive(a, b, options, None, strassen_recursive)
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Pads, then runs a recursive strategy on `pool` (or the shared pool) when
/// the operands are large enough to fork.
fn run_recursive(
    a: &SquareMatrix,
    b: &SquareMatrix,
    options: MultiplyOptions,
    pool: Option<&WorkerPool>,
    recursive: fn(&SquareMatrix, &SquareMatrix, MultiplyOptions) -> MatrixResult<SquareMatrix>,
) -> MatrixResult<SquareMatrix> {
    with_power_of_two(a, b, |a, b| {
        if !options.forks_at(a.size) {
            return recursive(a, b, options);
        }
        let pool = match pool {
            Some(pool) => pool,
            None => shared_matrix_pool()?,
        };
        pool.install(|| recursive(a, b, options))
    })
}

/// Multiplies `a * b` with the selected strategy.
///
/// # Errors
///
/// Returns [`MatrixError::SizeMismatch`] when the sizes differ and
/// [`MatrixError::Pool`] when the shared pool cannot start.
pub fn multiply(
    a: &SquareMatrix,
    b: &SquareMatrix,
    algorithm: MultiplyAlgorithm,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    match algorithm {
        MultiplyAlgorithm::Standard => a.product(b),
        MultiplyAlgorithm::DivideAndConquer => multiply_divide_and_conquer(a, b, options),
        MultiplyAlgorithm::Strassen => multiply_strassen(a, b, options),
    }
}

/// Multiplies `a * b`, forking parallel sub-products onto `pool`.
///
/// # Errors
///
/// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
pub fn multiply_on(
    pool: &WorkerPool,
    a: &SquareMatrix,
    b: &SquareMatrix,
    algorithm: MultiplyAlgorithm,
    options: MultiplyOptions,
) -> MatrixResult<SquareMatrix> {
    match algorithm {
        MultiplyAlgorithm::Standard => a.product(b),
        MultiplyAlgorithm::DivideAndConquer => {
            run_recursive(a, b, options, Some(pool), divide_and_conquer_recursive)
        }
        MultiplyAlgorithm::Strassen => run_recursive(a, b, options, Some(pool), strassen_recursive),
    }
}
