// crates/algolab-core/src/tests.rs
// ============================================================================
// Module: AlgoLab Core Unit Tests
// Description: Unit tests for crate-private helpers.
// Purpose: Cover padding and partition helpers not reachable from the public API.
// Dependencies: algolab-core
// ============================================================================

//! ## Overview
//! Exercises private helpers of the matrix and sorting modules.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use crate::matrix::SquareMatrix;
use crate::matrix::pad_to;
use crate::sorting::partition;

// ============================================================================
// SECTION: Matrix Helpers
// ============================================================================

#[test]
fn pad_to_keeps_values_in_upper_left_block() {
    let matrix = SquareMatrix::from_elements(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .unwrap();
    let padded = pad_to(&matrix, 4);

    assert_eq!(padded.size(), 4);
    assert_eq!(padded.get(0, 0).unwrap(), 1.0);
    assert_eq!(padded.get(2, 2).unwrap(), 9.0);
    assert_eq!(padded.get(3, 3).unwrap(), 0.0);
    assert_eq!(padded.get(0, 3).unwrap(), 0.0);
    assert_eq!(padded.sub_matrix(0, 0, 3).unwrap(), matrix);
}

#[test]
fn pad_to_same_size_is_a_copy() {
    let matrix = SquareMatrix::identity(2).unwrap();
    assert_eq!(pad_to(&matrix, 2), matrix);
}

// ============================================================================
// SECTION: Partition Helper
// ============================================================================

#[test]
fn partition_places_pivot_between_smaller_and_larger() {
    let mut values = [5, 9, 1, 5, 7, 3];
    let pivot_index = partition(&mut values);

    assert_eq!(values[pivot_index], 5);
    assert!(values[.. pivot_index].iter().all(|value| *value <= 5));
    assert!(values[pivot_index + 1 ..].iter().all(|value| *value >= 5));
}

#[test]
fn partition_keeps_duplicates() {
    let mut values = [2, 2, 2, 2];
    let pivot_index = partition(&mut values);

    assert!(pivot_index < values.len());
    assert_eq!(values, [2, 2, 2, 2]);
}
