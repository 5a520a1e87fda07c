// crates/algolab-core/tests/array.rs
// ============================================================================
// Module: Maximum Sub-Array Tests
// Description: Tests for the linear and divide-and-conquer sub-array scans.
// ============================================================================
//! ## Overview
//! Checks both maximum sub-array strategies on fixed fixtures and compares
//! them against a brute-force scan on generated input.

mod support;

use algolab_core::SubArray;
use algolab_core::max_sub_array;
use algolab_core::max_sub_array_divide;
use proptest::prelude::*;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Mixed-sign price changes with a single best run at `7 ..= 10`.
const PRICE_CHANGES: [i64; 16] =
    [13, -3, -25, 20, -3, -16, -23, 18, 20, -7, 12, -5, -22, 15, -4, 7];

/// Largest sum over every contiguous run.
fn brute_force_sum(values: &[i64]) -> Option<i128> {
    let mut best: Option<i128> = None;
    for start in 0 .. values.len() {
        let mut sum = 0_i128;
        for value in &values[start ..] {
            sum += i128::from(*value);
            best = Some(best.map_or(sum, |current| current.max(sum)));
        }
    }
    best
}

// ============================================================================
// SECTION: Fixed Inputs
// ============================================================================

#[test]
fn test_max_sub_array_fixture() -> TestResult {
    let expected = SubArray {
        start: 7,
        end: 10,
        sum: 43,
    };
    ensure(max_sub_array(&PRICE_CHANGES) == Some(expected), "Expected linear scan to find 7..=10")?;
    ensure(
        max_sub_array_divide(&PRICE_CHANGES) == Some(expected),
        "Expected divide and conquer to find 7..=10",
    )?;
    ensure(expected.len() == 4, "Expected an inclusive run length")?;
    Ok(())
}

#[test]
fn test_max_sub_array_all_negative() -> TestResult {
    let values = [-14, -102, -14, -11, -15, -1, -12, -19];
    let expected = SubArray {
        start: 5,
        end: 5,
        sum: -1,
    };
    ensure(max_sub_array(&values) == Some(expected), "Expected the largest single element")?;
    ensure(
        max_sub_array_divide(&values) == Some(expected),
        "Expected the largest single element from divide and conquer",
    )?;
    Ok(())
}

#[test]
fn test_max_sub_array_empty_and_single() -> TestResult {
    ensure(max_sub_array(&[]).is_none(), "Expected no run for empty input")?;
    ensure(max_sub_array_divide(&[]).is_none(), "Expected no run for empty input")?;
    let single = SubArray {
        start: 0,
        end: 0,
        sum: 42,
    };
    ensure(max_sub_array(&[42]) == Some(single), "Expected the single element")?;
    ensure(max_sub_array_divide(&[42]) == Some(single), "Expected the single element")?;
    Ok(())
}

#[test]
fn test_max_sub_array_extreme_values_do_not_overflow() -> TestResult {
    let values = [i64::MAX, i64::MAX, i64::MAX];
    let expected = i128::from(i64::MAX) * 3;
    ensure(
        max_sub_array(&values).is_some_and(|run| run.sum == expected),
        "Expected a widened sum for the linear scan",
    )?;
    ensure(
        max_sub_array_divide(&values).is_some_and(|run| run.sum == expected),
        "Expected a widened sum for divide and conquer",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Generated Inputs
// ============================================================================

proptest! {
    #[test]
    fn max_sub_array_matches_brute_force(values in prop::collection::vec(-1_000_i64 .. 1_000, 1 .. 64)) {
        let expected = brute_force_sum(&values);
        let linear = max_sub_array(&values);
        let divided = max_sub_array_divide(&values);
        prop_assert_eq!(linear.map(|run| run.sum), expected);
        prop_assert_eq!(divided.map(|run| run.sum), expected);

        for run in [linear, divided].into_iter().flatten() {
            prop_assert!(run.start <= run.end && run.end < values.len());
            let sum: i128 = values[run.start ..= run.end].iter().map(|value| i128::from(*value)).sum();
            prop_assert_eq!(sum, run.sum);
        }
    }
}
