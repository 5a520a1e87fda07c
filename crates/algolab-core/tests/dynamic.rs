// crates/algolab-core/tests/dynamic.rs
// ============================================================================
// Module: Subset Sum Tests
// Description: Tests for the subset-sum reachability table.
// ============================================================================
//! ## Overview
//! Validates subset-sum totals, the recovered elements, and the target cap.

mod support;

use algolab_core::DynamicError;
use algolab_core::MAX_SUBSET_SUM_TARGET;
use algolab_core::subset_sum;
use proptest::prelude::*;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Fixed Inputs
// ============================================================================

#[test]
fn test_subset_sum_exact_hit() -> TestResult {
    let result = subset_sum(&[3, 34, 4, 12, 5, 2], 9)?;
    ensure(result.total == 9, "Expected an exact total of 9")?;
    ensure(result.elements.iter().sum::<u64>() == 9, "Expected elements to add up")?;
    ensure(result.indices.windows(2).all(|pair| pair[0] < pair[1]), "Expected input order")?;
    Ok(())
}

#[test]
fn test_subset_sum_best_below_target() -> TestResult {
    let result = subset_sum(&[6, 10, 14], 13)?;
    ensure(result.total == 10, "Expected the largest reachable total below 13")?;
    ensure(result.elements == vec![10], "Expected the single element 10")?;
    ensure(result.indices == vec![1], "Expected the index of 10")?;
    Ok(())
}

#[test]
fn test_subset_sum_degenerate_inputs() -> TestResult {
    let empty = subset_sum(&[], 10)?;
    ensure(empty.total == 0 && empty.elements.is_empty(), "Expected nothing from empty input")?;

    let zero_target = subset_sum(&[1, 2, 3], 0)?;
    ensure(zero_target.total == 0, "Expected a zero target to choose nothing")?;

    let zeros = subset_sum(&[0, 0, 4], 4)?;
    ensure(zeros.indices == vec![2], "Expected zero-valued elements to be skipped")?;

    let oversized = subset_sum(&[u64::MAX, 7], 8)?;
    ensure(oversized.elements == vec![7], "Expected elements above the target to be skipped")?;
    Ok(())
}

#[test]
fn test_subset_sum_target_cap() -> TestResult {
    let target = MAX_SUBSET_SUM_TARGET + 1;
    ensure(
        subset_sum(&[1], target)
            == Err(DynamicError::TargetTooLarge {
                target,
                max: MAX_SUBSET_SUM_TARGET,
            }),
        "Expected targets above the cap to be rejected",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Generated Inputs
// ============================================================================

/// Best total by enumerating every subset.
fn brute_force_best(values: &[u64], target: u64) -> u64 {
    let mut best = 0;
    for mask in 0_u32 .. (1 << values.len()) {
        let total: u64 = values
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, value)| value)
            .sum();
        if total <= target {
            best = best.max(total);
        }
    }
    best
}

proptest! {
    #[test]
    fn subset_sum_matches_enumeration(values in prop::collection::vec(0_u64 .. 50, 0 .. 12), target in 0_u64 .. 200) {
        let result = subset_sum(&values, target).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(result.total, brute_force_best(&values, target));
        prop_assert_eq!(result.elements.iter().sum::<u64>(), result.total);
        for (position, index) in result.indices.iter().enumerate() {
            prop_assert_eq!(values[*index], result.elements[position]);
        }
    }
}
