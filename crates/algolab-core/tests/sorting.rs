// crates/algolab-core/tests/sorting.rs
// ============================================================================
// Module: Sorting + Search Tests
// Description: Tests for quicksort variants and recursive binary search.
// ============================================================================
//! ## Overview
//! Compares both quicksorts with the standard library sort and checks binary
//! search hits and misses.

mod support;

use std::thread;

use algolab_core::binary_search;
use algolab_core::quick_sort;
use algolab_core::quick_sort_randomized;
use algolab_core::quick_sort_randomized_with;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Quicksort
// ============================================================================

#[test]
fn test_quick_sort_keeps_duplicates() -> TestResult {
    let mut values = vec![5, 3, 5, 1, 3, 3, 9, 0, 5];
    let mut expected = values.clone();
    expected.sort_unstable();
    quick_sort(&mut values);
    ensure(values == expected, "Expected sorted output with duplicates")?;
    Ok(())
}

#[test]
fn test_quick_sort_edge_cases() -> TestResult {
    let mut empty: Vec<f64> = Vec::new();
    quick_sort(&mut empty);
    ensure(empty.is_empty(), "Expected empty input to stay empty")?;

    let mut single = vec![1.5];
    quick_sort_randomized(&mut single);
    ensure(single == vec![1.5], "Expected a single element to stay put")?;

    let mut descending: Vec<i32> = (0 .. 200).rev().collect();
    quick_sort(&mut descending);
    ensure(descending == (0 .. 200).collect::<Vec<_>>(), "Expected reversed input sorted")?;
    Ok(())
}

/// Stack for the degenerate-input worker; far below one frame per element.
const SHALLOW_STACK_BYTES: usize = 256 * 1024;

/// Length of the degenerate inputs.
const DEGENERATE_LEN: u32 = 10_000;

#[test]
fn test_quick_sort_degenerate_inputs_stay_shallow() -> TestResult {
    let worker = thread::Builder::new().stack_size(SHALLOW_STACK_BYTES).spawn(|| {
        let ascending: Vec<f64> = (0 .. DEGENERATE_LEN).map(f64::from).collect();
        let mut sorted = ascending.clone();
        quick_sort(&mut sorted);
        let mut reversed: Vec<f64> = ascending.iter().rev().copied().collect();
        quick_sort(&mut reversed);
        let mut equal = vec![7_u32; ascending.len()];
        quick_sort(&mut equal);
        let mut equal_randomized = vec![7_u32; ascending.len()];
        quick_sort_randomized_with(&mut equal_randomized, &mut StdRng::seed_from_u64(3));
        sorted == ascending
            && reversed == ascending
            && equal.iter().all(|value| *value == 7)
            && equal_randomized.len() == ascending.len()
    })?;
    let sorted = worker.join().map_err(|_| "sort worker overflowed or panicked")?;
    ensure(sorted, "Expected sorted, reversed, and all-equal inputs to sort")?;
    Ok(())
}

#[test]
fn test_randomized_sort_is_seedable() -> TestResult {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<u32> = (0 .. 500).map(|value| (value * 7_919) % 503).collect();
    let mut expected = values.clone();
    expected.sort_unstable();
    quick_sort_randomized_with(&mut values, &mut rng);
    ensure(values == expected, "Expected seeded randomized sort to order the input")?;
    Ok(())
}

// ============================================================================
// SECTION: Binary Search
// ============================================================================

#[test]
fn test_binary_search_hits_and_misses() -> TestResult {
    let values = [1.0, 2.5, 4.0, 8.0, 16.0];
    for (index, value) in values.iter().enumerate() {
        ensure(binary_search(&values, value) == Some(index), format!("Expected {value} at {index}"))?;
    }
    ensure(binary_search(&values, &-3.0).is_none(), "Expected a value below the range to miss")?;
    ensure(binary_search(&values, &5.0).is_none(), "Expected an interior gap to miss")?;
    ensure(binary_search(&values, &f64::NAN).is_none(), "Expected NaN to miss")?;
    ensure(binary_search::<f64>(&[], &1.0).is_none(), "Expected empty input to miss")?;
    Ok(())
}

// ============================================================================
// SECTION: Generated Inputs
// ============================================================================

proptest! {
    #[test]
    fn quick_sorts_match_std_sort(values in prop::collection::vec(-1.0e6_f64 .. 1.0e6, 0 .. 256)) {
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);

        let mut fixed = values.clone();
        quick_sort(&mut fixed);
        prop_assert_eq!(&fixed, &expected);

        let mut randomized = values;
        quick_sort_randomized(&mut randomized);
        prop_assert_eq!(&randomized, &expected);
    }

    #[test]
    fn binary_search_finds_every_distinct_key(mut values in prop::collection::vec(any::<i32>(), 1 .. 128)) {
        values.sort_unstable();
        values.dedup();
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(binary_search(&values, value), Some(index));
        }
    }
}
