// crates/algolab-core/src/sorting.rs
// ============================================================================
// Module: Sorting and Search
// Description: Quicksort (fixed and random pivot) and recursive binary search.
// Purpose: Divide-and-conquer ordering primitives over slices.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Quicksort partitions in place around a pivot, recurses into the shorter
//! side and loops on the longer one, so stack depth stays `O(log n)` even
//! when time degrades. The fixed variant always pivots on the first element
//! and takes `O(n^2)` time on sorted input; the randomized variant swaps a
//! uniformly chosen element into the pivot slot first. Runs of equal values
//! are quadratic for both. Binary search halves a sorted
//! slice recursively.
//!
//! Elements only need [`PartialOrd`]. Incomparable values (such as `NaN`)
//! are treated as "not less than" the pivot, so sorting never panics but the
//! resulting order is unspecified for them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use rand::Rng;

// ============================================================================
// SECTION: Partition
// ============================================================================

/// Partitions `values` around `values[0]` and returns the pivot's final index.
///
/// Afterwards every element before the pivot is less than it and every
/// element after it is not less than it.
pub(crate) fn partition<T: PartialOrd>(values: &mut [T]) -> usize {
    let mut boundary = 0;
    for index in 1 .. values.len() {
        if values[index] < values[0] {
            boundary += 1;
            values.swap(boundary, index);
        }
    }
    values.swap(0, boundary);
    boundary
}

/// Splits a partitioned range around `pivot`, dropping the pivot itself.
///
/// Returns the two sides ordered `(shorter, longer)`.
fn split_around<T>(values: &mut [T], pivot: usize) -> (&mut [T], &mut [T]) {
    let (left, right) = values.split_at_mut(pivot);
    let right = &mut right[1 ..];
    if left.len() <= right.len() { (left, right) } else { (right, left) }
}

// ============================================================================
// SECTION: Quicksort
// ============================================================================

/// Sorts `values` in place using the first element of each range as pivot.
pub fn quick_sort<T: PartialOrd>(values: &mut [T]) {
    let mut values = values;
    while values.len() > 1 {
        let pivot = partition(values);
        let (smaller, larger) = split_around(std::mem::take(&mut values), pivot);
        quick_sort(smaller);
        values = larger;
    }
}

/// Sorts `values` in place with a uniformly random pivot per range.
pub fn quick_sort_randomized<T: PartialOrd>(values: &mut [T]) {
    quick_sort_randomized_with(values, &mut rand::thread_rng());
}

/// Same as [`quick_sort_randomized`] with a caller-supplied generator.
pub fn quick_sort_randomized_with<T: PartialOrd, R: Rng>(values: &mut [T], rng: &mut R) {
    let mut values = values;
    while values.len() > 1 {
        let chosen = rng.gen_range(0 .. values.len());
        values.swap(0, chosen);
        let pivot = partition(values);
        let (smaller, larger) = split_around(std::mem::take(&mut values), pivot);
        quick_sort_randomized_with(smaller, rng);
        values = larger;
    }
}

// ============================================================================
// SECTION: Binary Search
// ============================================================================

/// Finds `key` in the ascending slice `values`.
///
/// Returns the index of a matching element, or `None` when absent.
#[must_use]
pub fn binary_search<T: PartialOrd>(values: &[T], key: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    match values[mid].partial_cmp(key)? {
        Ordering::Equal => Some(mid),
        Ordering::Greater => binary_search(&values[.. mid], key),
        Ordering::Less => binary_search(&values[mid + 1 ..], key).map(|index| mid + 1 + index),
    }
}
