// crates/algolab-core/src/array.rs
// ============================================================================
// Module: Maximum Sub-Array
// Description: Linear-scan and divide-and-conquer maximum sub-array search.
// Purpose: Locate the contiguous run with the largest sum.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Two ways to find the contiguous, non-empty run of an `i64` slice with the
//! largest sum: a single linear scan and the classic divide-and-conquer split
//! around the midpoint. Both return `None` for an empty slice and agree on
//! the maximum sum. Sums are accumulated in `i128` so no input overflows.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A contiguous run `values[start ..= end]` and its sum.
///
/// # Invariants
/// - `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubArray {
    /// First index of the run.
    pub start: usize,
    /// Last index of the run (inclusive).
    pub end: usize,
    /// Sum of the run.
    pub sum: i128,
}

impl SubArray {
    /// Number of elements in the run.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a run holds at least one element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// SECTION: Linear Scan
// ============================================================================

/// Finds the maximum sub-array with a single pass.
///
/// Ties keep the earliest run. For all-negative input the result is the
/// largest single element.
#[must_use]
pub fn max_sub_array(values: &[i64]) -> Option<SubArray> {
    let mut best: Option<SubArray> = None;
    let mut current_start = 0;
    let mut current_sum: i128 = 0;
    for (index, value) in values.iter().enumerate() {
        let value = i128::from(*value);
        if index == 0 || current_sum <= 0 {
            current_start = index;
            current_sum = value;
        } else {
            current_sum += value;
        }
        if best.is_none_or(|best| current_sum > best.sum) {
            best = Some(SubArray {
                start: current_start,
                end: index,
                sum: current_sum,
            });
        }
    }
    best
}

// ============================================================================
// SECTION: Divide and Conquer
// ============================================================================

/// Best run that crosses the boundary between `mid` and `mid + 1`.
fn max_crossing(values: &[i64], low: usize, mid: usize, high: usize) -> SubArray {
    let mut left_sum = i128::MIN;
    let mut left_index = mid;
    let mut sum: i128 = 0;
    for index in (low ..= mid).rev() {
        sum += i128::from(values[index]);
        if sum > left_sum {
            left_sum = sum;
            left_index = index;
        }
    }

    let mut right_sum = i128::MIN;
    let mut right_index = mid + 1;
    sum = 0;
    for (index, value) in values.iter().enumerate().take(high + 1).skip(mid + 1) {
        sum += i128::from(*value);
        if sum > right_sum {
            right_sum = sum;
            right_index = index;
        }
    }

    SubArray {
        start: left_index,
        end: right_index,
        sum: left_sum + right_sum,
    }
}

/// Recursive search over `values[low ..= high]`.
fn max_sub_array_between(values: &[i64], low: usize, high: usize) -> SubArray {
    if low == high {
        return SubArray {
            start: low,
            end: high,
            sum: i128::from(values[low]),
        };
    }
    let mid = low + (high - low) / 2;
    let left = max_sub_array_between(values, low, mid);
    let right = max_sub_array_between(values, mid + 1, high);
    let cross = max_crossing(values, low, mid, high);
    if left.sum >= right.sum && left.sum >= cross.sum {
        left
    } else if right.sum >= cross.sum {
        right
    } else {
        cross
    }
}

/// Finds the maximum sub-array by splitting around the midpoint.
#[must_use]
pub fn max_sub_array_divide(values: &[i64]) -> Option<SubArray> {
    let last = values.len().checked_sub(1)?;
    Some(max_sub_array_between(values, 0, last))
}
