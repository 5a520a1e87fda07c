// crates/algolab-core/src/dynamic.rs
// ============================================================================
// Module: Dynamic Programming
// Description: Subset sum via a reachability table.
// Purpose: Pick the subset whose total comes closest to a target from below.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`subset_sum`] is the 0/1 knapsack where each element's weight equals its
//! value. A table indexed by partial sum records the element that first made
//! that sum reachable; walking the table back from the best sum recovers the
//! chosen elements. Time is `O(n * target)`, space `O(target)`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest target accepted by [`subset_sum`].
pub const MAX_SUBSET_SUM_TARGET: u64 = 1 << 22;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Errors raised by dynamic programming routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicError {
    /// The reachability table would exceed its size limit.
    #[error("target {target} exceeds the maximum of {max}")]
    TargetTooLarge {
        /// Requested target.
        target: u64,
        /// Largest accepted target.
        max: u64,
    },
}

/// Outcome of a subset-sum search.
///
/// # Invariants
/// - `total == elements.iter().sum()` and `total <= target`.
/// - `indices` are ascending and `elements[i] == values[indices[i]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetSum {
    /// Positions of the chosen elements in the input.
    pub indices: Vec<usize>,
    /// The chosen elements, in input order.
    pub elements: Vec<u64>,
    /// Sum of the chosen elements.
    pub total: u64,
}

// ============================================================================
// SECTION: Subset Sum
// ============================================================================

/// Chooses the subset of `values` with the largest total not above `target`.
///
/// Zero-valued elements are never chosen.
///
/// # Errors
///
/// Returns [`DynamicError::TargetTooLarge`] when `target` exceeds
/// [`MAX_SUBSET_SUM_TARGET`].
pub fn subset_sum(values: &[u64], target: u64) -> Result<SubsetSum, DynamicError> {
    let too_large = DynamicError::TargetTooLarge {
        target,
        max: MAX_SUBSET_SUM_TARGET,
    };
    if target > MAX_SUBSET_SUM_TARGET {
        return Err(too_large);
    }
    let capacity = usize::try_from(target).map_err(|_| too_large)?;

    // reached_by[s] is the element that first made sum `s` reachable.
    let mut reached_by: Vec<Option<usize>> = vec![None; capacity + 1];
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        let Ok(weight) = usize::try_from(*value) else {
            continue;
        };
        if weight == 0 || weight > capacity {
            continue;
        }
        for sum in (weight ..= capacity).rev() {
            let remainder = sum - weight;
            let reachable = remainder == 0 || reached_by[remainder].is_some();
            if reachable && reached_by[sum].is_none() {
                reached_by[sum] = Some(index);
                best = best.max(sum);
            }
        }
    }

    let mut indices = Vec::new();
    let mut sum = best;
    while sum > 0 {
        let Some(index) = reached_by[sum] else {
            break;
        };
        indices.push(index);
        sum -= usize::try_from(values[index]).unwrap_or(sum);
    }
    indices.reverse();

    let elements: Vec<u64> = indices.iter().map(|index| values[*index]).collect();
    Ok(SubsetSum {
        total: elements.iter().sum(),
        indices,
        elements,
    })
}
