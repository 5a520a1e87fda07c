// crates/algolab-core/src/geometry.rs
// ============================================================================
// Module: Plane Geometry
// Description: 2-D points and the closest-pair search.
// Purpose: Find the two nearest points of a set in O(n log n).
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`closest_pair`] sorts the points by `x` once and by `y` once, then
//! recurses on the left and right halves of the `x` order. After both halves
//! report their best distance `delta`, points within `delta` of the split
//! line are scanned in `y` order; each needs comparing only with the handful
//! of strip points that follow it within `delta` vertically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by geometric searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A pair needs at least two points.
    #[error("closest pair needs at least two points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },
}

// ============================================================================
// SECTION: Points
// ============================================================================

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Orders points by `x`.
    #[must_use]
    pub fn compare_x(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x)
    }

    /// Orders points by `y`.
    #[must_use]
    pub fn compare_y(&self, other: &Self) -> Ordering {
        self.y.total_cmp(&other.y)
    }
}

/// Two points and the distance between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPair {
    /// First point.
    pub first: Point2D,
    /// Second point.
    pub second: Point2D,
}

impl PointPair {
    /// Distance between the two points.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.first.distance(&self.second)
    }
}

// ============================================================================
// SECTION: Closest Pair
// ============================================================================

/// Closest pair among a small slice by comparing every pair.
fn brute_force(points: &[Point2D]) -> PointPair {
    let mut best = PointPair {
        first: points[0],
        second: points[1],
    };
    let mut best_distance = best.distance();
    for (index, first) in points.iter().enumerate() {
        for second in &points[index + 1 ..] {
            let distance = first.distance(second);
            if distance < best_distance {
                best_distance = distance;
                best = PointPair {
                    first: *first,
                    second: *second,
                };
            }
        }
    }
    best
}

/// Recursive search. `by_x` and `by_y` hold the same points in two orders.
fn closest_recursive(by_x: &[Point2D], by_y: &[Point2D]) -> PointPair {
    if by_x.len() <= 3 {
        return brute_force(by_x);
    }
    let mid = by_x.len() / 2;
    let split = by_x[mid];
    let (left_x, right_x) = by_x.split_at(mid);

    // Points equal to the split point are divided the same way `by_x` divides them.
    let position = |point: &Point2D| point.compare_x(&split).then_with(|| point.compare_y(&split));
    let mut equal_left = left_x.iter().filter(|point| position(point) == Ordering::Equal).count();
    let mut left_y = Vec::with_capacity(left_x.len());
    let mut right_y = Vec::with_capacity(right_x.len());
    for point in by_y {
        let goes_left = match position(point) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal if equal_left > 0 => {
                equal_left -= 1;
                true
            }
            Ordering::Equal => false,
        };
        if goes_left {
            left_y.push(*point);
        } else {
            right_y.push(*point);
        }
    }

    let left = closest_recursive(left_x, &left_y);
    let right = closest_recursive(right_x, &right_y);
    let mut best = if left.distance() <= right.distance() { left } else { right };
    let mut delta = best.distance();

    let strip: Vec<Point2D> =
        by_y.iter().filter(|point| (point.x - split.x).abs() < delta).copied().collect();
    for (index, point) in strip.iter().enumerate() {
        for other in &strip[index + 1 ..] {
            if other.y - point.y >= delta {
                break;
            }
            let distance = point.distance(other);
            if distance < delta {
                delta = distance;
                best = PointPair {
                    first: *point,
                    second: *other,
                };
            }
        }
    }
    best
}

/// Finds the two closest points of `points`.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewPoints`] for fewer than two points and
/// [`GeometryError::NonFiniteCoordinate`] when a coordinate is NaN or infinite.
pub fn closest_pair(points: &[Point2D]) -> Result<PointPair, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|point| !point.x.is_finite() || !point.y.is_finite())
    {
        return Err(GeometryError::NonFiniteCoordinate {
            index,
        });
    }
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| a.compare_x(b).then_with(|| a.compare_y(b)));
    let mut by_y = points.to_vec();
    by_y.sort_by(Point2D::compare_y);
    Ok(closest_recursive(&by_x, &by_y))
}
