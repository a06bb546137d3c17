use std::borrow::Cow;

use nalgebra::Vector2;

use super::predicates::segments_intersect;
use crate::error::RectError;

/// Shoelace sum `Σ (x[i+1] - x[i]) (y[i+1] + y[i])` over the closed polygon.
#[inline]
pub fn shoelace_sum(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let cur = points[i];
            let next = points[(i + 1) % n];
            (next.x - cur.x) * (next.y + cur.y)
        })
        .sum()
}

/// Signed area, positive for clockwise (canonical) polygons.
#[inline]
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    -0.5 * shoelace_sum(points)
}

/// True iff the shoelace sum is negative.
///
/// Screen (y-down) reading: `(0,0),(0,1),(1,1),(1,0)` is counter-clockwise,
/// its reverse is clockwise. Zero-area inputs are not clockwise.
pub fn is_clockwise(points: &[Vector2<f64>]) -> bool {
    shoelace_sum(points) < 0.0
}

/// Borrow `points` if already clockwise, otherwise return a reversed copy.
pub fn to_clockwise(points: &[Vector2<f64>]) -> Cow<'_, [Vector2<f64>]> {
    if is_clockwise(points) {
        Cow::Borrowed(points)
    } else {
        Cow::Owned(points.iter().rev().copied().collect())
    }
}

/// Check the simple-polygon rules and report the first violation.
///
/// Rules: at least three vertices, finite coordinates, and no two
/// non-adjacent edges crossing (`segments_intersect`). O(n²).
pub fn validate_polygon(points: &[Vector2<f64>]) -> Result<(), RectError> {
    let n = points.len();
    if n < 3 {
        return Err(RectError::polygon(format!(
            "need at least 3 vertices, got {n}"
        )));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(RectError::polygon(format!(
            "vertex {i} has a non-finite coordinate"
        )));
    }
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        for j in (i + 2)..n {
            // edge n-1 closes onto edge 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let q0 = points[j];
            let q1 = points[(j + 1) % n];
            if segments_intersect(p0, p1, q0, q1) {
                return Err(RectError::polygon(format!("edges {i} and {j} cross")));
            }
        }
    }
    Ok(())
}

/// Simple-polygon check; see `validate_polygon` for the rules.
#[inline]
pub fn is_valid_polygon(points: &[Vector2<f64>]) -> bool {
    validate_polygon(points).is_ok()
}
