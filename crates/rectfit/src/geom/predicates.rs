use nalgebra::Vector2;

/// Signed doubled area of the triangle `(p0, p1, p)`.
///
/// Positive when `p` lies left of the directed line `p0 → p1` (y-up frame),
/// negative when right, zero when collinear.
#[inline]
pub fn cross(p0: Vector2<f64>, p1: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p1 - p0;
    let r = p - p0;
    d.x * r.y - d.y * r.x
}

/// Proper crossing test for segments `p0p1` and `q0q1`.
///
/// Both endpoint pairs must lie strictly on opposite sides of the other
/// segment's line. Touching, shared endpoints and collinear overlap all count
/// as non-intersecting.
#[inline]
pub fn segments_intersect(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    q0: Vector2<f64>,
    q1: Vector2<f64>,
) -> bool {
    let d0 = cross(q0, q1, p0);
    let d1 = cross(q0, q1, p1);
    let d2 = cross(p0, p1, q0);
    let d3 = cross(p0, p1, q1);
    d0 * d1 < 0.0 && d2 * d3 < 0.0
}

/// Unit normal of segment `p0p1`, signed to point from `p` toward the line.
///
/// Pre: none. A zero-length segment returns the zero vector.
/// Post: for `p` exactly on the line the projection offset vanishes and the
/// right-hand normal `(d.y, -d.x)/|d|` is returned.
pub fn perpendicular_side(p0: Vector2<f64>, p1: Vector2<f64>, p: Vector2<f64>) -> Vector2<f64> {
    let d = p1 - p0;
    let d_sq = d.norm_squared();
    if d_sq == 0.0 {
        return Vector2::zeros();
    }
    let t = (p - p0).dot(&d) / d_sq;
    let foot = p0 + d * t;
    let to_line = foot - p;
    let left = Vector2::new(-d.y, d.x) / d_sq.sqrt();
    if to_line.dot(&left) > 0.0 {
        left
    } else {
        -left
    }
}

/// Unit right-hand normal of the directed edge `p0 → p1`.
///
/// For a canonical (clockwise) polygon this points away from the interior.
/// Zero-length edges give the zero vector.
#[inline]
pub fn exterior_normal(p0: Vector2<f64>, p1: Vector2<f64>) -> Vector2<f64> {
    let d = p1 - p0;
    let n = Vector2::new(d.y, -d.x);
    let len = n.norm();
    if len == 0.0 {
        Vector2::zeros()
    } else {
        n / len
    }
}
