//! Orientation and containment tests on 2-D points

use crate::mesh::types::Point2D;

/// Minimum cross product for a turn to count as convex
///
/// Collinear and axis-aligned triples produce exact zeros, which must not be
/// classified as convex.
pub const CONVEXITY_EPSILON: f64 = 1e-12;

/// Shoelace signed area of a closed outline
/// Positive for counter-clockwise winding, negative for clockwise
pub fn signed_area(points: &[Point2D]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let twice_area: f64 = (0..n)
        .map(|i| {
            let p0 = &points[i];
            let p1 = &points[(i + 1) % n];
            p0.x * p1.y - p0.y * p1.x
        })
        .sum();

    0.5 * twice_area
}

/// Signed area of a single triangle
pub fn triangle_area(a: &Point2D, b: &Point2D, c: &Point2D) -> f64 {
    0.5 * ((b - a).perp(&(c - a)))
}

/// True iff `a -> b -> c` turns left at `b`
pub fn is_convex(a: &Point2D, b: &Point2D, c: &Point2D) -> bool {
    (b - a).perp(&(c - b)) > CONVEXITY_EPSILON
}

/// Barycentric sign test; points on an edge or corner count as inside
pub fn point_in_triangle(p: &Point2D, a: &Point2D, b: &Point2D, c: &Point2D) -> bool {
    let s1 = edge_sign(p, a, b) < 0.0;
    let s2 = edge_sign(p, b, c) < 0.0;
    let s3 = edge_sign(p, c, a) < 0.0;

    s1 == s2 && s2 == s3
}

fn edge_sign(p1: &Point2D, p2: &Point2D, p3: &Point2D) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
