//! Ear-clipping triangulation of simple, hole-free polygons

use crate::mesh::{
    is_convex, point_in_triangle, signed_area, Point2D, Ring, Triangle, CONVEXITY_EPSILON,
};

/// Upper bound on ear searches for a single polygon
pub const MAX_ITERATIONS: usize = 10_000;

/// Triangulate a ring
///
/// Returns `N - 2` triangles for a simple polygon of `N` vertices, indexed
/// into the ring's own vertex order. See [`triangulate_points`].
pub fn triangulate(ring: &Ring) -> Vec<Triangle> {
    triangulate_points(ring.points())
}

/// Triangulate an implicitly closed outline given as a point slice
///
/// Triangles are emitted in clipping order, each wound counter-clockwise.
/// Degenerate outlines (fewer than 3 points, zero area) produce no
/// triangles. The zero-area cut-off scales with the square of the outline's
/// extent, so tiny but valid outlines still triangulate; the convexity test
/// keeps its absolute [`CONVEXITY_EPSILON`], so corners whose cross product
/// falls below it are never clipped as ears. When a full scan finds no ear the first live vertex is dropped
/// so the search always terminates; triangles near such a degeneracy may not
/// cover the outline exactly.
pub fn triangulate_points(points: &[Point2D]) -> Vec<Triangle> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let area = signed_area(points);
    if area.abs() <= degenerate_area_tolerance(points) {
        log::debug!("Skipping zero-area outline with {} vertices", n);
        return Vec::new();
    }

    // Live vertices as original indices, ordered counter-clockwise
    let mut live: Vec<usize> = (0..n).collect();
    if area < 0.0 {
        live.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut iterations = 0;

    while live.len() > 3 && iterations < MAX_ITERATIONS {
        iterations += 1;

        match find_ear(points, &live) {
            Some(position) => {
                let m = live.len();
                triangles.push([
                    live[(position + m - 1) % m],
                    live[position],
                    live[(position + 1) % m],
                ]);
                live.remove(position);
            }
            None => {
                log::debug!(
                    "No ear among {} live vertices; dropping vertex {}",
                    live.len(),
                    live[0]
                );
                live.remove(0);
            }
        }
    }

    if live.len() == 3 {
        triangles.push([live[0], live[1], live[2]]);
    }

    triangles
}

/// Area at or below which an outline counts as zero-area
fn degenerate_area_tolerance(points: &[Point2D]) -> f64 {
    let (min, max) = points
        .iter()
        .fold((points[0], points[0]), |(min, max), p| (min.inf(p), max.sup(p)));
    let extent = (max - min).amax();

    CONVEXITY_EPSILON * extent * extent
}

/// Position in `live` of the first valid ear tip
fn find_ear(points: &[Point2D], live: &[usize]) -> Option<usize> {
    let m = live.len();

    (0..m).find(|&position| {
        let prev = live[(position + m - 1) % m];
        let curr = live[position];
        let next = live[(position + 1) % m];
        let (a, b, c) = (&points[prev], &points[curr], &points[next]);

        if !is_convex(a, b, c) {
            return false;
        }

        !live
            .iter()
            .filter(|&&idx| idx != prev && idx != curr && idx != next)
            .any(|&idx| point_in_triangle(&points[idx], a, b, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::triangle_area;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::new(coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()).unwrap()
    }

    fn covered_area(ring: &Ring, triangles: &[Triangle]) -> f64 {
        let p = ring.points();
        triangles
            .iter()
            .map(|&[a, b, c]| triangle_area(&p[a], &p[b], &p[c]).abs())
            .sum()
    }

    fn assert_valid(ring: &Ring, triangles: &[Triangle]) {
        assert_eq!(triangles.len(), ring.len() - 2);
        for tri in triangles {
            let distinct: HashSet<_> = tri.iter().collect();
            assert_eq!(distinct.len(), 3, "indices must be distinct: {:?}", tri);
            assert!(tri.iter().all(|&i| i < ring.len()));
        }
        assert_relative_eq!(
            covered_area(ring, triangles),
            ring.signed_area().abs(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_triangle() {
        let r = ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(triangulate(&r), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_square() {
        let r = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let triangles = triangulate(&r);

        assert_valid(&r, &triangles);
        assert_relative_eq!(covered_area(&r, &triangles), 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_clockwise_indices_refer_to_input() {
        let r = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let triangles = triangulate(&r);

        assert_valid(&r, &triangles);
        let p = r.points();
        for &[a, b, c] in &triangles {
            assert!(triangle_area(&p[a], &p[b], &p[c]) > 0.0);
        }
    }

    #[test]
    fn test_concave_arrow() {
        // Reflex vertex at (5, 4)
        let r = ring(&[
            (0.0, 0.0),
            (5.0, 4.0),
            (10.0, 0.0),
            (5.0, 10.0),
        ]);
        let triangles = triangulate(&r);

        assert_valid(&r, &triangles);
        // The reflex vertex never forms an ear tip
        assert!(triangles.iter().all(|tri| tri[1] != 1));
    }

    #[test]
    fn test_l_shape() {
        let r = ring(&[
            (0.0, 0.0),
            (20.0, 0.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 20.0),
            (0.0, 20.0),
        ]);
        let triangles = triangulate(&r);

        assert_valid(&r, &triangles);
        assert_relative_eq!(covered_area(&r, &triangles), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_vertex_on_edge() {
        let r = ring(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let triangles = triangulate(&r);

        assert_valid(&r, &triangles);
    }

    #[test]
    fn test_reversal_preserves_coverage() {
        let coords = [
            (0.0, 0.0),
            (8.0, 1.0),
            (6.0, 4.0),
            (9.0, 9.0),
            (2.0, 7.0),
            (3.0, 4.0),
        ];
        let forward = ring(&coords);
        let backward = forward.reversed();

        let tf = triangulate(&forward);
        let tb = triangulate(&backward);

        assert_valid(&forward, &tf);
        assert_valid(&backward, &tb);
        assert_relative_eq!(
            covered_area(&forward, &tf),
            covered_area(&backward, &tb),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_area_is_empty() {
        let r = ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(triangulate(&r).is_empty());
    }

    #[test]
    fn test_tiny_triangle_is_kept() {
        // Area 5e-13, below the convexity epsilon in absolute terms
        let r = ring(&[(0.0, 0.0), (1e-6, 0.0), (0.0, 1e-6)]);
        assert_eq!(triangulate(&r), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_large_collinear_outline_is_empty() {
        let r = ring(&[(1.0e6, 1.0e6), (2.0e6, 2.0e6), (5.0e6, 5.0e6), (3.0e6, 3.0e6)]);
        assert!(triangulate(&r).is_empty());
    }

    #[test]
    fn test_too_few_points_is_empty() {
        assert!(triangulate_points(&[]).is_empty());
        assert!(triangulate_points(&[Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_self_intersecting_terminates() {
        // Bow-tie with cancelling lobes: only termination and index validity are checked
        let r = ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        let triangles = triangulate(&r);

        assert!(triangles.len() <= r.len() - 2);
        assert!(triangles.iter().flatten().all(|&i| i < r.len()));
    }

    #[test]
    fn test_spike_fallback_terminates() {
        // Zero-width spike leaves no ear once the body is clipped
        let r = ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (20.0, 5.0),
            (10.0, 5.0 + 1e-14),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let triangles = triangulate(&r);

        assert!(triangles.len() <= r.len() - 2);
        assert!(triangles.iter().flatten().all(|&i| i < r.len()));
    }
}
