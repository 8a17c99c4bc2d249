//! Core 2-D shape data structures

use crate::mesh::geometry::{signed_area, triangle_area};
use nalgebra::Point2;

/// 2D point type
pub type Point2D = Point2<f64>;

/// Three 0-based indices into a shape's vertex list
pub type Triangle = [usize; 3];

/// Closed polygon outline
///
/// The last vertex connects back to the first; the closing vertex is never
/// stored. A ring always holds at least 3 points and never two identical
/// consecutive points (wrap-around included).
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2D>,
}

impl Ring {
    /// Build a ring from an outline, collapsing consecutive duplicates
    ///
    /// Returns `None` when fewer than 3 distinct points remain.
    pub fn new(mut points: Vec<Point2D>) -> Option<Self> {
        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return None;
        }

        Some(Self { points })
    }

    /// Vertices in ring order
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the ring holds no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace signed area (positive for counter-clockwise winding)
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Same outline traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

/// Named polygon outline as read from a drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Identifier, unique within a built collection
    pub name: String,

    /// Outline of the shape
    pub vertices: Ring,
}

impl Shape {
    /// Create a new shape
    pub fn new(name: impl Into<String>, vertices: Ring) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }
}

/// Shape together with the triangles covering it
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    /// Source shape
    pub shape: Shape,

    /// Triangles in the order ears were clipped
    pub triangles: Vec<Triangle>,
}

impl ShapeMesh {
    /// Shape name
    pub fn name(&self) -> &str {
        &self.shape.name
    }

    /// Shape vertices
    pub fn vertices(&self) -> &[Point2D] {
        self.shape.vertices.points()
    }

    pub fn num_vertices(&self) -> usize {
        self.shape.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Zero-triangle meshes come from degenerate outlines and are skipped by exporters
    pub fn is_renderable(&self) -> bool {
        !self.triangles.is_empty()
    }

    /// Absolute area enclosed by the outline
    pub fn outline_area(&self) -> f64 {
        self.shape.vertices.signed_area().abs()
    }

    /// Sum of the absolute triangle areas
    pub fn triangulated_area(&self) -> f64 {
        let points = self.vertices();
        self.triangles
            .iter()
            .map(|&[a, b, c]| triangle_area(&points[a], &points[b], &points[c]).abs())
            .sum()
    }
}
