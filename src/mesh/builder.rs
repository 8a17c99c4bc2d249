//! Shape collection builder: named outlines to named triangle meshes

use crate::error::{MesherError, Result};
use crate::mesh::types::{Shape, ShapeMesh};
use crate::triangulate::triangulate;
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Hands out unique names in request order
///
/// The first request for a name gets it unchanged; later requests get
/// `name_1`, `name_2`, ... skipping any candidate already handed out.
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base` or the first free suffixed variant of it
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while self.taken.contains(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Rename shapes so every name in the collection is unique
pub fn disambiguate_names(shapes: &mut [Shape]) {
    let mut registry = NameRegistry::new();
    for shape in shapes.iter_mut() {
        let unique = registry.claim(&shape.name);
        if unique != shape.name {
            log::debug!("Renaming duplicate shape '{}' to '{}'", shape.name, unique);
            shape.name = unique;
        }
    }
}

/// Triangulate every shape of a collection
///
/// Names are made unique first (deterministic by input order), then each
/// shape is triangulated independently. Output order matches input order.
/// Shapes whose outline is degenerate are kept with zero triangles.
pub fn build_meshes(mut shapes: Vec<Shape>) -> Result<Vec<ShapeMesh>> {
    if shapes.is_empty() {
        return Err(MesherError::EmptyShapeCollection);
    }

    log::info!("Triangulating {} shapes", shapes.len());
    disambiguate_names(&mut shapes);

    // Threshold for parallelization (below this, overhead isn't worth it)
    const PARALLEL_THRESHOLD: usize = 64;

    #[cfg(feature = "parallel")]
    let meshes: Vec<ShapeMesh> = if shapes.len() >= PARALLEL_THRESHOLD {
        shapes.into_par_iter().map(mesh_shape).collect()
    } else {
        shapes.into_iter().map(mesh_shape).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let meshes: Vec<ShapeMesh> = shapes.into_iter().map(mesh_shape).collect();

    let stats = MeshStatistics::from_meshes(&meshes);
    log::info!(
        "Built {} meshes: {} vertices, {} triangles, {} not renderable",
        stats.num_shapes,
        stats.num_vertices,
        stats.num_triangles,
        stats.num_degenerate
    );

    Ok(meshes)
}

fn mesh_shape(shape: Shape) -> ShapeMesh {
    let triangles = triangulate(&shape.vertices);
    if triangles.is_empty() {
        log::debug!("Shape '{}' produced no triangles", shape.name);
    }
    ShapeMesh { shape, triangles }
}

/// Aggregate counts over a built collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshStatistics {
    pub num_shapes: usize,
    pub num_vertices: usize,
    pub num_triangles: usize,
    /// Shapes that produced no triangles
    pub num_degenerate: usize,
    /// Sum of triangulated areas
    pub total_area: f64,
}

impl MeshStatistics {
    /// Compute statistics for a set of meshes
    pub fn from_meshes(meshes: &[ShapeMesh]) -> Self {
        meshes.iter().fold(Self::default(), |mut stats, mesh| {
            stats.num_shapes += 1;
            stats.num_vertices += mesh.num_vertices();
            stats.num_triangles += mesh.num_triangles();
            if !mesh.is_renderable() {
                stats.num_degenerate += 1;
            }
            stats.total_area += mesh.triangulated_area();
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::types::{Point2D, Ring};
    use approx::assert_relative_eq;

    fn square(name: &str, offset: f64) -> Shape {
        let ring = Ring::new(vec![
            Point2D::new(offset, 0.0),
            Point2D::new(offset + 10.0, 0.0),
            Point2D::new(offset + 10.0, 10.0),
            Point2D::new(offset, 10.0),
        ])
        .unwrap();
        Shape::new(name, ring)
    }

    #[test]
    fn test_duplicate_names_get_suffix() {
        let meshes = build_meshes(vec![square("leaf", 0.0), square("leaf", 20.0)]).unwrap();

        assert_eq!(meshes[0].name(), "leaf");
        assert_eq!(meshes[1].name(), "leaf_1");
        assert_eq!(meshes[1].vertices()[0], Point2D::new(20.0, 0.0));
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        let mut shapes = vec![
            square("leaf", 0.0),
            square("leaf_1", 0.0),
            square("leaf", 0.0),
            square("leaf", 0.0),
        ];
        disambiguate_names(&mut shapes);

        let names: Vec<_> = shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["leaf", "leaf_1", "leaf_2", "leaf_3"]);
    }

    #[test]
    fn test_empty_collection_is_error() {
        assert!(matches!(
            build_meshes(Vec::new()),
            Err(MesherError::EmptyShapeCollection)
        ));
    }

    #[test]
    fn test_degenerate_shape_kept_without_triangles() {
        let sliver = Shape::new(
            "sliver",
            Ring::new(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(2.0, 2.0),
            ])
            .unwrap(),
        );
        let meshes = build_meshes(vec![square("body", 0.0), sliver]).unwrap();

        assert_eq!(meshes.len(), 2);
        assert!(meshes[0].is_renderable());
        assert!(!meshes[1].is_renderable());

        let stats = MeshStatistics::from_meshes(&meshes);
        assert_eq!(stats.num_shapes, 2);
        assert_eq!(stats.num_vertices, 7);
        assert_eq!(stats.num_triangles, 2);
        assert_eq!(stats.num_degenerate, 1);
        assert_relative_eq!(stats.total_area, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_order_preserved_for_large_collections() {
        let shapes: Vec<_> = (0..200)
            .map(|i| square(&format!("s{}", i), i as f64 * 20.0))
            .collect();
        let meshes = build_meshes(shapes).unwrap();

        for (i, mesh) in meshes.iter().enumerate() {
            assert_eq!(mesh.name(), format!("s{}", i));
            assert_eq!(mesh.num_triangles(), 2);
        }
    }
}
