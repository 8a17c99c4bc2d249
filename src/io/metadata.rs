//! JSON build summary export

use crate::error::{MesherError, Result};
use crate::mesh::{MeshStatistics, ShapeMesh};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of one build: where the shapes came from and what was produced
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// Source document
    pub input_file: String,

    /// Timestamp when the build was performed
    pub timestamp: String,

    /// Totals over all shapes
    pub totals: BuildTotals,

    /// One entry per shape, in output order
    pub shapes: Vec<ShapeSummary>,
}

/// Totals over all shapes of a build
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildTotals {
    pub num_shapes: usize,
    pub num_vertices: usize,
    pub num_triangles: usize,
    pub num_degenerate: usize,
    pub total_area: f64,
}

/// Per-shape counts and areas
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub name: String,
    pub vertices: usize,
    pub triangles: usize,
    pub renderable: bool,
    pub outline_area: f64,
    pub triangulated_area: f64,
}

impl BuildMetadata {
    /// Summarize a set of built meshes
    pub fn new(input_file: String, meshes: &[ShapeMesh]) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339();
        let stats = MeshStatistics::from_meshes(meshes);

        Self {
            input_file,
            timestamp,
            totals: BuildTotals {
                num_shapes: stats.num_shapes,
                num_vertices: stats.num_vertices,
                num_triangles: stats.num_triangles,
                num_degenerate: stats.num_degenerate,
                total_area: stats.total_area,
            },
            shapes: meshes
                .iter()
                .map(|mesh| ShapeSummary {
                    name: mesh.name().to_string(),
                    vertices: mesh.num_vertices(),
                    triangles: mesh.num_triangles(),
                    renderable: mesh.is_renderable(),
                    outline_area: mesh.outline_area(),
                    triangulated_area: mesh.triangulated_area(),
                })
                .collect(),
        }
    }

    /// Export metadata to JSON file
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, self).map_err(|e| {
            MesherError::ConfigError(format!("Failed to write JSON metadata: {}", e))
        })?;
        log::info!("Wrote {:?}", path.as_ref());
        Ok(())
    }
}
