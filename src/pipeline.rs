//! End-to-end build: read shapes, triangulate, write the configured exports

use crate::config::BuildConfig;
use crate::error::{MesherError, Result};
use crate::io::{self, BuildMetadata};
use crate::mesh::{build_meshes, MeshStatistics, Shape, ShapeMesh};
use crate::path::parse_point_list;
use std::path::{Path, PathBuf};

/// Outcome of a build
#[derive(Debug)]
pub struct BuildReport {
    /// Triangulated shapes, in document order
    pub meshes: Vec<ShapeMesh>,

    /// Totals over `meshes`
    pub statistics: MeshStatistics,

    /// Files written, in write order
    pub written: Vec<PathBuf>,
}

/// Run a build described by `config`
pub fn run(config: &BuildConfig) -> Result<BuildReport> {
    log::info!("Input:         {}", config.input_file);
    log::info!("Output prefix: {}", config.output_prefix);

    let shapes = io::read_shapes(Path::new(&config.input_file), config.skip_unfilled)?;
    for shape in &shapes {
        log::info!("  {}: {} verts", shape.name, shape.vertices.len());
    }

    let meshes = build_meshes(shapes)?;
    let statistics = MeshStatistics::from_meshes(&meshes);
    let written = write_exports(config, &meshes)?;

    Ok(BuildReport {
        meshes,
        statistics,
        written,
    })
}

/// Triangulate one literal point list as a named shape
///
/// A list that collapses to fewer than 3 distinct points is
/// `MalformedPointList`.
pub fn mesh_point_list(name: &str, points: &str) -> Result<ShapeMesh> {
    let ring = parse_point_list(points)
        .map_err(|e| e.in_shape(name))?
        .ok_or_else(|| {
            MesherError::MalformedPointList("fewer than 3 distinct points".to_string())
                .in_shape(name)
        })?;

    build_meshes(vec![Shape::new(name, ring)])?
        .pop()
        .ok_or(MesherError::EmptyShapeCollection)
}

/// Write every export enabled in `config`
pub fn write_exports(config: &BuildConfig, meshes: &[ShapeMesh]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if !config.has_exports() {
        log::warn!("All exports are disabled; nothing written");
        return Ok(written);
    }

    if let Some(parent) = Path::new(&config.output_prefix).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if config.export_json {
        let path = config.output_path("_polylines.json");
        io::write_json_meshes(meshes, &path)?;
        written.push(path);
    }

    if config.export_obj {
        let path = config.output_path("_mesh.obj");
        io::write_obj_file(meshes, &path)?;
        written.push(path);
    }

    if config.export_vtu {
        let path = config.output_path(".vtu");
        io::write_meshes_to_vtu(meshes, &path, config.vtk_version)?;
        written.push(path);
    }

    if config.export_summary {
        let path = config.output_path("_summary.json");
        BuildMetadata::new(config.input_file.clone(), meshes).export(&path)?;
        written.push(path);
    }

    Ok(written)
}
