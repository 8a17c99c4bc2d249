//! JSON shape documents (input) and triangulated polyline dumps (output)

use crate::error::{MesherError, Result};
use crate::mesh::{Point2D, Ring, Shape, ShapeMesh, Triangle};
use crate::path::{parse_point_list, rings_from_path_data};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One input shape; exactly one of `points`, `d` or `vertices` is expected
#[derive(Debug, Serialize, Deserialize)]
struct JsonShape {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    points: Option<String>,
    #[serde(default)]
    d: Option<String>,
    #[serde(default)]
    vertices: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonShapeDocument {
    shapes: Vec<JsonShape>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonShapeMesh {
    name: String,
    vertices: Vec<[f64; 2]>,
    triangles: Vec<Triangle>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMeshDocument {
    shapes: Vec<JsonShapeMesh>,
}

/// Read shapes from a JSON shape document
///
/// ```json
/// {"shapes": [
///   {"name": "blade", "points": "0,0 10,0 10,10"},
///   {"name": "vein", "d": "M0 20 H10 V30 H0 Z"},
///   {"name": "tip", "vertices": [[0, 0], [1, 0], [0, 1]]}
/// ]}
/// ```
///
/// A polylines dump written by [`write_json_meshes`] is also accepted; its
/// triangles are ignored.
pub fn read_json_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<Shape>> {
    let file = File::open(path.as_ref())?;

    let reader = BufReader::new(file);
    let document: JsonShapeDocument = serde_json::from_reader(reader).map_err(|e| {
        MesherError::ConfigError(format!("Failed to parse JSON shape document: {}", e))
    })?;

    shapes_from_document(document)
}

/// Parse a JSON shape document from a string
pub fn parse_json_shapes(text: &str) -> Result<Vec<Shape>> {
    let document: JsonShapeDocument = serde_json::from_str(text).map_err(|e| {
        MesherError::ConfigError(format!("Failed to parse JSON shape document: {}", e))
    })?;

    shapes_from_document(document)
}

fn shapes_from_document(document: JsonShapeDocument) -> Result<Vec<Shape>> {
    let mut shapes = Vec::new();

    for (k, entry) in document.shapes.into_iter().enumerate() {
        let base = entry.name.unwrap_or_else(|| format!("shape_{}", k));

        let rings: Vec<Ring> = match (entry.points, entry.d, entry.vertices) {
            (Some(points), None, None) => parse_point_list(&points)
                .map_err(|e| e.in_shape(&base))?
                .into_iter()
                .collect(),
            (None, Some(d), None) => rings_from_path_data(&d).map_err(|e| e.in_shape(&base))?,
            (None, None, Some(vertices)) => {
                Ring::new(vertices.iter().map(|&[x, y]| Point2D::new(x, y)).collect())
                    .into_iter()
                    .collect()
            }
            _ => {
                return Err(MesherError::ConfigError(
                    "expected exactly one of 'points', 'd' or 'vertices'".to_string(),
                )
                .in_shape(&base));
            }
        };

        if rings.is_empty() {
            log::debug!("Skipping shape '{}' with fewer than 3 points", base);
        }
        for (j, ring) in rings.into_iter().enumerate() {
            let name = if j == 0 {
                base.clone()
            } else {
                format!("{}_{}", base, j)
            };
            shapes.push(Shape::new(name, ring));
        }
    }

    if shapes.is_empty() {
        return Err(MesherError::EmptyShapeCollection);
    }

    Ok(shapes)
}

/// Write per-shape vertices and 0-based triangle indices
///
/// Every mesh is written, including those with no triangles.
pub fn write_json_meshes<P: AsRef<Path>>(meshes: &[ShapeMesh], path: P) -> Result<()> {
    let document = JsonMeshDocument {
        shapes: meshes
            .iter()
            .map(|mesh| JsonShapeMesh {
                name: mesh.name().to_string(),
                vertices: mesh.vertices().iter().map(|p| [p.x, p.y]).collect(),
                triangles: mesh.triangles.clone(),
            })
            .collect(),
    };

    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &document).map_err(|e| {
        MesherError::ConfigError(format!("Failed to write JSON meshes: {}", e))
    })?;

    log::info!(
        "Wrote {:?} (shapes: {})",
        path.as_ref(),
        document.shapes.len()
    );

    Ok(())
}
