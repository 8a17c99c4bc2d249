//! VTU (VTK Unstructured Grid) file writer

use crate::error::{MesherError, Result};
use crate::mesh::{triangle_area, ShapeMesh};
use std::path::Path;
use vtkio::model::*;

/// Default VTK file format version (2.2 for broad compatibility)
pub const DEFAULT_VTK_VERSION: (u8, u8) = (2, 2);

/// Write all renderable meshes into one VTU file of triangle cells
///
/// Vertices are placed at z = 0. Each cell carries its `area` and the
/// `shape_id` (position among the renderable meshes) as cell data.
/// Returns the number of shapes written.
pub fn write_meshes_to_vtu(
    meshes: &[ShapeMesh],
    output_path: &Path,
    vtk_version: Option<(u8, u8)>,
) -> Result<usize> {
    let version = vtk_version.unwrap_or(DEFAULT_VTK_VERSION);
    let renderable: Vec<&ShapeMesh> = meshes.iter().filter(|m| m.is_renderable()).collect();

    if renderable.is_empty() {
        return Err(MesherError::EmptyShapeCollection);
    }

    let num_triangles: usize = renderable.iter().map(|m| m.num_triangles()).sum();
    log::info!(
        "Writing {} shapes with {} triangles to {:?} (VTK version {}.{})",
        renderable.len(),
        num_triangles,
        output_path,
        version.0,
        version.1
    );

    let mut points: Vec<f64> = Vec::new();
    let mut connectivity: Vec<u64> = Vec::with_capacity(num_triangles * 3);
    let mut areas: Vec<f64> = Vec::with_capacity(num_triangles);
    let mut shape_ids: Vec<i32> = Vec::with_capacity(num_triangles);

    for (shape_id, mesh) in renderable.iter().enumerate() {
        let offset = (points.len() / 3) as u64;
        points.extend(mesh.vertices().iter().flat_map(|p| [p.x, p.y, 0.0]));

        let vertices = mesh.vertices();
        for &[a, b, c] in &mesh.triangles {
            connectivity.extend([a, b, c].map(|i| offset + i as u64));
            areas.push(triangle_area(&vertices[a], &vertices[b], &vertices[c]).abs());
            shape_ids.push(shape_id as i32);
        }
    }

    // All cells are triangles (VTK_TRIANGLE = 5)
    let cells = Cells {
        cell_verts: VertexNumbers::XML {
            connectivity,
            offsets: (0..num_triangles).map(|i| ((i + 1) * 3) as u64).collect(),
        },
        types: vec![CellType::Triangle; num_triangles],
    };

    let mut ugrid = UnstructuredGridPiece {
        points: IOBuffer::F64(points),
        cells,
        data: Attributes::new(),
    };

    ugrid.data.cell.push(Attribute::DataArray(DataArray {
        name: "area".into(),
        elem: ElementType::Scalars {
            num_comp: 1,
            lookup_table: None,
        },
        data: IOBuffer::F64(areas),
    }));

    ugrid.data.cell.push(Attribute::DataArray(DataArray {
        name: "shape_id".into(),
        elem: ElementType::Scalars {
            num_comp: 1,
            lookup_table: None,
        },
        data: IOBuffer::I32(shape_ids),
    }));

    let vtk = Vtk {
        version: Version::new(version),
        title: format!("Triangulated shapes ({})", renderable.len()),
        byte_order: ByteOrder::LittleEndian,
        data: DataSet::UnstructuredGrid {
            pieces: vec![Piece::Inline(Box::new(ugrid))],
            meta: None,
        },
        file_path: None,
    };

    vtk.export(output_path)
        .map_err(|e| MesherError::VtkError(format!("Failed to write VTU file: {}", e)))?;

    log::info!("Successfully wrote VTU file to {:?}", output_path);

    Ok(renderable.len())
}
