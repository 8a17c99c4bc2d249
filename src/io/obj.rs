//! Wavefront OBJ writer: one `o` group per shape, flat at z = 0

use crate::error::Result;
use crate::mesh::ShapeMesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Vertex and face counts of a written OBJ file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjCounts {
    pub vertices: usize,
    pub faces: usize,
}

/// Write renderable meshes as OBJ text
///
/// Face indices are 1-based and offset by the vertices of previously written
/// groups. Meshes without triangles are skipped.
pub fn write_obj<W: Write>(meshes: &[ShapeMesh], writer: &mut W) -> Result<ObjCounts> {
    let mut counts = ObjCounts::default();

    for mesh in meshes.iter().filter(|mesh| mesh.is_renderable()) {
        writeln!(writer, "o {}", mesh.name())?;

        for p in mesh.vertices() {
            writeln!(writer, "v {:.6} {:.6} 0.0", p.x, p.y)?;
        }

        let offset = counts.vertices + 1;
        for &[a, b, c] in &mesh.triangles {
            writeln!(writer, "f {} {} {}", offset + a, offset + b, offset + c)?;
        }

        counts.vertices += mesh.num_vertices();
        counts.faces += mesh.num_triangles();
    }

    Ok(counts)
}

/// Write renderable meshes to an OBJ file
pub fn write_obj_file<P: AsRef<Path>>(meshes: &[ShapeMesh], path: P) -> Result<ObjCounts> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    let counts = write_obj(meshes, &mut writer)?;
    writer.flush()?;

    log::info!(
        "Wrote {:?} (verts: {}, faces: {})",
        path.as_ref(),
        counts.vertices,
        counts.faces
    );

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_meshes, Point2D, Ring, Shape};

    fn shape(name: &str, coords: &[(f64, f64)]) -> Shape {
        Shape::new(
            name,
            Ring::new(coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()).unwrap(),
        )
    }

    #[test]
    fn test_obj_groups_and_offsets() {
        let meshes = build_meshes(vec![
            shape("a", &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            shape("flat", &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            shape("b", &[(2.0, 0.0), (3.0, 0.0), (2.5, 1.5)]),
        ])
        .unwrap();

        let mut buffer = Vec::new();
        let counts = write_obj(&meshes, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(counts, ObjCounts { vertices: 6, faces: 2 });
        assert_eq!(
            text,
            "o a\n\
             v 0.000000 0.000000 0.0\n\
             v 1.000000 0.000000 0.0\n\
             v 0.000000 1.000000 0.0\n\
             f 1 2 3\n\
             o b\n\
             v 2.000000 0.000000 0.0\n\
             v 3.000000 0.000000 0.0\n\
             v 2.500000 1.500000 0.0\n\
             f 4 5 6\n"
        );
    }

    #[test]
    fn test_obj_file() {
        let meshes = build_meshes(vec![shape(
            "sq",
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        )])
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf_mesh.obj");
        let counts = write_obj_file(&meshes, &path).unwrap();

        assert_eq!(counts, ObjCounts { vertices: 4, faces: 2 });
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2);
    }
}
