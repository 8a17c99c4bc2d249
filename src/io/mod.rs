//! I/O module for reading shape documents and writing mesh files

pub mod json;
pub mod metadata;
pub mod obj;
pub mod svg;
pub mod vtu;

pub use json::{parse_json_shapes, read_json_shapes, write_json_meshes};
pub use metadata::BuildMetadata;
pub use obj::{write_obj, write_obj_file, ObjCounts};
pub use svg::{parse_svg_shapes, read_svg_shapes};
pub use vtu::{write_meshes_to_vtu, DEFAULT_VTK_VERSION};

use crate::error::Result;
use crate::mesh::Shape;
use std::path::Path;

/// Read shapes from a `.json` shape document or, otherwise, an SVG file
pub fn read_shapes(path: &Path, skip_unfilled: bool) -> Result<Vec<Shape>> {
    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        read_json_shapes(path)
    } else {
        read_svg_shapes(path, skip_unfilled)
    }
}
