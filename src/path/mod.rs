//! Conversion of point lists and straight-line path data into rings

pub mod parser;
pub mod points;
pub mod rings;

pub use parser::parse_path_data;
pub use points::parse_point_list;
pub use rings::{extract_rings, PathCommand};

use crate::error::Result;
use crate::mesh::Ring;

/// Parse path data and extract its closed rings
pub fn rings_from_path_data(data: &str) -> Result<Vec<Ring>> {
    let commands = parse_path_data(data)?;
    Ok(extract_rings(&commands))
}
