//! Vector Mesher Library
//!
//! Converts straight-line SVG shapes into triangle meshes: point lists and
//! path data become closed rings, and each ring is triangulated by ear
//! clipping.

pub mod config;
pub mod error;
pub mod io;
pub mod mesh;
pub mod path;
pub mod pipeline;
pub mod triangulate;

pub use error::{MesherError, Result};
