//! Polygon triangulation

pub mod earclip;

pub use earclip::{triangulate, triangulate_points, MAX_ITERATIONS};
