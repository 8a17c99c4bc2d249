//! Shape data structures, geometric predicates and mesh building

pub mod builder;
pub mod geometry;
pub mod types;

pub use builder::*;
pub use geometry::*;
pub use types::*;
