//! Error types for the vector mesher
//!
//! This module defines all error types that can occur while reading shape
//! documents, parsing point lists and path data, and writing exports.

use thiserror::Error;

/// Error types for shape extraction and mesh export operations
///
/// Triangulation itself never produces an error: degenerate geometry yields
/// zero triangles instead.
#[derive(Error, Debug)]
pub enum MesherError {
    /// A flat point list could not be read as coordinate pairs
    ///
    /// Raised for non-numeric tokens, an odd number of values, or fewer than
    /// six values (three points).
    #[error("Malformed point list: {0}")]
    MalformedPointList(String),

    /// Path data contained an unknown opcode or an opcode missing operands
    #[error("Malformed path command: {0}")]
    MalformedPathCommand(String),

    /// No shape in the input produced a usable ring
    #[error("No filled, hole-free shapes with at least 3 vertices found")]
    EmptyShapeCollection,

    /// A parse error attributed to the shape it originated from
    #[error("Shape '{shape}': {source}")]
    InvalidShape {
        shape: String,
        #[source]
        source: Box<MesherError>,
    },

    /// The SVG document is not well-formed XML
    #[error("SVG error: {0}")]
    SvgError(String),

    /// Configuration error
    ///
    /// Invalid configuration file format, missing required fields,
    /// or a malformed JSON shape document.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// VTK file writing error
    #[error("VTK error: {0}")]
    VtkError(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MesherError {
    /// Attach the name of the offending shape to a parse error
    pub fn in_shape(self, shape: impl Into<String>) -> Self {
        MesherError::InvalidShape {
            shape: shape.into(),
            source: Box::new(self),
        }
    }
}

/// Convenience type alias for Results with [`MesherError`]
///
/// # Example
/// ```
/// use vector_mesher::Result;
///
/// fn my_function() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, MesherError>;
