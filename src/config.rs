//! Configuration file support for mesh builds

use crate::error::{MesherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

/// Settings for one build: where to read from, where to write, which exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Input SVG or JSON shape document
    pub input_file: String,

    /// Output path prefix, without extension
    pub output_prefix: String,

    /// Write `<prefix>_polylines.json`
    #[serde(default = "default_true")]
    pub export_json: bool,

    /// Write `<prefix>_mesh.obj`
    #[serde(default = "default_true")]
    pub export_obj: bool,

    /// Write `<prefix>.vtu`
    #[serde(default)]
    pub export_vtu: bool,

    /// Write `<prefix>_summary.json`
    #[serde(default = "default_true")]
    pub export_summary: bool,

    /// Skip SVG paths with `fill="none"` or `fill:none` in their style
    #[serde(default = "default_true")]
    pub skip_unfilled: bool,

    /// VTK file format version (defaults to the VTU writer's version)
    #[serde(default)]
    pub vtk_version: Option<(u8, u8)>,
}

impl BuildConfig {
    /// Create a configuration with default export settings
    pub fn new(input_file: impl Into<String>, output_prefix: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            output_prefix: output_prefix.into(),
            export_json: true,
            export_obj: true,
            export_vtu: false,
            export_summary: true,
            skip_unfilled: true,
            vtk_version: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MesherError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            MesherError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            MesherError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            MesherError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Path of an output file: the prefix followed by `suffix`
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.output_prefix, suffix))
    }

    /// True when at least one export is enabled
    pub fn has_exports(&self) -> bool {
        self.export_json || self.export_obj || self.export_vtu || self.export_summary
    }
}
