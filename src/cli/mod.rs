//! CLI commands and interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vector-mesher")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the shapes of an SVG or JSON shape document
    Info {
        /// Path to the SVG file or JSON shape document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Include paths with fill:none
        #[arg(long)]
        keep_unfilled: bool,
    },

    /// Triangulate every shape and write mesh files
    Build {
        /// Path to the SVG file or JSON shape document
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output path prefix (no extension)
        #[arg(short, long, value_name = "PREFIX")]
        output: Option<String>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the <PREFIX>_polylines.json export
        #[arg(long)]
        no_json: bool,

        /// Skip the <PREFIX>_mesh.obj export
        #[arg(long)]
        no_obj: bool,

        /// Skip the <PREFIX>_summary.json export
        #[arg(long)]
        no_summary: bool,

        /// Also write <PREFIX>.vtu
        #[arg(long)]
        vtu: bool,

        /// Include paths with fill:none
        #[arg(long)]
        keep_unfilled: bool,
    },

    /// Triangulate a single literal point list
    Triangulate {
        /// Coordinates, e.g. "0,0 10,0 10,10 0,10"
        #[arg(long)]
        points: String,
    },
}
