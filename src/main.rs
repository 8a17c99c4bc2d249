//! Vector Mesher CLI Application

use clap::Parser;
use std::path::PathBuf;
use vector_mesher::config::BuildConfig;
use vector_mesher::mesh::{MeshStatistics, Shape};
use vector_mesher::{io, pipeline, MesherError, Result};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Info {
            input,
            keep_unfilled,
        } => cmd_info(input, keep_unfilled),
        Commands::Build {
            input,
            output,
            config,
            no_json,
            no_obj,
            no_summary,
            vtu,
            keep_unfilled,
        } => {
            let mut build_config = match config {
                Some(path) => BuildConfig::from_file(&path)?,
                None => {
                    let input = input.clone().ok_or_else(|| {
                        MesherError::ConfigError(
                            "An input file is required when no --config is given".to_string(),
                        )
                    })?;
                    let prefix = output.clone().unwrap_or_else(|| default_prefix(&input));
                    BuildConfig::new(input.to_string_lossy(), prefix)
                }
            };

            // Command-line arguments override the config file
            if let Some(input) = input {
                build_config.input_file = input.to_string_lossy().to_string();
            }
            if let Some(output) = output {
                build_config.output_prefix = output;
            }
            if no_json {
                build_config.export_json = false;
            }
            if no_obj {
                build_config.export_obj = false;
            }
            if no_summary {
                build_config.export_summary = false;
            }
            if vtu {
                build_config.export_vtu = true;
            }
            if keep_unfilled {
                build_config.skip_unfilled = false;
            }

            cmd_build(&build_config)
        }
        Commands::Triangulate { points } => cmd_triangulate(&points),
    }
}

/// Input path with its extension stripped
fn default_prefix(input: &std::path::Path) -> String {
    input.with_extension("").to_string_lossy().to_string()
}

fn cmd_info(input: PathBuf, keep_unfilled: bool) -> Result<()> {
    println!("Reading shapes: {}", input.display());

    let shapes = io::read_shapes(&input, !keep_unfilled)?;

    println!("\n{}", "=".repeat(60));
    println!("SHAPE INFORMATION");
    println!("{}", "=".repeat(60));
    println!();
    println!("  Shapes:       {}", shapes.len());
    println!(
        "  Vertices:     {}",
        shapes.iter().map(|s| s.vertices.len()).sum::<usize>()
    );
    println!();

    if !shapes.is_empty() {
        println!("Shapes:");
        for Shape { name, vertices } in &shapes {
            println!(
                "  - {}: {} vertices, area {:.4}",
                name,
                vertices.len(),
                vertices.signed_area().abs()
            );
        }
        println!();
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn cmd_build(config: &BuildConfig) -> Result<()> {
    println!("Building meshes: {}", config.input_file);

    let report = pipeline::run(config)?;
    print_statistics(&report.statistics);

    for mesh in report.meshes.iter().filter(|m| !m.is_renderable()) {
        println!("  Warning: '{}' produced no triangles", mesh.name());
    }

    if !report.written.is_empty() {
        println!("Wrote:");
        for path in &report.written {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}

fn cmd_triangulate(points: &str) -> Result<()> {
    let mesh = pipeline::mesh_point_list("points", points)?;

    for (i, p) in mesh.vertices().iter().enumerate() {
        println!("v{}: ({}, {})", i, p.x, p.y);
    }
    for [a, b, c] in &mesh.triangles {
        println!("t: {} {} {}", a, b, c);
    }

    print_statistics(&MeshStatistics::from_meshes(std::slice::from_ref(&mesh)));

    Ok(())
}

fn print_statistics(stats: &MeshStatistics) {
    println!("\n{}", "=".repeat(60));
    println!("MESH STATISTICS");
    println!("{}", "=".repeat(60));
    println!();
    println!("  Shapes:       {}", stats.num_shapes);
    println!("  Vertices:     {}", stats.num_vertices);
    println!("  Triangles:    {}", stats.num_triangles);
    println!("  Degenerate:   {}", stats.num_degenerate);
    println!("  Total area:   {:.4}", stats.total_area);
    println!();
    println!("{}", "=".repeat(60));
}
