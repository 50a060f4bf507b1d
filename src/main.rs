//! tagmesh command-line interface.
//!
//! Builds one tagged shape and meshes it with Gmsh.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use tagmesh::engine::{GmshCli, GmshConfig};
use tagmesh::pipeline;
use tagmesh::shapes::{FractureTagging, PrismParams, RectangleParams};

#[derive(Parser)]
#[command(name = "tagmesh")]
#[command(about = "Build tagged rectangles and prisms and mesh them with Gmsh")]
struct Cli {
    /// Gmsh executable (defaults to $GMSH_EXECUTABLE, then `gmsh`)
    #[arg(long, global = true)]
    gmsh: Option<PathBuf>,

    /// Gmsh verbosity level
    #[arg(long, global = true)]
    verbosity: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Planar {
    /// Output path; its stem names the model, its extension becomes .msh
    output: PathBuf,
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    /// Target element size
    #[arg(long)]
    mesh_size: f64,
    /// Vertical center of the rectangle
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center: f64,
}

impl Planar {
    fn params(&self) -> RectangleParams {
        RectangleParams::new(self.width, self.height, self.mesh_size).with_center_z(self.center)
    }
}

#[derive(Subcommand)]
enum Command {
    /// A rectangle with tagged sides
    Rectangle(Planar),
    /// A rectangle split by a 30° fracture line
    Fractured {
        #[command(flatten)]
        planar: Planar,
        /// Tagging mode: `domain` or `BC`
        #[arg(long, default_value = "domain")]
        mode: String,
    },
    /// An axis-aligned box with tagged faces
    Prism {
        output: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        thickness: f64,
        #[arg(long)]
        mesh_size: f64,
        /// Center of the box along Z
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        center: f64,
    },
}

fn main() -> anyhow::Result<()> {
    // Default: WARN for everything, INFO for tagmesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tagmesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tagmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GmshConfig::default();
    if let Some(executable) = cli.gmsh {
        config.executable = executable;
    }
    if let Some(verbosity) = cli.verbosity {
        config.verbosity = verbosity;
    }
    let engine = GmshCli::new(config);

    let written = match cli.command {
        Command::Rectangle(planar) => {
            pipeline::create_rectangle_mesh(&engine, &planar.output, planar.params())
                .with_context(|| format!("meshing rectangle {}", planar.output.display()))?
        }
        Command::Fractured { planar, mode } => {
            let tagging: FractureTagging = mode.parse()?;
            pipeline::create_fractured_rectangle_mesh(
                &engine,
                &planar.output,
                planar.params(),
                tagging,
            )
            .with_context(|| format!("meshing fractured rectangle {}", planar.output.display()))?
        }
        Command::Prism {
            output,
            width,
            height,
            thickness,
            mesh_size,
            center,
        } => {
            let params =
                PrismParams::new(width, height, thickness, mesh_size).with_center_z(center);
            pipeline::create_prism_mesh(&engine, &output, params)
                .with_context(|| format!("meshing prism {}", output.display()))?
        }
    };

    println!("{}", written.display());
    Ok(())
}
