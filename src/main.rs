use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use overlapkit::{
    build_scene, init_logging, load_shapes, polygon_to_svg_path, LogFormat, OutputFormat,
    Settings,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "overlapkit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about = "Resolve points on a canvas of overlapping shapes"
)]
struct Cli {
    /// Config file (.json or .toml); defaults to the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the region under a point, or `none`
    Resolve {
        /// Scene file (JSON array of shapes)
        scene: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Print JSON instead of SVG path data
        #[arg(long)]
        json: bool,
    },
    /// Print every pairwise overlap region
    Overlaps {
        /// Scene file (JSON array of shapes)
        scene: PathBuf,
        /// Print JSON instead of one line per record
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let settings =
        Settings::load_or_default(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Resolve { scene, x, y, json } => {
            let mut scene = build_scene(load_shapes(&scene)?, settings.engine)?;
            let resolution = scene.resolve(x, y);
            info!(x, y, found = resolution.is_some(), "Resolved point");

            if json || settings.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                match resolution {
                    Some(res) => println!("{}", polygon_to_svg_path(res.region())),
                    None => println!("none"),
                }
            }
        }
        Command::Overlaps { scene, json } => {
            let mut scene = build_scene(load_shapes(&scene)?, settings.engine)?;
            let records = scene.overlaps();

            if json || settings.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(records)?);
            } else {
                for record in records {
                    println!(
                        "{} {} {}",
                        record.shape_a,
                        record.shape_b,
                        polygon_to_svg_path(&record.region)
                    );
                }
            }
        }
    }

    Ok(())
}
