//! # OverlapKit
//!
//! Resolves a click on a canvas of overlapping vector shapes to the exact
//! region under the pointer: the area two shapes share, or the part of a
//! single shape that no other shape covers.
//!
//! ## Architecture
//!
//! OverlapKit is organized as a workspace with multiple crates:
//!
//! 1. **overlapkit-core** - Points, rings, polygons, shapes, path commands, errors
//! 2. **overlapkit-geometry** - Tessellation, containment, clipping, overlap index, resolver
//! 3. **overlapkit-settings** - JSON/TOML configuration files
//! 4. **overlapkit** - Command line front end and scene file loading

pub mod scene_file;

pub use overlapkit_core::{
    Bounds, ClipError, Error, MultiPolygon, PathCommand, PathError, Point, Polygon, Result, Ring,
    SceneError, Shape, ShapeId, StrokeStyle,
};
pub use overlapkit_geometry::{
    compute_overlaps, compute_overlaps_with, parse_svg_path, parse_svg_path_strict,
    polygon_to_svg_path, resolve, resolve_detailed, ring_to_svg_path, tessellate, ClipEngine,
    CsgClipper, EngineConfig, IntersectionRecord, Resolution, Scene,
};
pub use overlapkit_settings::{OutputFormat, Settings, SettingsError};
pub use scene_file::{build_scene, load_shapes, parse_shapes, SceneEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize logging
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
