//! # OverlapKit Geometry
//!
//! Turns canvas shape outlines into polygons and answers the question
//! "which region did the user click?".
//!
//! ## Core Components
//!
//! - **Tessellation**: flattens `M`/`L`/`Q`/`C`/`Z` path commands into rings
//! - **Containment**: even-odd point-in-ring tests
//! - **Boolean Engine**: intersection and difference through `csgrs`
//! - **Overlap Index**: one record per non-empty pairwise intersection
//! - **Resolver**: shared region first, then a shape's exclusive remainder
//! - **Output**: SVG path data and `lyon` paths for highlighting
//!
//! ## Architecture
//!
//! ```text
//! Shape paths
//!   └── Tessellator ──> MultiPolygon
//!         ├── Overlap Index (pairwise intersections)
//!         └── Resolver (point -> region)
//!               └── SVG writer / lyon outline
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use overlapkit_geometry::{compute_overlaps, parse_svg_path, resolve};
//! use overlapkit_core::Shape;
//!
//! let shapes = vec![
//!     Shape::new("a", parse_svg_path("M0 0 L10 0 L10 10 L0 10 Z")),
//!     Shape::new("b", parse_svg_path("M5 5 L15 5 L15 15 L5 15 Z")),
//! ];
//! let overlaps = compute_overlaps(&shapes);
//! let region = resolve(&shapes, &overlaps, 7.0, 7.0);
//! ```

pub mod boolean;
pub mod builders;
pub mod containment;
pub mod options;
pub mod outline;
pub mod overlap;
pub mod resolver;
pub mod scene;
pub mod svg_path;
pub mod svg_writer;
pub mod tessellate;

pub use boolean::{ClipEngine, CsgClipper};
pub use builders::{circle, circle_at, rectangle, square, DragShape};
pub use containment::{contains_point, outer_contains_point, polygon_contains_point};
pub use options::{EngineConfig, OverlapOptions, TessellationOptions, DEFAULT_CURVE_STEPS};
pub use outline::polygon_to_lyon_path;
pub use overlap::{compute_overlaps, compute_overlaps_with, IntersectionRecord};
pub use resolver::{
    exclusive_regions, exclusive_remainder, resolve, resolve_detailed, resolve_detailed_with,
    Resolution,
};
pub use scene::Scene;
pub use svg_path::{parse_svg_path, parse_svg_path_strict};
pub use svg_writer::{commands_to_svg_path, polygon_to_svg_path, ring_to_svg_path};
pub use tessellate::{flatten_ring, tessellate, tessellate_with};
