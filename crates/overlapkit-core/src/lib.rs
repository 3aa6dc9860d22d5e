//! # OverlapKit Core
//!
//! Core types and errors shared by the OverlapKit crates.
//! Provides the plain-value geometry model (points, rings, polygons),
//! the closed set of path drawing commands, and the canvas shape record
//! consumed by the geometry engine.

pub mod data;
pub mod error;

pub use data::{
    Bounds, MultiPolygon, PathCommand, Point, Polygon, Ring, Shape, ShapeId, StrokeStyle,
};

pub use error::{ClipError, Error, PathError, Result, SceneError};

/// Tolerance used when comparing computed coordinates.
pub const EPSILON: f64 = 1e-9;
