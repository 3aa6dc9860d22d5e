//! Scene files: a JSON array of shapes with SVG path data.
//!
//! ```json
//! [
//!   { "id": "a", "path": "M0 0 L10 0 L10 10 L0 10 Z" },
//!   { "path": "M5 5 L15 5 L15 15 L5 15 Z", "stroke": { "color": "#f00" } }
//! ]
//! ```
//!
//! Entries without an id get a generated one.

use std::path::Path;

use anyhow::Context;
use overlapkit_core::{Shape, ShapeId, StrokeStyle};
use overlapkit_geometry::{parse_svg_path_strict, EngineConfig, Scene};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub path: String,
    #[serde(default)]
    pub stroke: StrokeStyle,
}

impl SceneEntry {
    pub fn into_shape(self) -> anyhow::Result<Shape> {
        let id = self.id.map(ShapeId::from).unwrap_or_else(ShapeId::generate);
        let path = parse_svg_path_strict(&self.path)
            .with_context(|| format!("Invalid path data for shape '{}'", id))?;
        Ok(Shape {
            id,
            path,
            stroke: self.stroke,
        })
    }
}

/// Parse scene JSON into shapes, in file order.
pub fn parse_shapes(json: &str) -> anyhow::Result<Vec<Shape>> {
    let entries: Vec<SceneEntry> =
        serde_json::from_str(json).context("Scene must be a JSON array of shapes")?;
    entries.into_iter().map(SceneEntry::into_shape).collect()
}

pub fn load_shapes(path: &Path) -> anyhow::Result<Vec<Shape>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    let shapes =
        parse_shapes(&json).with_context(|| format!("Failed to load scene {}", path.display()))?;
    debug!(path = %path.display(), shapes = shapes.len(), "Loaded scene");
    Ok(shapes)
}

/// Collect shapes into a scene, rejecting duplicate ids.
pub fn build_scene(shapes: Vec<Shape>, config: EngineConfig) -> anyhow::Result<Scene> {
    let mut scene = Scene::with_config(config);
    for shape in shapes {
        scene.add_shape(shape)?;
    }
    Ok(scene)
}
