use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::PathCommand;

/// Caller-assigned shape identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh `shape-<uuid>` identifier for shapes committed without a key.
    pub fn generate() -> Self {
        Self(format!("shape-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShapeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Cosmetic stroke metadata. Never read by the geometry engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// A committed canvas shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub path: Vec<PathCommand>,
    #[serde(default)]
    pub stroke: StrokeStyle,
}

impl Shape {
    pub fn new(id: impl Into<ShapeId>, path: Vec<PathCommand>) -> Self {
        Self {
            id: id.into(),
            path,
            stroke: StrokeStyle::default(),
        }
    }

    pub fn with_generated_id(path: Vec<PathCommand>) -> Self {
        Self::new(ShapeId::generate(), path)
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = StrokeStyle {
            color: Some(color.into()),
            width: Some(width),
        };
        self
    }
}
