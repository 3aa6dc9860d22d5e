use serde::{Deserialize, Serialize};

/// Default number of samples taken along each curve segment.
pub const DEFAULT_CURVE_STEPS: u32 = 20;

/// Curve flattening settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationOptions {
    /// Samples per curve segment, taken at `t = i / curve_steps` for
    /// `i in 0..curve_steps`. Zero is treated as one.
    pub curve_steps: u32,
    /// Append each curve's exact end point after its samples.
    pub close_curve_gaps: bool,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            curve_steps: DEFAULT_CURVE_STEPS,
            close_curve_gaps: true,
        }
    }
}

impl TessellationOptions {
    pub fn with_curve_steps(curve_steps: u32) -> Self {
        Self {
            curve_steps,
            ..Self::default()
        }
    }
}

/// Overlap index settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapOptions {
    /// Skip the clipping engine for pairs whose bounding boxes are disjoint.
    pub bbox_prefilter: bool,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            bbox_prefilter: true,
        }
    }
}

/// Complete engine configuration, as loaded by `overlapkit-settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tessellation: TessellationOptions,
    pub overlaps: OverlapOptions,
}
