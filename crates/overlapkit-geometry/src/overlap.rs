//! Pairwise overlap computation.
//!
//! The result is a snapshot of one shape list. It is not maintained
//! incrementally and must be recomputed after any shape is added, removed
//! or edited.

use overlapkit_core::{Bounds, MultiPolygon, Polygon, Shape, ShapeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::boolean::{ClipEngine, CsgClipper};
use crate::options::{EngineConfig, TessellationOptions};
use crate::tessellate::tessellate_with;

/// One non-empty overlap between exactly two shapes.
///
/// A pair whose outlines cross several times yields one record per disjoint
/// intersection polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    pub shape_a: ShapeId,
    pub shape_b: ShapeId,
    pub region: Polygon,
}

impl IntersectionRecord {
    /// True when `id` is either contributing shape.
    pub fn involves(&self, id: &ShapeId) -> bool {
        &self.shape_a == id || &self.shape_b == id
    }

    /// The partner of `id` in this record, if `id` takes part.
    pub fn other(&self, id: &ShapeId) -> Option<&ShapeId> {
        if &self.shape_a == id {
            Some(&self.shape_b)
        } else if &self.shape_b == id {
            Some(&self.shape_a)
        } else {
            None
        }
    }
}

/// A shape's tessellated geometry with its bounding box.
#[derive(Debug, Clone)]
pub(crate) struct Outline {
    pub geometry: MultiPolygon,
    pub bounds: Option<Bounds>,
}

impl Outline {
    pub fn of(shape: &Shape, options: &TessellationOptions) -> Self {
        let geometry = tessellate_with(&shape.path, options);
        let bounds = geometry.bounds();
        Self { geometry, bounds }
    }

    /// False only when the two boxes are strictly apart or either outline
    /// has no points, in which case the intersection is certainly empty.
    pub fn may_overlap(&self, other: &Outline) -> bool {
        match (&self.bounds, &other.bounds) {
            (Some(a), Some(b)) => a.overlaps(b),
            _ => false,
        }
    }
}

/// Every pairwise intersection using the default clipping engine and settings.
pub fn compute_overlaps(shapes: &[Shape]) -> Vec<IntersectionRecord> {
    compute_overlaps_with(shapes, &CsgClipper, &EngineConfig::default())
}

/// Every pairwise intersection, in ascending `(i, j)` pair order.
///
/// Clipping failures are logged and the pair is treated as disjoint.
pub fn compute_overlaps_with<E: ClipEngine>(
    shapes: &[Shape],
    engine: &E,
    config: &EngineConfig,
) -> Vec<IntersectionRecord> {
    let outlines: Vec<Outline> = shapes
        .iter()
        .map(|shape| Outline::of(shape, &config.tessellation))
        .collect();

    let mut records = Vec::new();
    let mut pruned = 0usize;
    let mut failed = 0usize;

    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            let (a, b) = (&outlines[i], &outlines[j]);
            if config.overlaps.bbox_prefilter && !a.may_overlap(b) {
                pruned += 1;
                continue;
            }

            match engine.intersect(&a.geometry, &b.geometry) {
                Ok(clipped) => {
                    records.extend(clipped.into_iter().filter(|p| !p.is_empty()).map(
                        |region| IntersectionRecord {
                            shape_a: shapes[i].id.clone(),
                            shape_b: shapes[j].id.clone(),
                            region,
                        },
                    ));
                }
                Err(err) => {
                    failed += 1;
                    warn!(
                        shape_a = %shapes[i].id,
                        shape_b = %shapes[j].id,
                        error = %err,
                        "Intersection failed, treating pair as disjoint"
                    );
                }
            }
        }
    }

    debug!(
        shapes = shapes.len(),
        records = records.len(),
        pruned,
        failed,
        "Computed shape overlaps"
    );
    records
}
