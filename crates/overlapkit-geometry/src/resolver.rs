//! Point-to-region resolution.
//!
//! Resolution order is fixed:
//! 1. intersection records, in overlap-index order, tested against each
//!    region's outer ring; the first hit wins, so a click inside two shapes
//!    resolves to their shared region;
//! 2. shapes, in input order, whose outline contains the point: the shape's
//!    polygon minus every record that references it, first remaining piece
//!    whose outer ring contains the point;
//! 3. nothing.

use overlapkit_core::{ClipError, MultiPolygon, Polygon, Shape, ShapeId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::boolean::{ClipEngine, CsgClipper};
use crate::containment::outer_contains_point;
use crate::options::TessellationOptions;
use crate::overlap::IntersectionRecord;
use crate::tessellate::tessellate_with;

/// A resolved region together with the shapes that own it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Region shared by two overlapping shapes.
    Shared {
        shape_a: ShapeId,
        shape_b: ShapeId,
        region: Polygon,
    },
    /// Part of a single shape not covered by any overlap.
    Exclusive { shape_id: ShapeId, region: Polygon },
}

impl Resolution {
    pub fn region(&self) -> &Polygon {
        match self {
            Self::Shared { region, .. } | Self::Exclusive { region, .. } => region,
        }
    }

    pub fn into_region(self) -> Polygon {
        match self {
            Self::Shared { region, .. } | Self::Exclusive { region, .. } => region,
        }
    }

    pub fn owners(&self) -> Vec<&ShapeId> {
        match self {
            Self::Shared {
                shape_a, shape_b, ..
            } => vec![shape_a, shape_b],
            Self::Exclusive { shape_id, .. } => vec![shape_id],
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }
}

/// Resolve with the default engine and tessellation settings.
pub fn resolve(
    shapes: &[Shape],
    overlaps: &[IntersectionRecord],
    x: f64,
    y: f64,
) -> Option<Polygon> {
    resolve_detailed(shapes, overlaps, x, y).map(Resolution::into_region)
}

pub fn resolve_detailed(
    shapes: &[Shape],
    overlaps: &[IntersectionRecord],
    x: f64,
    y: f64,
) -> Option<Resolution> {
    resolve_detailed_with(
        shapes,
        overlaps,
        x,
        y,
        &CsgClipper,
        &TessellationOptions::default(),
    )
}

/// Full resolution with an explicit engine and tessellation settings.
///
/// `overlaps` must have been computed from `shapes` with the same settings.
pub fn resolve_detailed_with<E: ClipEngine>(
    shapes: &[Shape],
    overlaps: &[IntersectionRecord],
    x: f64,
    y: f64,
    engine: &E,
    options: &TessellationOptions,
) -> Option<Resolution> {
    if let Some(record) = overlaps
        .iter()
        .find(|record| outer_contains_point(&record.region, x, y))
    {
        debug!(shape_a = %record.shape_a, shape_b = %record.shape_b, x, y, "Resolved shared region");
        return Some(Resolution::Shared {
            shape_a: record.shape_a.clone(),
            shape_b: record.shape_b.clone(),
            region: record.region.clone(),
        });
    }

    for shape in shapes {
        let full = tessellate_with(&shape.path, options);
        let hit = full
            .polygons
            .first()
            .is_some_and(|polygon| outer_contains_point(polygon, x, y));
        if !hit {
            continue;
        }

        let remaining = match exclusive_remainder(&shape.id, full, overlaps, engine) {
            Ok(remaining) => remaining,
            Err(err) => {
                warn!(shape = %shape.id, error = %err, "Subtraction failed, no exclusive region for shape");
                continue;
            }
        };

        if let Some(region) = remaining
            .into_iter()
            .find(|polygon| outer_contains_point(polygon, x, y))
        {
            debug!(shape = %shape.id, x, y, "Resolved exclusive region");
            return Some(Resolution::Exclusive {
                shape_id: shape.id.clone(),
                region,
            });
        }
    }

    debug!(x, y, "Point hit no region");
    None
}

/// Subtract, in record order, every overlap involving `shape_id` from the
/// shape's own geometry.
///
/// With no involving records the geometry is returned untouched.
pub fn exclusive_remainder<E: ClipEngine>(
    shape_id: &ShapeId,
    geometry: MultiPolygon,
    overlaps: &[IntersectionRecord],
    engine: &E,
) -> Result<MultiPolygon, ClipError> {
    overlaps
        .iter()
        .filter(|record| record.involves(shape_id))
        .try_fold(geometry, |remaining, record| {
            engine.subtract(&remaining, &MultiPolygon::from(record.region.clone()))
        })
}

/// All exclusive pieces of one shape, e.g. for painting a whole shape's
/// non-shared territory.
pub fn exclusive_regions<E: ClipEngine>(
    shape: &Shape,
    overlaps: &[IntersectionRecord],
    engine: &E,
    options: &TessellationOptions,
) -> Result<MultiPolygon, ClipError> {
    let full = tessellate_with(&shape.path, options);
    exclusive_remainder(&shape.id, full, overlaps, engine)
}
