//! Polygon Boolean operations.
//!
//! The overlap index and region resolver only see the [`ClipEngine`] trait.
//! The default implementation hands the work to `csgrs` sketches, whose 2D
//! Booleans run on the geo / i_overlay clipping stack.

use std::panic::{self, AssertUnwindSafe};

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use overlapkit_core::{ClipError, MultiPolygon, Point, Polygon, Ring};

/// Intersection and difference over multi-polygons.
///
/// Results may contain zero, one or many polygons, and polygons with holes.
/// Empty output for disjoint or degenerate operands is a normal result; an
/// `Err` means the engine itself could not cope with the input.
pub trait ClipEngine {
    fn intersect(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError>;

    fn subtract(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError>;
}

impl<T: ClipEngine + ?Sized> ClipEngine for &T {
    fn intersect(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError> {
        (**self).intersect(a, b)
    }

    fn subtract(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError> {
        (**self).subtract(a, b)
    }
}

/// [`ClipEngine`] backed by `csgrs::sketch::Sketch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsgClipper;

impl CsgClipper {
    pub fn new() -> Self {
        Self
    }

    fn run<F>(
        operation: &'static str,
        a: &MultiPolygon,
        b: &MultiPolygon,
        op: F,
    ) -> Result<MultiPolygon, ClipError>
    where
        F: FnOnce(&Sketch<()>, &Sketch<()>) -> Sketch<()>,
    {
        ensure_finite(a)?;
        ensure_finite(b)?;

        // A panic inside the clipping library is reported like any other
        // engine failure instead of unwinding through the caller.
        panic::catch_unwind(AssertUnwindSafe(|| {
            let result = op(&to_sketch(a), &to_sketch(b));
            from_sketch(&result)
        }))
        .map_err(|payload| ClipError::EngineFailure {
            operation,
            message: panic_message(payload.as_ref()),
        })
    }
}

impl ClipEngine for CsgClipper {
    fn intersect(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError> {
        if a.is_empty() || b.is_empty() {
            return Ok(MultiPolygon::default());
        }
        Self::run("intersect", a, b, |sa, sb| sa.intersection(sb))
    }

    fn subtract(&self, a: &MultiPolygon, b: &MultiPolygon) -> Result<MultiPolygon, ClipError> {
        if a.is_empty() {
            return Ok(MultiPolygon::default());
        }
        Self::run("subtract", a, b, |sa, sb| sa.difference(sb))
    }
}

fn ensure_finite(mp: &MultiPolygon) -> Result<(), ClipError> {
    let bad = mp
        .iter()
        .flat_map(|poly| poly.rings.iter())
        .flat_map(|ring| ring.iter())
        .find(|p| !p.is_finite());

    match bad {
        Some(p) => Err(ClipError::NonFiniteCoordinate { x: p.x, y: p.y }),
        None => Ok(()),
    }
}

fn ring_coords(ring: &Ring) -> Vec<[f64; 2]> {
    ring.iter().map(|p| [p.x, p.y]).collect()
}

fn polygon_sketch(polygon: &Polygon) -> Sketch<()> {
    let Some(outer) = polygon.outer().filter(|r| !r.is_degenerate()) else {
        return Sketch::new();
    };

    polygon
        .holes()
        .iter()
        .filter(|hole| !hole.is_degenerate())
        .fold(Sketch::polygon(&ring_coords(outer), None), |sketch, hole| {
            sketch.difference(&Sketch::polygon(&ring_coords(hole), None))
        })
}

/// Build a sketch from a multi-polygon. Degenerate rings are dropped.
pub fn to_sketch(mp: &MultiPolygon) -> Sketch<()> {
    match mp.polygons.as_slice() {
        [] => Sketch::new(),
        [single] => polygon_sketch(single),
        many => many
            .iter()
            .fold(Sketch::new(), |acc, poly| acc.union(&polygon_sketch(poly))),
    }
}

/// Read a sketch back as a multi-polygon, stripping repeated closing points
/// and discarding degenerate rings.
pub fn from_sketch(sketch: &Sketch<()>) -> MultiPolygon {
    let mp = sketch.to_multipolygon();

    let polygons = mp
        .0
        .iter()
        .filter_map(|poly| {
            let outer = open_ring(poly.exterior().0.iter().map(|c| Point::new(c.x, c.y)));
            if outer.is_degenerate() {
                return None;
            }
            let holes = poly
                .interiors()
                .iter()
                .map(|ls| open_ring(ls.0.iter().map(|c| Point::new(c.x, c.y))))
                .filter(|ring| !ring.is_degenerate())
                .collect();
            Some(Polygon::with_holes(outer, holes))
        })
        .collect();

    MultiPolygon::new(polygons)
}

fn open_ring(points: impl Iterator<Item = Point>) -> Ring {
    let mut ring: Ring = points.collect();
    if ring.len() > 1 && ring.points.first() == ring.points.last() {
        ring.points.pop();
    }
    ring
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
