//! Even-odd point containment.
//!
//! Points lying exactly on an edge or vertex get whichever answer the
//! crossing rule produces for that configuration. This is fine for
//! interactive hit-testing and is not treated as a defect.

use overlapkit_core::{Polygon, Ring};

/// Ray-casting test against a single ring.
///
/// Casts a ray from `(x, y)` towards +x and toggles on every edge that
/// straddles the ray's y and crosses it strictly right of `x`. Rings with
/// fewer than three points contain nothing.
pub fn contains_point(ring: &Ring, x: f64, y: f64) -> bool {
    let pts = &ring.points;
    if pts.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (xi, yi) = (pts[i].x, pts[i].y);
        let (xj, yj) = (pts[j].x, pts[j].y);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Containment against a polygon's outer ring only, ignoring holes.
pub fn outer_contains_point(polygon: &Polygon, x: f64, y: f64) -> bool {
    polygon
        .outer()
        .is_some_and(|ring| contains_point(ring, x, y))
}

/// Containment honouring holes: inside the outer ring and outside every hole.
pub fn polygon_contains_point(polygon: &Polygon, x: f64, y: f64) -> bool {
    outer_contains_point(polygon, x, y)
        && !polygon.holes().iter().any(|hole| contains_point(hole, x, y))
}
