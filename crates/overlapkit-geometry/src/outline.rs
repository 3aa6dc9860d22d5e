//! Conversion of resolved regions into `lyon` paths for highlighting.

use lyon::math::point;
use lyon::path::Path;
use overlapkit_core::Polygon;

/// Build a closed `lyon` path from every ring of a polygon.
///
/// Holes become additional closed subpaths, so filling the result with the
/// even-odd rule leaves them empty. Degenerate rings are skipped.
pub fn polygon_to_lyon_path(polygon: &Polygon) -> Path {
    let mut builder = Path::builder();

    for ring in polygon.rings.iter().filter(|r| !r.is_degenerate()) {
        let mut first = true;
        for p in ring.iter() {
            let p = point(p.x as f32, p.y as f32);
            if first {
                builder.begin(p);
                first = false;
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::algorithms::aabb::bounding_box;
    use lyon::algorithms::hit_test::hit_test_path;
    use lyon::path::FillRule;
    use overlapkit_core::Ring;

    fn donut() -> Polygon {
        Polygon::with_holes(
            Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![Ring::from_xy(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)])],
        )
    }

    #[test]
    fn test_outline_bounds() {
        let path = polygon_to_lyon_path(&donut());
        let bb = bounding_box(path.iter());
        assert_eq!((bb.min.x, bb.min.y, bb.max.x, bb.max.y), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_outline_hit_test_respects_holes() {
        let path = polygon_to_lyon_path(&donut());
        assert!(hit_test_path(&point(1.0, 5.0), path.iter(), FillRule::EvenOdd, 0.01));
        assert!(!hit_test_path(&point(5.0, 5.0), path.iter(), FillRule::EvenOdd, 0.01));
    }

    #[test]
    fn test_degenerate_polygon_gives_empty_path() {
        let path = polygon_to_lyon_path(&Polygon::new(Ring::from_xy(&[(0.0, 0.0)])));
        assert_eq!(path.iter().count(), 0);
    }
}
