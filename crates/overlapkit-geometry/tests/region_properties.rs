use overlapkit_core::{PathCommand, Point, Ring, Shape, ShapeId, EPSILON};
use overlapkit_geometry::{
    circle_at, compute_overlaps, parse_svg_path, rectangle, resolve, resolve_detailed,
    ring_to_svg_path, tessellate, Resolution, DEFAULT_CURVE_STEPS,
};

fn square(id: &str, x: f64, y: f64, size: f64) -> Shape {
    Shape::new(id, rectangle(Point::new(x, y), Point::new(x + size, y + size)))
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_square_tessellates_to_its_corners() {
    let path = vec![
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(10.0, 0.0),
        PathCommand::line_to(10.0, 10.0),
        PathCommand::line_to(0.0, 10.0),
        PathCommand::Close,
    ];
    let mp = tessellate(&path, DEFAULT_CURVE_STEPS);
    assert_eq!(mp.len(), 1);
    let ring = mp.polygons[0].outer().unwrap();
    let expected = Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert!(ring.approx_eq_rotated(&expected, 1e-12));
}

#[test]
fn test_single_step_curve_reaches_endpoint() {
    let path = parse_svg_path("M0 0 Q5 10 10 0 Z");
    let mp = tessellate(&path, 1);
    let ring = mp.polygons[0].outer().unwrap();
    assert_eq!(ring.points.last(), Some(&Point::new(10.0, 0.0)));
}

#[test]
fn test_disjoint_shapes_have_no_overlaps() {
    let shapes = vec![square("a", 0.0, 0.0, 10.0), square("b", 20.0, 20.0, 5.0)];
    assert!(compute_overlaps(&shapes).is_empty());
}

#[test]
fn test_identical_squares_share_whole_square() {
    let shapes = vec![square("a", 0.0, 0.0, 10.0), square("b", 0.0, 0.0, 10.0)];
    let overlaps = compute_overlaps(&shapes);
    assert_eq!(overlaps.len(), 1);

    let record = &overlaps[0];
    assert_eq!(record.shape_a, ShapeId::from("a"));
    assert_eq!(record.shape_b, ShapeId::from("b"));
    assert!(near(record.region.area(), 100.0));
    let b = record.region.bounds().unwrap();
    assert!(near(b.min_x, 0.0) && near(b.min_y, 0.0));
    assert!(near(b.max_x, 10.0) && near(b.max_y, 10.0));

    match resolve_detailed(&shapes, &overlaps, 5.0, 5.0) {
        Some(Resolution::Shared { region, .. }) => assert_eq!(region, record.region),
        other => panic!("expected shared region, got {other:?}"),
    }
}

#[test]
fn test_exclusive_point_returns_own_outline() {
    let shapes = vec![square("a", 0.0, 0.0, 10.0), square("b", 50.0, 50.0, 10.0)];
    let overlaps = compute_overlaps(&shapes);
    let region = resolve(&shapes, &overlaps, 3.0, 4.0).unwrap();

    let own = tessellate(&shapes[0].path, DEFAULT_CURVE_STEPS);
    let own_ring = own.polygons[0].outer().unwrap();
    assert!(region.outer().unwrap().approx_eq_rotated(own_ring, EPSILON));
}

#[test]
fn test_resolve_is_idempotent() {
    let shapes = vec![square("a", 0.0, 0.0, 10.0), square("b", 5.0, 5.0, 10.0)];
    let overlaps = compute_overlaps(&shapes);
    for (x, y) in [(7.0, 7.0), (2.0, 2.0), (13.0, 13.0), (40.0, 40.0)] {
        assert_eq!(
            resolve(&shapes, &overlaps, x, y),
            resolve(&shapes, &overlaps, x, y)
        );
    }
}

#[test]
fn test_resolved_ring_survives_svg_round_trip() {
    let shapes = vec![square("a", 0.0, 0.0, 10.0), square("b", 5.0, 5.0, 10.0)];
    let overlaps = compute_overlaps(&shapes);
    let region = resolve(&shapes, &overlaps, 2.0, 2.0).unwrap();
    let ring = region.outer().unwrap();

    let d = ring_to_svg_path(ring);
    let reparsed = tessellate(&parse_svg_path(&d), DEFAULT_CURVE_STEPS);
    let again = reparsed.polygons[0].outer().unwrap();
    assert!(again.approx_eq_rotated(ring, EPSILON));
}

#[test]
fn test_circle_overlapping_square() {
    let shapes = vec![
        Shape::new("disc", circle_at(Point::new(0.0, 0.0), 10.0)),
        square("sq", 0.0, 0.0, 20.0),
    ];
    let overlaps = compute_overlaps(&shapes);
    assert_eq!(overlaps.len(), 1);

    // Quarter disc, slightly under pi * r^2 / 4 after flattening.
    let area = overlaps[0].region.area();
    assert!(area > 77.0 && area < 78.6, "quarter disc area {area}");

    let res = resolve_detailed(&shapes, &overlaps, 3.0, 3.0).unwrap();
    assert!(res.is_shared());
    let res = resolve_detailed(&shapes, &overlaps, -5.0, -5.0).unwrap();
    assert_eq!(res.owners(), vec![&ShapeId::from("disc")]);
}
