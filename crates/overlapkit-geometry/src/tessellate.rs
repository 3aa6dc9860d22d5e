//! Path flattening.
//!
//! Every command contributes to a single ring, including commands after a
//! second `MoveTo`; multi-subpath outlines are merged rather than split.

use overlapkit_core::{MultiPolygon, PathCommand, Point, Polygon, Ring};

use crate::options::TessellationOptions;

/// Flatten a path into a multi-polygon holding exactly one single-ring polygon.
pub fn tessellate(path: &[PathCommand], curve_steps: u32) -> MultiPolygon {
    tessellate_with(path, &TessellationOptions::with_curve_steps(curve_steps))
}

pub fn tessellate_with(path: &[PathCommand], options: &TessellationOptions) -> MultiPolygon {
    MultiPolygon::from(Polygon::new(flatten_ring(path, options)))
}

/// Flatten a path into its outline ring.
pub fn flatten_ring(path: &[PathCommand], options: &TessellationOptions) -> Ring {
    let pen = path.iter().fold(Pen::default(), |pen, cmd| pen.step(cmd, options));
    pen.ring
}

/// Running state threaded through the command sequence.
#[derive(Default)]
struct Pen {
    current: Point,
    ring: Ring,
}

impl Pen {
    fn step(mut self, cmd: &PathCommand, options: &TessellationOptions) -> Self {
        let steps = options.curve_steps.max(1);

        match *cmd {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => {
                self.ring.push(to);
                self.current = to;
            }
            PathCommand::QuadTo { ctrl, to } => {
                let from = self.current;
                for i in 0..steps {
                    let t = i as f64 / steps as f64;
                    self.ring.push(quadratic_point(from, ctrl, to, t));
                }
                if options.close_curve_gaps {
                    self.ring.push(to);
                }
                self.current = to;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let from = self.current;
                for i in 0..steps {
                    let t = i as f64 / steps as f64;
                    self.ring.push(cubic_point(from, ctrl1, ctrl2, to, t));
                }
                if options.close_curve_gaps {
                    self.ring.push(to);
                }
                self.current = to;
            }
            // Rings are implicitly closed.
            PathCommand::Close => {}
        }

        self
    }
}

/// Degree-2 Bernstein evaluation.
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Degree-3 Bernstein evaluation.
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * t * mt * mt;
    let c = 3.0 * t * t * mt;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_path() -> Vec<PathCommand> {
        vec![
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::line_to(10.0, 10.0),
            PathCommand::line_to(0.0, 10.0),
            PathCommand::Close,
        ]
    }

    #[test]
    fn test_square_yields_single_ring() {
        let mp = tessellate(&square_path(), 20);
        assert_eq!(mp.len(), 1);
        assert_eq!(mp.polygons[0].rings.len(), 1);
        assert_eq!(
            mp.polygons[0].rings[0],
            Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
        );
    }

    #[test]
    fn test_empty_path_is_degenerate_ring() {
        let mp = tessellate(&[], 20);
        assert_eq!(mp.len(), 1);
        assert!(mp.polygons[0].rings[0].is_empty());
        assert!(mp.polygons[0].is_empty());
    }

    #[test]
    fn test_quadratic_single_step_keeps_endpoint() {
        let path = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::quad_to(5.0, 10.0, 10.0, 0.0),
        ];
        let ring = flatten_ring(&path, &TessellationOptions::with_curve_steps(1));
        // move, sample at t = 0, exact endpoint
        assert_eq!(
            ring,
            Ring::from_xy(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0)])
        );
    }

    #[test]
    fn test_curve_without_gap_closing() {
        let path = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::cubic_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0),
            PathCommand::line_to(5.0, -5.0),
        ];
        let options = TessellationOptions {
            curve_steps: 4,
            close_curve_gaps: false,
        };
        let ring = flatten_ring(&path, &options);
        // 1 move + 4 samples + 1 line
        assert_eq!(ring.len(), 6);
        assert_eq!(ring.points[2], Point::new(1.5625, 5.625));
        assert_eq!(ring.points[5], Point::new(5.0, -5.0));
    }

    #[test]
    fn test_curve_samples_lie_on_bezier() {
        let mid = quadratic_point(
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
            0.5,
        );
        assert_eq!(mid, Point::new(5.0, 5.0));

        let end = cubic_point(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(7.0, 1.0),
            1.0,
        );
        assert_eq!(end, Point::new(7.0, 1.0));
    }

    #[test]
    fn test_second_move_to_extends_same_ring() {
        let path = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(1.0, 0.0),
            PathCommand::Close,
            PathCommand::move_to(5.0, 5.0),
            PathCommand::line_to(6.0, 5.0),
        ];
        let mp = tessellate(&path, 20);
        assert_eq!(mp.polygons[0].rings.len(), 1);
        assert_eq!(mp.polygons[0].rings[0].len(), 4);
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let path = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::quad_to(5.0, 10.0, 10.0, 0.0),
        ];
        let ring = flatten_ring(&path, &TessellationOptions::with_curve_steps(0));
        assert_eq!(ring.len(), 3);
    }
}
