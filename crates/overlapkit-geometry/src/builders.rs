//! Path commands for shapes committed from a drag gesture.

use overlapkit_core::{PathCommand, Point, Shape};
use serde::{Deserialize, Serialize};

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Which primitive a drag gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragShape {
    Rectangle,
    Square,
    Circle,
}

impl DragShape {
    pub fn commands(self, start: Point, end: Point) -> Vec<PathCommand> {
        match self {
            Self::Rectangle => rectangle(start, end),
            Self::Square => square(start, end),
            Self::Circle => circle(start, end),
        }
    }

    /// Commit the gesture as a new shape with a generated id.
    pub fn commit(self, start: Point, end: Point) -> Shape {
        Shape::with_generated_id(self.commands(start, end))
    }
}

/// `(x, y, width, height)` of the box spanned by two corners.
fn normalized_rect(a: Point, b: Point) -> (f64, f64, f64, f64) {
    (
        a.x.min(b.x),
        a.y.min(b.y),
        (a.x - b.x).abs(),
        (a.y - b.y).abs(),
    )
}

fn rect_commands(x: f64, y: f64, w: f64, h: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(x, y),
        PathCommand::line_to(x + w, y),
        PathCommand::line_to(x + w, y + h),
        PathCommand::line_to(x, y + h),
        PathCommand::Close,
    ]
}

/// Axis-aligned rectangle spanned by the drag.
pub fn rectangle(start: Point, end: Point) -> Vec<PathCommand> {
    let (x, y, w, h) = normalized_rect(start, end);
    rect_commands(x, y, w, h)
}

/// Square anchored at the drag start, side taken from the longer drag axis
/// and extending towards the drag end.
pub fn square(start: Point, end: Point) -> Vec<PathCommand> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let size = dx.abs().max(dy.abs());
    let x = if dx < 0.0 { start.x - size } else { start.x };
    let y = if dy < 0.0 { start.y - size } else { start.y };
    rect_commands(x, y, size, size)
}

/// Circle inscribed in the drag box, centred along its longer axis.
pub fn circle(start: Point, end: Point) -> Vec<PathCommand> {
    let (x, y, w, h) = normalized_rect(start, end);
    let d = w.min(h);
    let r = d / 2.0;
    let cx = x + r + if w > h { (w - h) / 2.0 } else { 0.0 };
    let cy = y + r + if h > w { (h - w) / 2.0 } else { 0.0 };
    circle_at(Point::new(cx, cy), r)
}

/// Four cubic quarter arcs starting at the rightmost point.
pub fn circle_at(center: Point, r: f64) -> Vec<PathCommand> {
    let k = r * KAPPA;
    let (cx, cy) = (center.x, center.y);
    vec![
        PathCommand::move_to(cx + r, cy),
        PathCommand::cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r),
        PathCommand::cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy),
        PathCommand::cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r),
        PathCommand::cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy),
        PathCommand::Close,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_reversed_drag() {
        let cmds = rectangle(Point::new(10.0, 8.0), Point::new(2.0, 4.0));
        assert_eq!(cmds[0], PathCommand::move_to(2.0, 4.0));
        assert_eq!(cmds[2], PathCommand::line_to(10.0, 8.0));
        assert_eq!(cmds.len(), 5);
    }

    #[test]
    fn test_square_uses_longer_axis() {
        let cmds = square(Point::new(10.0, 10.0), Point::new(4.0, 12.0));
        // size 6, extends left from the start, down from the start
        assert_eq!(cmds[0], PathCommand::move_to(4.0, 10.0));
        assert_eq!(cmds[2], PathCommand::line_to(10.0, 16.0));
    }

    #[test]
    fn test_circle_centred_in_wide_box() {
        let cmds = circle(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
        // r = 5, centre (10, 5)
        assert_eq!(cmds[0], PathCommand::move_to(15.0, 5.0));
        assert_eq!(cmds[1].end_point(), Some(Point::new(10.0, 10.0)));
        assert_eq!(cmds[4].end_point(), Some(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_commit_assigns_fresh_ids() {
        let a = DragShape::Circle.commit(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        let b = DragShape::Circle.commit(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        assert_ne!(a.id, b.id);
        assert_eq!(a.path, b.path);
    }
}
