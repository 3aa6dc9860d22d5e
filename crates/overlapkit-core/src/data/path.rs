use serde::{Deserialize, Serialize};

use super::Point;

/// One absolute drawing command of a shape outline.
///
/// The set is closed: path data using any other SVG command is filtered out
/// at parse time, so consumers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathCommand {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::MoveTo { to: Point::new(x, y) }
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::LineTo { to: Point::new(x, y) }
    }

    pub fn quad_to(cx: f64, cy: f64, x: f64, y: f64) -> Self {
        Self::QuadTo {
            ctrl: Point::new(cx, cy),
            to: Point::new(x, y),
        }
    }

    pub fn cubic_to(c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        Self::CubicTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        }
    }

    /// The point the pen rests on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo { to }
            | Self::LineTo { to }
            | Self::QuadTo { to, .. }
            | Self::CubicTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    /// SVG command letter.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo { .. } => 'M',
            Self::LineTo { .. } => 'L',
            Self::QuadTo { .. } => 'Q',
            Self::CubicTo { .. } => 'C',
            Self::Close => 'Z',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_point() {
        assert_eq!(
            PathCommand::cubic_to(1.0, 1.0, 2.0, 2.0, 3.0, 4.0).end_point(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(PathCommand::Close.end_point(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&PathCommand::line_to(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"cmd":"line_to","to":{"x":1.0,"y":2.0}}"#);
        let back: PathCommand = serde_json::from_str(r#"{"cmd":"close"}"#).unwrap();
        assert_eq!(back, PathCommand::Close);
    }
}
