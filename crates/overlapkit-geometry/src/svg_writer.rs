//! Path data output for highlighting resolved regions.
//!
//! Coordinates are written with Rust's shortest round-trip float formatting,
//! so parsing the output reproduces the input exactly.

use std::fmt::Write;

use overlapkit_core::{PathCommand, Polygon, Ring};

/// Serialize one ring as `M x y L x y ... Z`. Empty rings give an empty string.
pub fn ring_to_svg_path(ring: &Ring) -> String {
    let mut d = String::new();
    push_ring(&mut d, ring);
    d
}

/// Serialize every ring of a polygon (outer boundary first, then holes) as
/// separate closed subpaths.
pub fn polygon_to_svg_path(polygon: &Polygon) -> String {
    let mut d = String::new();
    for ring in polygon.rings.iter().filter(|r| !r.is_empty()) {
        if !d.is_empty() {
            d.push(' ');
        }
        push_ring(&mut d, ring);
    }
    d
}

/// Serialize drawing commands back to path data.
pub fn commands_to_svg_path(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { to } => format!("M{} {}", to.x, to.y),
            PathCommand::LineTo { to } => format!("L{} {}", to.x, to.y),
            PathCommand::QuadTo { ctrl, to } => {
                format!("Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => format!(
                "C{} {} {} {} {} {}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn push_ring(d: &mut String, ring: &Ring) {
    let Some((first, rest)) = ring.points.split_first() else {
        return;
    };
    // Writing to a String cannot fail.
    let _ = write!(d, "M{} {} ", first.x, first.y);
    for p in rest {
        let _ = write!(d, "L{} {} ", p.x, p.y);
    }
    d.push('Z');
}
