//! SVG serialization of path descriptions

use crate::layout::{PathSegment, ResolvedPath};

/// Convert a path to an SVG path `d` attribute string
pub fn to_svg_d(path: &ResolvedPath) -> String {
    let mut d = String::new();

    for seg in &path.segments {
        if !d.is_empty() {
            d.push(' ');
        }
        match seg {
            PathSegment::MoveTo(p) => {
                d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
            }
            PathSegment::QuadraticTo { control, end } => {
                // SVG Q command: Q cx cy ex ey
                d.push_str(&format!(
                    "Q{:.2} {:.2} {:.2} {:.2}",
                    control.x, control.y, end.x, end.y
                ));
            }
        }
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{route, Point};

    #[test]
    fn test_empty_path() {
        assert_eq!(to_svg_d(&ResolvedPath::new()), "");
    }

    #[test]
    fn test_coordinates_use_two_decimals() {
        let path = ResolvedPath::new()
            .move_to(Point::new(0.0, 0.0))
            .quadratic_to(Point::new(1.0 / 3.0, -2.5), Point::new(10.5, 2.25));
        assert_eq!(to_svg_d(&path), "M0.00 0.00 Q0.33 -2.50 10.50 2.25");
    }

    #[test]
    fn test_connector_path() {
        let r = route(Point::new(0.0, 0.0), 10.0, Point::new(100.0, 0.0), 10.0);
        insta::assert_snapshot!(to_svg_d(&r.path()), @"M10.00 0.00 Q50.00 17.60 90.00 0.00");
    }
}
