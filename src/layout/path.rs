//! Renderer-agnostic path descriptions

use super::types::Point;

/// A segment in a resolved path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
}

/// An ordered list of path segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn quadratic_to(mut self, control: Point, end: Point) -> Self {
        self.segments.push(PathSegment::QuadraticTo { control, end });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every point referenced by the path, control points included
    pub fn points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .flat_map(|seg| match seg {
                PathSegment::MoveTo(p) => vec![*p],
                PathSegment::QuadraticTo { control, end } => vec![*control, *end],
            })
            .collect()
    }
}
