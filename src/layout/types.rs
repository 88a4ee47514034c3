//! Core types for the layout engine

use serde::{Deserialize, Serialize};

/// A 2D point in the map's coordinate system
///
/// The origin is the focal (center) node of the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point at `distance` from this one in direction `angle` (radians)
    pub fn polar_offset(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box containing a circle
    pub fn around_circle(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// Unique identifier of a node on the map
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Inputs for evenly distributing nodes on a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    pub count: usize,
    pub radius: f64,
    /// Starting angle in radians
    pub offset: f64,
}

impl OrbitSpec {
    pub fn new(count: usize, radius: f64) -> Self {
        Self {
            count,
            radius,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Positions of every node on this orbit, in index order
    pub fn positions(&self) -> Vec<Point> {
        super::orbit::orbit_positions(self.count, self.radius, self.offset)
    }
}

/// Presentation metadata carried alongside a node
///
/// The layout core never inspects these fields; they are passed through to
/// whichever renderer draws the node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeVisual {
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl NodeVisual {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            color: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Label text as shown on the chip, icon first
    pub fn display_text(&self) -> String {
        match &self.icon {
            Some(icon) if !icon.is_empty() => format!("{} {}", icon, self.label),
            _ => self.label.clone(),
        }
    }
}

/// A node placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    /// Radius of the node's visual footprint; connectors stop at this circle
    pub boundary_radius: f64,
    pub visual: NodeVisual,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, position: Point, boundary_radius: f64) -> Self {
        Self {
            id: id.into(),
            position,
            boundary_radius,
            visual: NodeVisual::default(),
        }
    }

    pub fn with_visual(mut self, visual: NodeVisual) -> Self {
        self.visual = visual;
        self
    }
}

/// Drag-end event: the user released node `id` at `position`
#[derive(Debug, Clone, PartialEq)]
pub struct PositionOverride {
    pub id: NodeId,
    pub position: Point,
}

impl PositionOverride {
    pub fn new(id: impl Into<NodeId>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
