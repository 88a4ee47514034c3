//! Connector routing between the center node and orbiting nodes

use super::path::ResolvedPath;
use super::types::{Node, NodeId, Point};

/// Fraction of the visible connector length used as the curve's bend
pub const CURVATURE: f64 = 0.22;

/// Upper bound on how far the control point leaves the straight line
pub const MAX_BEND: f64 = 64.0;

/// Geometry of a single curved connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorRoute {
    /// Where the connector leaves the center node's boundary
    pub start: Point,
    /// Where the connector meets the target node's boundary
    pub end: Point,
    /// Quadratic Bezier control point
    pub control: Point,
}

impl ConnectorRoute {
    /// A route collapsed to a single point
    pub fn collapsed(at: Point) -> Self {
        Self {
            start: at,
            end: at,
            control: at,
        }
    }

    /// Straight-line length between the two boundary points
    pub fn chord_length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Path description: move to `start`, quadratic curve to `end`
    pub fn path(&self) -> ResolvedPath {
        ResolvedPath::new()
            .move_to(self.start)
            .quadratic_to(self.control, self.end)
    }
}

/// A connector drawn from the center node to one orbiting node
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub route: ConnectorRoute,
    pub color: Option<String>,
}

impl Edge {
    /// Route an edge between two placed nodes using the given curve shape
    pub fn between(center: &Node, target: &Node, curvature: f64, max_bend: f64) -> Self {
        Self {
            from: center.id.clone(),
            to: target.id.clone(),
            route: route_with(
                center.position,
                center.boundary_radius,
                target.position,
                target.boundary_radius,
                curvature,
                max_bend,
            ),
            color: target.visual.color.clone(),
        }
    }
}

/// Route a connector with the default curve shape
pub fn route(
    center: Point,
    center_radius: f64,
    target: Point,
    target_radius: f64,
) -> ConnectorRoute {
    route_with(
        center,
        center_radius,
        target,
        target_radius,
        CURVATURE,
        MAX_BEND,
    )
}

/// Route a connector from `center` to `target`
///
/// The end points sit on each node's boundary circle, facing each other.
/// The control point is the chord midpoint pushed along the chord's left
/// normal by `min(max_bend, length * curvature)`.
///
/// Coincident centers have no direction; the whole route collapses onto
/// `center` instead.
pub fn route_with(
    center: Point,
    center_radius: f64,
    target: Point,
    target_radius: f64,
    curvature: f64,
    max_bend: f64,
) -> ConnectorRoute {
    if center == target {
        return ConnectorRoute::collapsed(center);
    }

    let outward = (target.y - center.y).atan2(target.x - center.x);
    let inward = (center.y - target.y).atan2(center.x - target.x);
    let start = center.polar_offset(outward, center_radius);
    let end = target.polar_offset(inward, target_radius);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len = dx.hypot(dy);
    let (nx, ny) = if len > 0.0 {
        (-dy / len, dx / len)
    } else {
        (0.0, 0.0)
    };
    let bend = max_bend.min(len * curvature);
    let mid = start.midpoint(end);

    ConnectorRoute {
        start,
        end,
        control: Point::new(mid.x + nx * bend, mid.y + ny * bend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints_on_boundaries() {
        let center = Point::new(0.0, 0.0);
        let target = Point::new(200.0, 150.0);
        let r = route(center, 70.0, target, 72.0);

        assert!((r.start.distance_to(center) - 70.0).abs() < EPS);
        assert!((r.end.distance_to(target) - 72.0).abs() < EPS);
    }

    #[test]
    fn test_horizontal_route_bends_downward() {
        let r = route(Point::new(0.0, 0.0), 10.0, Point::new(100.0, 0.0), 10.0);

        assert!((r.start.x - 10.0).abs() < EPS);
        assert!((r.end.x - 90.0).abs() < EPS);
        // chord of 80 bends by 80 * 0.22
        assert!((r.control.x - 50.0).abs() < EPS);
        assert!((r.control.y - 17.6).abs() < EPS);
    }

    #[test]
    fn test_bend_is_capped() {
        let r = route(Point::new(0.0, 0.0), 0.0, Point::new(0.0, 1000.0), 0.0);
        let mid = r.start.midpoint(r.end);
        assert!((r.control.distance_to(mid) - MAX_BEND).abs() < EPS);
    }

    #[test]
    fn test_coincident_points_collapse() {
        let p = Point::new(12.5, -3.0);
        let r = route(p, 0.0, p, 0.0);
        assert_eq!(r, ConnectorRoute::collapsed(p));

        let r = route(p, 40.0, p, 40.0);
        assert_eq!(r.start, p);
        assert_eq!(r.end, p);
        assert_eq!(r.control, p);
    }

    #[test]
    fn test_touching_boundaries_use_midpoint() {
        // boundaries meet exactly, so the chord has zero length
        let r = route(Point::new(0.0, 0.0), 50.0, Point::new(100.0, 0.0), 50.0);
        assert!(r.chord_length() < EPS);
        assert!(r.control.is_finite());
        assert!((r.control.x - 50.0).abs() < EPS);
        assert!(r.control.y.abs() < EPS);
    }

    #[test]
    fn test_path_segments() {
        let r = route(Point::new(0.0, 0.0), 0.0, Point::new(10.0, 0.0), 0.0);
        let path = r.path();
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.points(), vec![r.start, r.control, r.end]);
    }

    #[test]
    fn test_edge_takes_target_color() {
        use super::super::types::NodeVisual;

        let center = Node::new("core", Point::origin(), 70.0);
        let hub = Node::new("voice", Point::new(240.0, 0.0), 72.0)
            .with_visual(NodeVisual::new("Voice").with_color("#52E3C2"));
        let edge = Edge::between(&center, &hub, CURVATURE, MAX_BEND);

        assert_eq!(edge.from, NodeId::new("core"));
        assert_eq!(edge.to, NodeId::new("voice"));
        assert_eq!(edge.color.as_deref(), Some("#52E3C2"));
        assert!((edge.route.start.x - 70.0).abs() < EPS);
        assert!((edge.route.end.x - 168.0).abs() < EPS);
    }
}
