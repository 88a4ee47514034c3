//! Orbital layout engine
//!
//! This module places orbiting nodes evenly on a circle around a center
//! node, routes curved connectors between node boundaries, and tracks the
//! user's position overrides for a map session.

pub mod config;
pub mod error;
pub mod orbit;
pub mod path;
pub mod routing;
pub mod session;
pub mod snapshot;
pub mod types;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use orbit::orbit_positions;
pub use path::{PathSegment, ResolvedPath};
pub use routing::{route, route_with, ConnectorRoute, Edge, CURVATURE, MAX_BEND};
pub use session::MindMap;
pub use snapshot::{LayoutSnapshot, SnapshotError, SNAPSHOT_VERSION};
pub use types::{BoundingBox, Node, NodeId, NodeVisual, OrbitSpec, Point, PositionOverride};
