//! Configuration for the layout engine

use serde::Deserialize;

use super::error::LayoutError;
use super::routing::{CURVATURE, MAX_BEND};

/// Geometry of the orbit and its connectors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance from the center node to each orbiting node
    pub orbit_radius: f64,

    /// Angle of the first orbiting node, in radians
    pub orbit_offset: f64,

    /// Boundary radius of the center node
    pub center_radius: f64,

    /// Boundary radius of every orbiting node
    pub node_radius: f64,

    /// Connector bend as a fraction of its visible length
    pub curvature: f64,

    /// Largest connector bend
    pub max_bend: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 240.0,
            orbit_offset: std::f64::consts::PI / 8.0,
            center_radius: 70.0,
            node_radius: 72.0,
            curvature: CURVATURE,
            max_bend: MAX_BEND,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orbit radius
    pub fn with_orbit_radius(mut self, radius: f64) -> Self {
        self.orbit_radius = radius;
        self
    }

    /// Set the starting angle of the orbit
    pub fn with_orbit_offset(mut self, offset: f64) -> Self {
        self.orbit_offset = offset;
        self
    }

    /// Set center and orbiting node boundary radii
    pub fn with_boundaries(mut self, center: f64, node: f64) -> Self {
        self.center_radius = center;
        self.node_radius = node;
        self
    }

    /// Set the connector curve shape
    pub fn with_curve(mut self, curvature: f64, max_bend: f64) -> Self {
        self.curvature = curvature;
        self.max_bend = max_bend;
        self
    }

    /// Check that every dimension is usable
    pub fn validate(&self) -> Result<(), LayoutError> {
        LayoutError::check_dimension("orbit radius", self.orbit_radius)?;
        LayoutError::check_dimension("center radius", self.center_radius)?;
        LayoutError::check_dimension("node radius", self.node_radius)?;
        LayoutError::check_dimension("curvature", self.curvature)?;
        LayoutError::check_dimension("max bend", self.max_bend)?;
        if !self.orbit_offset.is_finite() {
            return Err(LayoutError::invalid_dimension(
                "orbit offset",
                self.orbit_offset,
            ));
        }
        Ok(())
    }
}
