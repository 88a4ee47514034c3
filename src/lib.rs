//! Orbit Map - an orbital mind-map layout engine
//!
//! This library lays out nodes evenly around a center node, routes curved
//! connectors that stop at node boundaries, keeps user-dragged positions in a
//! persisted layout snapshot, and renders the result as SVG.
//!
//! # Example
//!
//! ```rust
//! use orbit_map::render;
//!
//! let svg = render(r#"
//!     [center]
//!     id = "core"
//!     label = "Core"
//!
//!     [[nodes]]
//!     id = "voice"
//!     label = "Voice"
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod actions;
pub mod config;
pub mod layout;
pub mod persistence;
pub mod provisioning;
pub mod renderer;

pub use config::{ConfigError, MapConfig, Theme};
pub use layout::{
    orbit_positions, route, ConnectorRoute, LayoutConfig, LayoutError, LayoutSnapshot, MindMap,
    NodeId, Point, PositionOverride,
};
pub use persistence::{KeyedStore, LayoutStore, NullStore};
pub use renderer::{render_svg, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the map definition
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error building the layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: log every node and connector
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a TOML map definition to SVG with default configuration
///
/// Nodes are drawn at their default orbit positions; nothing is persisted.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML map definition to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use orbit_map::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_svg(SvgConfig::default().with_padding(10.0));
///
/// let svg = render_with_config("[center]\nid = \"hub\"\nlabel = \"Hub\"", config).unwrap();
/// assert!(svg.contains("Hub"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let map_config = MapConfig::from_toml(source)?;
    let map = MindMap::new(&map_config)?;
    Ok(render_map(&map, &map_config.theme, &config))
}

/// Render an existing session
pub fn render_map(map: &MindMap, theme: &Theme, config: &RenderConfig) -> String {
    if config.debug {
        log_layout(map);
    }
    render_svg(map, theme, &config.svg)
}

fn log_layout(map: &MindMap) {
    let center = map.center();
    log::info!(
        "[{}] x={:.1} y={:.1} r={:.1}",
        center.id,
        center.position.x,
        center.position.y,
        center.boundary_radius
    );
    for node in map.nodes() {
        log::info!(
            "  [{}] x={:.1} y={:.1} r={:.1}",
            node.id,
            node.position.x,
            node.position.y,
            node.boundary_radius
        );
    }
    for edge in map.edges() {
        let r = &edge.route;
        log::info!(
            "  {} -> {}: ({:.1}, {:.1}) ~ ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            edge.from,
            edge.to,
            r.start.x,
            r.start.y,
            r.control.x,
            r.control.y,
            r.end.x,
            r.end.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_NODES: &str = r#"
[center]
id = "core"
label = "Core"

[[nodes]]
id = "a"
label = "Alpha"

[[nodes]]
id = "b"
label = "Beta"
"#;

    #[test]
    fn test_render_simple_map() {
        let svg = render(TWO_NODES).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Alpha"));
        assert!(svg.contains("Beta"));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_render_center_only() {
        let svg = render("[center]\nid = \"solo\"\nlabel = \"Solo\"").unwrap();
        assert!(svg.contains("Solo"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_render_reports_config_errors() {
        let err = render("[[nodes]]\nid = \"a\"").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
        assert!(err.to_string().starts_with("config error"));
    }

    #[test]
    fn test_render_debug_mode() {
        let config = RenderConfig::new().with_debug(true);
        let svg = render_with_config(TWO_NODES, config).unwrap();
        assert!(svg.contains("</svg>"));
    }
}
