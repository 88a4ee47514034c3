//! Map definitions loaded from TOML
//!
//! A map file names the center node, the nodes that orbit it, the orbit
//! geometry and the theme colors used by the SVG renderer:
//!
//! ```toml
//! storage_key = "runnerb_layout"
//!
//! [layout]
//! orbit_radius = 240.0
//!
//! [center]
//! id = "core"
//! label = "Runner-B Core"
//!
//! [[nodes]]
//! id = "communications"
//! label = "Communications"
//! color = "#52E3C2"
//! radius = 80.0
//! ```
//!
//! A node's `radius` is optional; nodes without one use `layout.node_radius`
//! (or `layout.center_radius` for the center).

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{LayoutConfig, LayoutError, NodeId, NodeVisual};

/// Storage key used when a map file does not name one
pub const DEFAULT_STORAGE_KEY: &str = "runnerb_layout";

/// Errors that can occur when loading a map definition
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read map file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse map TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid map: {0}")]
    Invalid(#[from] LayoutError),
}

/// One node entry in a map definition
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeDef {
    pub id: NodeId,
    /// Boundary radius for this node alone; the `[layout]` default otherwise
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(flatten)]
    pub visual: NodeVisual,
}

impl NodeDef {
    pub fn new(id: impl Into<NodeId>, visual: NodeVisual) -> Self {
        Self {
            id: id.into(),
            radius: None,
            visual,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Colors for the rendered map
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub text: String,
    /// Connector color for nodes without one of their own
    pub connector: String,
    pub chip_fill: String,
    pub chip_stroke: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#070B14".to_string(),
            text: "#EAF6FF".to_string(),
            connector: "#52E3C2".to_string(),
            chip_fill: "rgba(255,255,255,0.08)".to_string(),
            chip_stroke: "rgba(82,227,194,0.25)".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    name: Option<String>,
    description: Option<String>,
}

/// TOML structure for deserializing map files
#[derive(Deserialize)]
struct TomlMap {
    #[serde(default)]
    metadata: Metadata,
    storage_key: Option<String>,
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    theme: Theme,
    center: NodeDef,
    #[serde(default)]
    nodes: Vec<NodeDef>,
}

/// A complete, validated map definition
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Key under which the layout snapshot is persisted
    pub storage_key: String,
    pub layout: LayoutConfig,
    pub theme: Theme,
    pub center: NodeDef,
    /// Orbiting nodes, in orbit order
    pub nodes: Vec<NodeDef>,
}

impl MapConfig {
    /// Load a map from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a map from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlMap = toml::from_str(content)?;

        let config = MapConfig {
            name: parsed.metadata.name,
            description: parsed.metadata.description,
            storage_key: parsed
                .storage_key
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            layout: parsed.layout,
            theme: parsed.theme,
            center: parsed.center,
            nodes: parsed.nodes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check geometry and node id uniqueness
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.layout.validate()?;

        let mut seen = HashSet::new();
        for def in std::iter::once(&self.center).chain(&self.nodes) {
            if !seen.insert(&def.id) {
                return Err(LayoutError::DuplicateNode { id: def.id.clone() });
            }
            if let Some(radius) = def.radius {
                LayoutError::check_dimension(&format!("radius of '{}'", def.id), radius)?;
            }
        }
        Ok(())
    }

    /// Ids of the orbiting nodes, in orbit order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            name: Some("Runner-B".to_string()),
            description: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            layout: LayoutConfig::default(),
            center: NodeDef::new("core", NodeVisual::new("Runner-B Core").with_icon("🧠")),
            nodes: vec![
                NodeDef::new(
                    "communications",
                    NodeVisual::new("Communications")
                        .with_icon("📡")
                        .with_color("#52E3C2"),
                ),
                NodeDef::new(
                    "automation",
                    NodeVisual::new("Automation")
                        .with_icon("🧩")
                        .with_color("#7B8CFF"),
                ),
                NodeDef::new(
                    "assets",
                    NodeVisual::new("Assets & Provisioning")
                        .with_icon("🗂️")
                        .with_color("#FF9B6A"),
                ),
                NodeDef::new(
                    "insights",
                    NodeVisual::new("Insights & Admin")
                        .with_icon("📈")
                        .with_color("#00FFD5"),
                ),
            ],
            theme,
        }
    }
}
