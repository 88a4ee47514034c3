//! A live mind map: nodes, their current layout, and the edges between them

use log::debug;

use crate::config::MapConfig;
use crate::persistence::LayoutStore;

use super::error::LayoutError;
use super::routing::Edge;
use super::snapshot::LayoutSnapshot;
use super::types::{Node, NodeId, OrbitSpec, Point, PositionOverride};
use super::LayoutConfig;

/// One visualization session
///
/// The center node is fixed at the origin. Orbiting nodes start on the
/// default orbit and move only through [`MindMap::apply`]; every accepted
/// move is written through to the store.
#[derive(Debug, Clone)]
pub struct MindMap {
    layout: LayoutConfig,
    center: Node,
    nodes: Vec<Node>,
    defaults: LayoutSnapshot,
}

impl MindMap {
    /// Build a session with every node on its default orbit position
    pub fn new(config: &MapConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let layout = config.layout.clone();

        let orbit = OrbitSpec::new(config.nodes.len(), layout.orbit_radius)
            .with_offset(layout.orbit_offset)
            .positions();

        let nodes: Vec<Node> = config
            .nodes
            .iter()
            .zip(orbit)
            .map(|(def, position)| {
                let radius = def.radius.unwrap_or(layout.node_radius);
                Node::new(def.id.clone(), position, radius)
                    .with_visual(def.visual.clone())
            })
            .collect();

        let defaults =
            LayoutSnapshot::from_pairs(nodes.iter().map(|n| (n.id.clone(), n.position)));

        let center_radius = config.center.radius.unwrap_or(layout.center_radius);
        let center = Node::new(config.center.id.clone(), Point::origin(), center_radius)
            .with_visual(config.center.visual.clone());

        Ok(Self {
            layout,
            center,
            nodes,
            defaults,
        })
    }

    /// Build a session and overlay whatever layout the store has saved
    pub fn open(config: &MapConfig, store: &dyn LayoutStore) -> Result<Self, LayoutError> {
        let mut map = Self::new(config)?;
        map.restore(store);
        Ok(map)
    }

    /// Replace the current layout with the saved one
    ///
    /// Every node goes back to its default orbit position first, then takes
    /// its saved position if the store has one. Saved entries for ids this
    /// map does not have are ignored. Returns how many saved positions were
    /// applied.
    pub fn restore(&mut self, store: &dyn LayoutStore) -> usize {
        let saved = store.load().unwrap_or_else(|| {
            debug!("no saved layout to restore");
            LayoutSnapshot::new()
        });

        let matching = saved.restrict_to(self.nodes.iter().map(|n| &n.id));
        if matching.len() < saved.len() {
            debug!(
                "ignoring {} saved position(s) for unknown nodes",
                saved.len() - matching.len()
            );
        }

        for node in &mut self.nodes {
            if let Some(position) = matching.get(&node.id).or(self.defaults.get(&node.id)) {
                node.position = position;
            }
        }
        debug!("restored {} node position(s)", matching.len());
        matching.len()
    }

    /// Apply a drag-end event and persist the result
    pub fn apply(
        &mut self,
        event: PositionOverride,
        store: &mut dyn LayoutStore,
    ) -> Result<(), LayoutError> {
        if event.id == self.center.id {
            return Err(LayoutError::FixedNode { id: event.id });
        }
        if !event.position.is_finite() {
            return Err(LayoutError::InvalidPosition {
                id: event.id,
                position: event.position,
            });
        }

        let ids: Vec<NodeId> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == event.id)
            .ok_or_else(|| LayoutError::unknown(event.id.clone(), ids.iter()))?;

        debug!(
            "moving '{}' to ({}, {})",
            node.id, event.position.x, event.position.y
        );
        node.position = event.position;
        store.save(&self.snapshot());
        Ok(())
    }

    /// Put every node back on the default orbit and persist that
    pub fn reset(&mut self, store: &mut dyn LayoutStore) {
        for node in &mut self.nodes {
            if let Some(position) = self.defaults.get(&node.id) {
                node.position = position;
            }
        }
        debug!("layout reset to default orbit");
        store.save(&self.snapshot());
    }

    /// Current positions of the orbiting nodes
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_pairs(self.nodes.iter().map(|n| (n.id.clone(), n.position)))
    }

    /// Positions the orbiting nodes start at
    pub fn default_snapshot(&self) -> &LayoutSnapshot {
        &self.defaults
    }

    /// Connectors from the center to every orbiting node, in orbit order
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes
            .iter()
            .map(|node| {
                Edge::between(
                    &self.center,
                    node,
                    self.layout.curvature,
                    self.layout.max_bend,
                )
            })
            .collect()
    }

    pub fn center(&self) -> &Node {
        &self.center
    }

    /// Orbiting nodes, in orbit order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}
