//! Error types for the layout engine

use thiserror::Error;

use super::types::{NodeId, Point};

/// Errors that can occur while building or mutating a map layout
///
/// Geometry itself never fails; these cover invalid node sets and events
/// that refer to nodes the map does not have.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Two nodes share an id
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: NodeId },

    /// A drag event or lookup referenced an id not on the map
    #[error("unknown node '{id}'")]
    UnknownNode { id: NodeId, suggestions: Vec<String> },

    /// A drag event carried a NaN or infinite coordinate
    #[error("invalid position ({}, {}) for node '{id}'", .position.x, .position.y)]
    InvalidPosition { id: NodeId, position: Point },

    /// A radius or other dimension is negative or not finite
    #[error("invalid {what}: {value}")]
    InvalidDimension { what: String, value: f64 },

    /// The center node cannot be dragged or addressed as an orbit node
    #[error("node '{id}' is the center node and has a fixed position")]
    FixedNode { id: NodeId },
}

impl LayoutError {
    /// Create an unknown node error, suggesting ids with a shared prefix
    pub fn unknown<'a>(id: NodeId, known: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let head: String = id.as_str().chars().take(2).collect();
        let suggestions = if head.is_empty() {
            vec![]
        } else {
            known
                .into_iter()
                .filter(|k| k.as_str().starts_with(&head))
                .map(|k| k.to_string())
                .collect()
        };
        Self::UnknownNode { id, suggestions }
    }

    /// Create an invalid dimension error
    pub fn invalid_dimension(what: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            what: what.into(),
            value,
        }
    }

    /// Check that a dimension is finite and non-negative
    pub fn check_dimension(what: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid_dimension(what, value))
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownNode { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}
