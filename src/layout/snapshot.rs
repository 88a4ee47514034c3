//! Persistable node positions
//!
//! A [`LayoutSnapshot`] maps node ids to positions. Its serialized form is a
//! small JSON document:
//!
//! ```json
//! {"version": 1, "pos": {"automation": {"x": 12.0, "y": -40.5}}}
//! ```
//!
//! Documents without a `version` field are the legacy unversioned layout and
//! are read as version 1.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::types::{NodeId, Point};

/// Highest schema version this crate can read and the one it writes
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur when decoding a serialized snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot document must be an object with a `pos` map")]
    Shape,

    #[error("unsupported snapshot version {found} (newest supported is {})", SNAPSHOT_VERSION)]
    UnsupportedVersion { found: u64 },
}

/// Positions of every node on the map, keyed by id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    positions: BTreeMap<NodeId, Point>,
}

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    version: u32,
    pos: &'a BTreeMap<NodeId, Point>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot by zipping ids with positions, in order
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NodeId, Point)>) -> Self {
        Self {
            positions: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, Point> {
        self.positions.iter()
    }

    /// Drop every entry whose id is not in `ids`
    pub fn restrict_to<'a>(&self, ids: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let keep: HashSet<&NodeId> = ids.into_iter().collect();
        Self {
            positions: self
                .positions
                .iter()
                .filter(|(id, _)| keep.contains(id))
                .map(|(id, p)| (id.clone(), *p))
                .collect(),
        }
    }

    /// Serialize to the versioned JSON document
    pub fn to_json(&self) -> String {
        let doc = SnapshotDocument {
            version: SNAPSHOT_VERSION,
            pos: &self.positions,
        };
        // BTreeMap<NodeId, Point> with string keys always serializes
        serde_json::to_string(&doc).unwrap_or_default()
    }

    /// Decode a serialized snapshot, keeping only well-formed entries
    ///
    /// The document as a whole must be valid JSON with a `pos` object and a
    /// supported version. Inside `pos`, entries that are not objects with
    /// finite numeric `x` and `y` are skipped rather than failing the load.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let doc: Value = serde_json::from_str(text)?;
        let obj = doc.as_object().ok_or(SnapshotError::Shape)?;

        if let Some(version) = obj.get("version") {
            let found = decode_version(version).ok_or(SnapshotError::Shape)?;
            if found > u64::from(SNAPSHOT_VERSION) {
                return Err(SnapshotError::UnsupportedVersion { found });
            }
        }

        let pos = obj
            .get("pos")
            .and_then(Value::as_object)
            .ok_or(SnapshotError::Shape)?;

        let mut positions = BTreeMap::new();
        for (id, entry) in pos {
            match decode_point(entry) {
                Some(point) => {
                    positions.insert(NodeId::new(id.as_str()), point);
                }
                None => log::debug!("dropping malformed snapshot entry for '{}'", id),
            }
        }

        Ok(Self { positions })
    }
}

/// Non-negative integral version, whether written as `1` or `1.0`
fn decode_version(value: &Value) -> Option<u64> {
    if let Some(v) = value.as_u64() {
        return Some(v);
    }
    let v = value.as_f64()?;
    (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64).then(|| v as u64)
}

// Out-of-range numbers such as 1e400 parse (serde_json `arbitrary_precision`)
// and then fail the finite check here, so only their entry is dropped.
fn decode_point(entry: &Value) -> Option<Point> {
    let x = entry.get("x")?.as_f64()?;
    let y = entry.get("y")?.as_f64()?;
    let point = Point::new(x, y);
    point.is_finite().then_some(point)
}

impl<'a> IntoIterator for &'a LayoutSnapshot {
    type Item = (&'a NodeId, &'a Point);
    type IntoIter = btree_map::Iter<'a, NodeId, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> LayoutSnapshot {
        LayoutSnapshot::from_pairs([
            (NodeId::new("b"), Point::new(-1.5, 2.0)),
            (NodeId::new("a"), Point::new(10.0, 0.0)),
        ])
    }

    #[test]
    fn test_serialized_form_is_versioned_and_sorted() {
        insta::assert_snapshot!(
            sample().to_json(),
            @r#"{"version":1,"pos":{"a":{"x":10.0,"y":0.0},"b":{"x":-1.5,"y":2.0}}}"#
        );
    }

    #[test]
    fn test_round_trip() {
        let snapshot = sample();
        let restored = LayoutSnapshot::from_json(&snapshot.to_json()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_legacy_unversioned_document() {
        let restored = LayoutSnapshot::from_json(r#"{"pos":{"a":{"x":1,"y":2}}}"#).unwrap();
        assert_eq!(restored.get(&NodeId::new("a")), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let text = r#"{"version":1,"pos":{
            "good":{"x":3,"y":4},
            "missing_y":{"x":3},
            "stringy":{"x":"3","y":4},
            "scalar":7
        }}"#;
        let restored = LayoutSnapshot::from_json(text).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get(&NodeId::new("good")), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_out_of_range_number_drops_only_its_entry() {
        let text = r#"{"version":1,"pos":{"automation":{"x":5,"y":6},"assets":{"x":1e400,"y":1}}}"#;
        let restored = LayoutSnapshot::from_json(text).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(
            restored.get(&NodeId::new("automation")),
            Some(Point::new(5.0, 6.0))
        );
        assert!(!restored.contains(&NodeId::new("assets")));
    }

    #[test]
    fn test_float_version_is_accepted() {
        let restored =
            LayoutSnapshot::from_json(r#"{"version":1.0,"pos":{"a":{"x":1,"y":2}}}"#).unwrap();
        assert_eq!(restored.get(&NodeId::new("a")), Some(Point::new(1.0, 2.0)));

        assert!(matches!(
            LayoutSnapshot::from_json(r#"{"version":2.0,"pos":{}}"#),
            Err(SnapshotError::UnsupportedVersion { found: 2 })
        ));
        assert!(matches!(
            LayoutSnapshot::from_json(r#"{"version":1.5,"pos":{}}"#),
            Err(SnapshotError::Shape)
        ));
    }

    #[test]
    fn test_rejects_future_version() {
        let err = LayoutSnapshot::from_json(r#"{"version":2,"pos":{}}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedVersion { found: 2 }));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(matches!(
            LayoutSnapshot::from_json("[1,2]"),
            Err(SnapshotError::Shape)
        ));
        assert!(matches!(
            LayoutSnapshot::from_json(r#"{"version":1}"#),
            Err(SnapshotError::Shape)
        ));
        assert!(matches!(
            LayoutSnapshot::from_json("not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn test_restrict_to_current_ids() {
        let ids = [NodeId::new("a"), NodeId::new("c")];
        let restricted = sample().restrict_to(ids.iter());
        assert_eq!(restricted.len(), 1);
        assert!(restricted.contains(&NodeId::new("a")));
        assert!(!restricted.contains(&NodeId::new("b")));
    }
}
