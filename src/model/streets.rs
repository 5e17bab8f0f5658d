//! Street network entities and their indexed owner

use geo::Point;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{INVALID_NODE_ID, NodeId, WayId};

/// A geolocated point in the street graph, with free-form attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// OSM-style identifier of the node
    pub id: NodeId,
    /// Node coordinates, x = longitude and y = latitude
    pub geometry: Point<f64>,
    /// Free-form key/value attributes
    pub attributes: HashMap<String, String>,
}

impl Node {
    /// `(latitude, longitude)` in degrees.
    pub fn location(&self) -> (f64, f64) {
        (self.geometry.y(), self.geometry.x())
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Key at `index`, or `None` past the end. Iteration order is
    /// unspecified but stable between reads.
    pub fn attribute_key_at(&self, index: usize) -> Option<&str> {
        self.attributes.keys().nth(index).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Attribute value for `key`, or the empty string when the key is
    /// absent. An absent key and an empty value are indistinguishable
    /// here; [`Node::has_attribute`] is the presence check.
    pub fn attribute_value(&self, key: &str) -> &str {
        self.attributes.get(key).map_or("", String::as_str)
    }
}

/// An ordered sequence of node references forming a path or shape, with
/// free-form attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Way {
    /// OSM-style identifier of the way
    pub id: WayId,
    /// Node identifiers in shape order; not checked against the node set
    pub node_ids: Vec<NodeId>,
    /// Free-form key/value attributes
    pub attributes: HashMap<String, String>,
}

impl Way {
    /// Number of node references on the way.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Node identifier at `index` in shape order, or [`INVALID_NODE_ID`]
    /// past the end.
    pub fn node_id_at(&self, index: usize) -> NodeId {
        self.node_ids.get(index).copied().unwrap_or(INVALID_NODE_ID)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Key at `index`, or `None` past the end. Iteration order is
    /// unspecified but stable between reads.
    pub fn attribute_key_at(&self, index: usize) -> Option<&str> {
        self.attributes.keys().nth(index).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Attribute value for `key`, or the empty string when the key is
    /// absent.
    pub fn attribute_value(&self, key: &str) -> &str {
        self.attributes.get(key).map_or("", String::as_str)
    }
}

/// All nodes and ways of one loaded markup extract.
///
/// Ordinal positions follow input arrival order. Lookups never fail hard:
/// a miss is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetMap {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ways: Vec<Way>,
    pub(crate) node_index: HashMap<NodeId, usize>,
    pub(crate) way_index: HashMap<WayId, usize>,
}

impl StreetMap {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    /// Node at ordinal `index`, or `None` past the end.
    pub fn node_by_index(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Node with the given identifier, or `None` if absent.
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// Way at ordinal `index`, or `None` past the end.
    pub fn way_by_index(&self, index: usize) -> Option<&Way> {
        self.ways.get(index)
    }

    /// Way with the given identifier, or `None` if absent.
    pub fn way_by_id(&self, id: WayId) -> Option<&Way> {
        self.way_index.get(&id).map(|&idx| &self.ways[idx])
    }

    /// All nodes in arrival order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All ways in arrival order.
    pub fn ways(&self) -> &[Way] {
        &self.ways
    }
}
