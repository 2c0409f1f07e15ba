//! Wire types for graph input: the `{nodes, edges}` JSON shape
//!
//! These are the caller-authored descriptions a [`Graph`](super::Graph) is
//! built from. They are also what the import/export boundary and the
//! project store round-trip, so they serialize back to the same shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External node identifier, as supplied by the caller
///
/// JSON accepts either a string or an integer in `i64::MIN..=u64::MAX`;
/// integers above `i64::MAX` land in `UInt`. Two keys denote the same
/// node when their canonical text is equal, so `1` and `"1"` collide:
/// result tables are JSON objects keyed by that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Int(i64),
    UInt(u64),
    Str(String),
}

impl NodeKey {
    /// Canonical text used for identity and as the output table key
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(n) => write!(f, "{}", n),
            NodeKey::UInt(n) => write!(f, "{}", n),
            NodeKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(n: i64) -> Self {
        NodeKey::Int(n)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::Str(s.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey::Str(s)
    }
}

/// A node as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeKey,
    /// Display label; absent labels read as the empty string
    #[serde(default)]
    pub label: String,
}

impl NodeSpec {
    pub fn new(id: impl Into<NodeKey>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed edge between two caller ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeKey,
    pub to: NodeKey,
}

impl EdgeSpec {
    pub fn new(from: impl Into<NodeKey>, to: impl Into<NodeKey>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The full request payload: `{ "nodes": [...], "edges": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    pub fn new(nodes: Vec<NodeSpec>, edges: Vec<EdgeSpec>) -> Self {
        Self { nodes, edges }
    }

    /// Add a node (builder style)
    pub fn with_node(mut self, id: impl Into<NodeKey>, label: impl Into<String>) -> Self {
        self.nodes.push(NodeSpec::new(id, label));
        self
    }

    /// Add an edge (builder style)
    pub fn with_edge(mut self, from: impl Into<NodeKey>, to: impl Into<NodeKey>) -> Self {
        self.edges.push(EdgeSpec::new(from, to));
        self
    }
}
