//! Graph: the immutable, validated snapshot every analyzer reads
//!
//! Backed by a petgraph `DiGraph` whose node indices are the input
//! positions. Repeated `(from, to)` pairs collapse to one logical edge.
//! Self-loops are kept (once).

use super::spec::{EdgeSpec, GraphSpec, NodeKey, NodeSpec};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use thiserror::Error;

/// Malformed input, always the caller's fault
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(NodeKey),

    #[error("edge {edge} references unknown node id: {id}")]
    UnknownEndpoint { edge: usize, id: NodeKey },

    #[error("malformed graph JSON: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}

/// Node weight: caller id plus display label
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub key: NodeKey,
    pub label: String,
}

/// Immutable simple directed graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: DiGraph<NodeData, ()>,
}

/// Build a graph from flat node and edge lists
pub fn build(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> Result<Graph, ValidationError> {
    Graph::build(nodes, edges)
}

impl Graph {
    /// Validate and materialize a graph.
    ///
    /// Fails on the first duplicate id (in node order), then on the first
    /// edge whose endpoint is not a known id (in edge order).
    pub fn build(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> Result<Self, ValidationError> {
        let mut index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut inner = DiGraph::with_capacity(nodes.len(), edges.len());

        for node in nodes {
            let canonical = node.id.canonical();
            if index.contains_key(&canonical) {
                return Err(ValidationError::DuplicateNodeId(node.id.clone()));
            }
            let idx = inner.add_node(NodeData {
                key: node.id.clone(),
                label: node.label.clone(),
            });
            index.insert(canonical, idx);
        }

        let resolve = |edge: usize, id: &NodeKey| {
            index
                .get(&id.canonical())
                .copied()
                .ok_or_else(|| ValidationError::UnknownEndpoint {
                    edge,
                    id: id.clone(),
                })
        };

        for (i, edge) in edges.iter().enumerate() {
            let from = resolve(i, &edge.from)?;
            let to = resolve(i, &edge.to)?;
            inner.update_edge(from, to, ());
        }

        Ok(Self { inner })
    }

    /// Build from a full request payload
    pub fn from_spec(spec: &GraphSpec) -> Result<Self, ValidationError> {
        Self::build(&spec.nodes, &spec.edges)
    }

    /// The underlying petgraph graph, for `petgraph::algo`
    pub fn inner(&self) -> &DiGraph<NodeData, ()> {
        &self.inner
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of distinct `(from, to)` pairs, self-loops included
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Caller id of the node at `node`
    pub fn key(&self, node: usize) -> &NodeKey {
        &self.inner[NodeIndex::new(node)].key
    }

    /// Caller ids in input order
    pub fn keys(&self) -> impl Iterator<Item = &NodeKey> + '_ {
        self.inner.node_weights().map(|d| &d.key)
    }

    pub fn label(&self, node: usize) -> &str {
        &self.inner[NodeIndex::new(node)].label
    }

    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node, Direction::Outgoing)
    }

    pub fn predecessors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node, Direction::Incoming)
    }

    fn neighbors(&self, node: usize, dir: Direction) -> impl Iterator<Item = usize> + '_ {
        self.inner
            .neighbors_directed(NodeIndex::new(node), dir)
            .map(|n| n.index())
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.successors(node).count()
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.predecessors(node).count()
    }

    /// In-degree plus out-degree; a self-loop contributes two
    pub fn degree(&self, node: usize) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    pub fn has_self_loop(&self, node: usize) -> bool {
        let idx = NodeIndex::new(node);
        self.inner.contains_edge(idx, idx)
    }

    /// Iterate all node positions
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.inner.node_count()
    }
}
