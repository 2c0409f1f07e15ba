//! MCP tool parameter structs with schemars-derived JSON schemas.

use crate::graph::GraphSpec;
use schemars::JsonSchema;
use serde::Deserialize;

// ── Graph params ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GraphParams {
    #[schemars(description = "Nodes as {id, label}; id is a string or integer, unique per graph")]
    pub nodes: Vec<serde_json::Value>,
    #[schemars(description = "Directed edges as {from, to}, both referencing node ids")]
    #[serde(default)]
    pub edges: Vec<serde_json::Value>,
}

impl GraphParams {
    /// Decode into the builder's input shape
    pub fn into_spec(self) -> Result<GraphSpec, serde_json::Error> {
        to_spec(self.nodes, self.edges)
    }
}

// ── Project params ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveProjectParams {
    #[schemars(description = "Project name (saving an existing name keeps both versions)")]
    pub name: String,
    #[schemars(description = "Nodes as {id, label}")]
    pub nodes: Vec<serde_json::Value>,
    #[schemars(description = "Directed edges as {from, to}")]
    #[serde(default)]
    pub edges: Vec<serde_json::Value>,
}

impl SaveProjectParams {
    pub fn into_parts(self) -> Result<(String, GraphSpec), serde_json::Error> {
        let spec = to_spec(self.nodes, self.edges)?;
        Ok((self.name, spec))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectNameParams {
    #[schemars(description = "Project name; the most recent save is used")]
    pub name: String,
}

fn to_spec(
    nodes: Vec<serde_json::Value>,
    edges: Vec<serde_json::Value>,
) -> Result<GraphSpec, serde_json::Error> {
    serde_json::from_value(serde_json::json!({ "nodes": nodes, "edges": edges }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graph_params_decode() {
        let params: GraphParams = serde_json::from_value(json!({
            "nodes": [{"id": 1, "label": "A"}, {"id": "b", "label": "B"}],
            "edges": [{"from": 1, "to": "b"}]
        }))
        .unwrap();
        let spec = params.into_spec().unwrap();
        assert_eq!(spec.nodes.len(), 2);
        assert_eq!(spec.edges.len(), 1);
    }

    #[test]
    fn test_edges_default_to_empty() {
        let params: GraphParams =
            serde_json::from_value(json!({ "nodes": [{"id": 1, "label": "A"}] })).unwrap();
        assert!(params.into_spec().unwrap().edges.is_empty());
    }

    #[test]
    fn test_bad_node_shape_fails_decode() {
        let params: GraphParams =
            serde_json::from_value(json!({ "nodes": [{"label": "no id"}] })).unwrap();
        assert!(params.into_spec().is_err());
    }
}
