//! Core types for the analysis pipeline: per-analyzer results, the merged
//! report, configuration and errors

use crate::graph::{NodeKey, ValidationError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Output of the structural analyzer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    /// Mean of in-degree plus out-degree; 0 for the empty graph
    pub avg_degree: f64,
    pub is_dag: bool,
    /// Weakly connected components (edge direction ignored)
    pub connected_components: usize,
    pub strongly_connected_components: usize,
}

/// One longest path of an acyclic graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Edge count, so a single node has length 0
    #[serde(rename = "longest_path_length")]
    pub length: usize,
    /// Labels along the path, first node first
    #[serde(rename = "longest_path_nodes")]
    pub node_labels: Vec<String>,
}

/// Per-node scores keyed by caller id, kept in node input order
///
/// Serializes as a JSON object whose keys are the canonical id text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentralityTable(Vec<(NodeKey, f64)>);

impl CentralityTable {
    pub fn new(entries: Vec<(NodeKey, f64)>) -> Self {
        Self(entries)
    }

    /// Score for a caller id (matched by canonical text)
    pub fn get(&self, key: &NodeKey) -> Option<f64> {
        let wanted = key.canonical();
        self.0
            .iter()
            .find(|(k, _)| k.canonical() == wanted)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|(_, v)| *v)
    }
}

impl Serialize for CentralityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(&key.canonical(), value)?;
        }
        map.end()
    }
}

/// Output of the centrality analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CentralityTables {
    pub degree_centrality: CentralityTable,
    pub betweenness_centrality: CentralityTable,
    pub closeness_centrality: CentralityTable,
}

/// Everything computed for one graph, produced all at once
///
/// Path fields are present only when the graph is acyclic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub structural: StructuralStats,
    #[serde(flatten)]
    pub longest_path: Option<PathResult>,
    #[serde(flatten)]
    pub centrality: CentralityTables,
}

impl AnalysisReport {
    /// The report as a JSON value, keys in report order
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Limits and execution knobs for the analysis boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest accepted node count
    pub max_nodes: usize,
    /// Largest accepted edge count (before duplicate collapsing)
    pub max_edges: usize,
    /// Deadline for one asynchronous analysis call
    pub timeout_seconds: u64,
    /// Run centrality on its own thread next to the other analyzers
    pub parallel: bool,
    /// Owner recorded for projects saved through the MCP server
    pub user: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_nodes: 2000,
            max_edges: 20_000,
            timeout_seconds: 30,
            parallel: false,
            user: "local".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = max_edges;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Error types for analysis
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("graph too large: {size} {what} (max: {max})")]
    GraphTooLarge {
        what: &'static str,
        size: usize,
        max: usize,
    },

    #[error("analysis timed out after {0} seconds")]
    Timeout(u64),

    #[error("analysis cancelled")]
    Cancelled,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Stable category name reported at the JSON boundary
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation",
            AnalysisError::GraphTooLarge { .. } => "resource_limit",
            AnalysisError::Timeout(_) | AnalysisError::Cancelled => "timeout",
            AnalysisError::Internal(_) => "internal",
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_caller_fault(&self) -> bool {
        !matches!(self, AnalysisError::Internal(_))
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Validation(e.into())
    }
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
