//! Transport-independent API layer.
//!
//! `GraphLensApi` is the single entry point for consumer-facing operations.
//! Transports (MCP, CLI, or an embedding HTTP server) call its methods and
//! never reach into the orchestrator or store directly. Failures cross the
//! boundary as `{ "success": false, "error": <message>, "kind": <kind> }`;
//! a partially populated report is never returned.

use std::sync::Arc;

use crate::analysis::{AnalysisConfig, AnalysisError, AnalysisOrchestrator, AnalysisReport};
use crate::generator::{GenerationError, GraphGenerator};
use crate::graph::{Graph, GraphSpec};
use crate::storage::{MemoryProjectStore, Project, ProjectStore, StorageError};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

/// Errors surfaced by API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("no graph generator configured")]
    NoGenerator,
}

impl ApiError {
    /// Stable category name reported at the JSON boundary
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Analysis(e) => e.kind(),
            ApiError::Storage(StorageError::ProjectNotFound(_)) => "not_found",
            ApiError::Storage(StorageError::EmptyName) => "validation",
            ApiError::Storage(StorageError::Serialization(_)) => "internal",
            ApiError::Generation(GenerationError::Invalid(_)) => "validation",
            ApiError::Generation(_) | ApiError::NoGenerator => "generation",
        }
    }

    /// The structured error object sent to callers
    pub fn to_json(&self) -> Value {
        error_response(&self.to_string(), self.kind())
    }
}

/// Build the failure object
pub fn error_response(message: &str, kind: &str) -> Value {
    json!({
        "success": false,
        "error": message,
        "kind": kind,
    })
}

/// Summary returned by validation-only calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub valid: bool,
    pub num_nodes: usize,
    pub num_edges: usize,
}

/// Single entry point for all consumer-facing operations.
#[derive(Clone)]
pub struct GraphLensApi {
    orchestrator: Arc<AnalysisOrchestrator>,
    store: Arc<dyn ProjectStore>,
    generator: Option<Arc<dyn GraphGenerator>>,
}

impl GraphLensApi {
    /// Create an API backed by an in-memory project store.
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryProjectStore::new()))
    }

    pub fn with_store(config: AnalysisConfig, store: Arc<dyn ProjectStore>) -> Self {
        Self {
            orchestrator: Arc::new(AnalysisOrchestrator::with_config(config)),
            store,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn GraphGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.orchestrator.config()
    }

    // --- Analysis ---

    /// Analyze a payload under the configured size bound and deadline.
    pub async fn analyze(&self, spec: GraphSpec) -> Result<AnalysisReport, ApiError> {
        Ok(self.orchestrator.analyze_with_deadline(spec).await?)
    }

    /// Full JSON boundary: request body in, report or error object out.
    pub async fn analyze_body(&self, body: &str) -> Value {
        let spec: GraphSpec = match serde_json::from_str(body) {
            Ok(spec) => spec,
            Err(e) => return ApiError::Analysis(e.into()).to_json(),
        };
        let result = self.analyze(spec).await.and_then(|report| {
            report
                .to_json()
                .map_err(|e| ApiError::Analysis(AnalysisError::Internal(e.to_string())))
        });
        match result {
            Ok(value) => value,
            Err(e) => {
                debug!(kind = e.kind(), error = %e, "analysis request failed");
                e.to_json()
            }
        }
    }

    /// Check limits and build the graph without analyzing it.
    pub fn validate(&self, spec: &GraphSpec) -> Result<GraphSummary, ApiError> {
        self.orchestrator.check_limits(spec)?;
        let graph = Graph::from_spec(spec).map_err(AnalysisError::from)?;
        Ok(GraphSummary {
            valid: true,
            num_nodes: graph.node_count(),
            num_edges: graph.edge_count(),
        })
    }

    // --- Projects ---

    /// Save a payload as a named project; the graph must build.
    pub fn save_project(
        &self,
        user_id: &str,
        name: &str,
        spec: &GraphSpec,
    ) -> Result<Project, ApiError> {
        self.validate(spec)?;
        Ok(self.store.save(user_id, name, spec)?)
    }

    pub fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ApiError> {
        Ok(self.store.list(user_id)?)
    }

    /// Analyze the most recently saved project with this name.
    pub async fn analyze_project(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<AnalysisReport, ApiError> {
        let project = self.store.latest(user_id, name)?;
        self.analyze(project.graph).await
    }

    // --- Generation ---

    /// Generate a payload from a prompt and validate it.
    pub async fn generate(&self, prompt: &str) -> Result<GraphSpec, ApiError> {
        let generator = self.generator.as_ref().ok_or(ApiError::NoGenerator)?;
        let (spec, _) = crate::generator::generate_graph(generator.as_ref(), prompt).await?;
        self.orchestrator.check_limits(&spec)?;
        Ok(spec)
    }
}
