//! Analysis orchestrator: admission checks, analyzer scheduling and merge
//!
//! The analyzers are pure functions over one immutable [`Graph`]. The
//! orchestrator enforces the configured size bound before building,
//! optionally runs centrality (the expensive part) on its own thread, and
//! imposes the request deadline on the asynchronous path, cancelling the
//! worker when it passes.

use super::cancel::CancellationToken;
use super::types::{
    AnalysisConfig, AnalysisError, AnalysisReport, AnalysisResult, PathResult, StructuralStats,
};
use super::{centrality, path, structural};
use crate::graph::{Graph, GraphSpec};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the structural, path and centrality analyzers over one graph
#[derive(Debug, Clone, Default)]
pub struct AnalysisOrchestrator {
    config: AnalysisConfig,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator with default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reject payloads larger than the configured bound
    pub fn check_limits(&self, spec: &GraphSpec) -> AnalysisResult<()> {
        if spec.nodes.len() > self.config.max_nodes {
            return Err(AnalysisError::GraphTooLarge {
                what: "nodes",
                size: spec.nodes.len(),
                max: self.config.max_nodes,
            });
        }
        if spec.edges.len() > self.config.max_edges {
            return Err(AnalysisError::GraphTooLarge {
                what: "edges",
                size: spec.edges.len(),
                max: self.config.max_edges,
            });
        }
        Ok(())
    }

    /// Run every analyzer over an already-built graph
    ///
    /// The longest path is computed only when the graph is acyclic.
    /// Fails with [`AnalysisError::Cancelled`] if `cancel` fires while
    /// centrality is running.
    pub fn analyze(
        &self,
        graph: &Graph,
        cancel: &CancellationToken,
    ) -> AnalysisResult<AnalysisReport> {
        let started = Instant::now();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            parallel = self.config.parallel,
            "analyzing graph"
        );

        let (structural, longest_path, centrality) = if self.config.parallel {
            std::thread::scope(|s| {
                let centrality = s.spawn(|| centrality::centralities(graph, cancel));
                let (structural, longest_path) = structure_and_path(graph);
                match centrality.join() {
                    Ok(c) => (structural, longest_path, c),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            })
        } else {
            let (structural, longest_path) = structure_and_path(graph);
            (
                structural,
                longest_path,
                centrality::centralities(graph, cancel),
            )
        };

        let Some(centrality) = centrality else {
            debug!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "analysis cancelled"
            );
            return Err(AnalysisError::Cancelled);
        };

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            is_dag = structural.is_dag,
            "analysis complete"
        );

        Ok(AnalysisReport {
            structural,
            longest_path,
            centrality,
        })
    }

    /// Check limits, build, then analyze
    pub fn analyze_spec(&self, spec: &GraphSpec) -> AnalysisResult<AnalysisReport> {
        self.analyze_spec_until(spec, &CancellationToken::new())
    }

    /// [`analyze_spec`](Self::analyze_spec) that gives up once `cancel` fires
    pub fn analyze_spec_until(
        &self,
        spec: &GraphSpec,
        cancel: &CancellationToken,
    ) -> AnalysisResult<AnalysisReport> {
        if let Err(e) = self.check_limits(spec) {
            info!(error = %e, "rejecting oversized graph");
            return Err(e);
        }
        let graph = Graph::from_spec(spec).map_err(|e| {
            debug!(error = %e, "graph failed validation");
            AnalysisError::from(e)
        })?;
        self.analyze(&graph, cancel)
    }

    /// Parse a JSON payload, then [`analyze_spec`](Self::analyze_spec)
    pub fn analyze_json(&self, body: &str) -> AnalysisResult<AnalysisReport> {
        let spec: GraphSpec = serde_json::from_str(body)?;
        self.analyze_spec(&spec)
    }

    /// Analyze on a blocking thread under the configured deadline
    ///
    /// On timeout the worker is cancelled; it stops at its next per-source
    /// check and its result is discarded.
    pub async fn analyze_with_deadline(
        self: &Arc<Self>,
        spec: GraphSpec,
    ) -> AnalysisResult<AnalysisReport> {
        // Cheap checks stay on the caller's task
        self.check_limits(&spec)?;

        let this = Arc::clone(self);
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();
        let task =
            tokio::task::spawn_blocking(move || this.analyze_spec_until(&spec, &worker_cancel));
        let timeout = tokio::time::Duration::from_secs(self.config.timeout_seconds);

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(AnalysisError::Internal(format!(
                "analyzer task failed: {}",
                join_err
            ))),
            Err(_) => {
                cancel.cancel();
                info!(
                    timeout_seconds = self.config.timeout_seconds,
                    "analysis deadline exceeded"
                );
                Err(AnalysisError::Timeout(self.config.timeout_seconds))
            }
        }
    }
}

fn structure_and_path(graph: &Graph) -> (StructuralStats, Option<PathResult>) {
    let stats = structural::analyze(graph);
    let longest_path = if stats.is_dag {
        path::longest_path(graph)
    } else {
        None
    };
    (stats, longest_path)
}
