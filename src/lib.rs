//! graphlens: Structural Analytics for Directed Graphs
//!
//! Ingests a user-authored directed graph (labelled nodes, directed edges)
//! and computes structural statistics in one immutable report.
//!
//! # Core Concepts
//!
//! - **GraphSpec**: the `{nodes, edges}` payload callers send, keyed by
//!   their own string or integer ids
//! - **Graph**: the validated, deduplicated snapshot analyzers read
//! - **AnalysisReport**: counts, density, acyclicity, components, longest
//!   path (acyclic graphs only) and per-node centrality
//!
//! # Example
//!
//! ```
//! use graphlens::{AnalysisOrchestrator, GraphSpec};
//!
//! let spec = GraphSpec::default()
//!     .with_node(1, "A")
//!     .with_node(2, "B")
//!     .with_node(3, "C")
//!     .with_edge(1, 2)
//!     .with_edge(2, 3);
//!
//! let report = AnalysisOrchestrator::new().analyze_spec(&spec).unwrap();
//! assert_eq!(report.structural.strongly_connected_components, 3);
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod generator;
mod graph;
pub mod mcp;
pub mod storage;

pub use analysis::{
    AnalysisConfig, AnalysisError, AnalysisOrchestrator, AnalysisReport, CancellationToken,
    CentralityTable, CentralityTables, PathResult, StructuralStats,
};
pub use api::{ApiError, GraphLensApi};
pub use generator::{GenerationError, GraphGenerator, MockGenerator};
pub use graph::{
    build, io, EdgeSpec, Graph, GraphSpec, NodeData, NodeKey, NodeSpec, ValidationError,
};
pub use storage::{MemoryProjectStore, Project, ProjectStore, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
