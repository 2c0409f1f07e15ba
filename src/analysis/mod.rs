//! Graph analysis pipeline
//!
//! Three independent analyzers read the same immutable [`Graph`](crate::graph::Graph)
//! snapshot and their results are merged into one [`AnalysisReport`]:
//!
//! - **structural**: node/edge counts, average degree, acyclicity,
//!   weakly and strongly connected component counts
//! - **path**: one longest path, only when the graph is acyclic
//! - **centrality**: degree, betweenness (Brandes) and closeness
//!   (Wasserman-Faust) per node
//!
//! The [`AnalysisOrchestrator`] owns the admission checks (size bound,
//! deadline) that guard the cubic-time centrality work.
//!
//! # Example
//!
//! ```
//! use graphlens::analysis::AnalysisOrchestrator;
//! use graphlens::GraphSpec;
//!
//! let spec = GraphSpec::default()
//!     .with_node(1, "A")
//!     .with_node(2, "B")
//!     .with_edge(1, 2);
//!
//! let report = AnalysisOrchestrator::new().analyze_spec(&spec).unwrap();
//! assert!(report.structural.is_dag);
//! assert_eq!(report.longest_path.unwrap().node_labels, vec!["A", "B"]);
//! ```

mod cancel;
pub mod centrality;
mod orchestrator;
pub mod path;
pub mod structural;
mod types;

pub use cancel::CancellationToken;
pub use orchestrator::AnalysisOrchestrator;
pub use types::{
    AnalysisConfig, AnalysisError, AnalysisReport, AnalysisResult, CentralityTable,
    CentralityTables, PathResult, StructuralStats,
};
