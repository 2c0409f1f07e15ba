//! Structural analyzer: counts, degree, acyclicity and components
//!
//! Ordering and component work is delegated to `petgraph::algo`.

use super::types::StructuralStats;
use crate::graph::Graph;
use petgraph::algo;

/// Compute structural statistics. Total over any valid graph.
pub fn analyze(graph: &Graph) -> StructuralStats {
    let num_nodes = graph.node_count();
    let total_degree: usize = graph.nodes().map(|v| graph.degree(v)).sum();
    let avg_degree = if num_nodes > 0 {
        total_degree as f64 / num_nodes as f64
    } else {
        0.0
    };

    StructuralStats {
        num_nodes,
        num_edges: graph.edge_count(),
        avg_degree,
        is_dag: topological_order(graph).is_some(),
        connected_components: weakly_connected_components(graph),
        strongly_connected_components: strongly_connected_components(graph).len(),
    }
}

/// Topological order of node positions, or `None` when the graph has a
/// cycle. A self-loop is a 1-cycle.
pub fn topological_order(graph: &Graph) -> Option<Vec<usize>> {
    if graph.nodes().any(|v| graph.has_self_loop(v)) {
        return None;
    }
    algo::toposort(graph.inner(), None)
        .ok()
        .map(|order| order.into_iter().map(|n| n.index()).collect())
}

/// Number of connected components of the undirected version of the graph
pub fn weakly_connected_components(graph: &Graph) -> usize {
    algo::connected_components(graph.inner())
}

/// Strongly connected components as lists of node positions.
///
/// Kosaraju's variant is used because petgraph implements it without
/// recursion, so long chains and cycles do not overflow the thread stack.
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    algo::kosaraju_scc(graph.inner())
        .into_iter()
        .map(|component| component.into_iter().map(|n| n.index()).collect())
        .collect()
}
