//! Path analyzer: one longest path of an acyclic graph
//!
//! Dynamic programming over a topological order, linear in nodes + edges.
//!
//! # Tie-breaking
//!
//! When several longest paths exist, the one returned is the
//! lexicographically smallest sequence of node input positions: start at
//! the earliest-supplied node that begins a longest path, then at each step
//! move to the earliest-supplied successor that still continues one.

use super::structural::topological_order;
use super::types::PathResult;
use crate::graph::Graph;

/// Longest path by edge count, or `None` when the graph has a cycle.
///
/// The empty graph yields a path of length 0 with no labels.
pub fn longest_path(graph: &Graph) -> Option<PathResult> {
    let order = topological_order(graph)?;
    let nodes = longest_path_nodes(graph, &order);
    Some(PathResult {
        length: nodes.len().saturating_sub(1),
        node_labels: nodes
            .iter()
            .map(|&v| graph.label(v).to_string())
            .collect(),
    })
}

/// Node positions along the chosen longest path, given a valid topological order
fn longest_path_nodes(graph: &Graph, order: &[usize]) -> Vec<usize> {
    let n = graph.node_count();
    // tail[v]: edges on the longest path starting at v
    let mut tail = vec![0usize; n];
    let mut next: Vec<Option<usize>> = vec![None; n];

    for &v in order.iter().rev() {
        for w in graph.successors(v) {
            let candidate = tail[w] + 1;
            let better = match next[v] {
                None => true,
                Some(current) => candidate > tail[v] || (candidate == tail[v] && w < current),
            };
            if better {
                tail[v] = candidate;
                next[v] = Some(w);
            }
        }
    }

    let start = match graph.nodes().max_by(|&a, &b| tail[a].cmp(&tail[b]).then(b.cmp(&a))) {
        Some(v) => v,
        None => return Vec::new(),
    };

    let mut path = vec![start];
    let mut current = start;
    while let Some(w) = next[current] {
        path.push(w);
        current = w;
    }
    path
}
