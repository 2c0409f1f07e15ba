//! Centrality analyzer: degree, betweenness and closeness for every node
//!
//! All three use unit edge weights over the deduplicated directed graph.
//!
//! - **Degree**: `(in + out) / (N - 1)`, 0 when `N <= 1`.
//! - **Betweenness**: Brandes' algorithm (one BFS plus one dependency
//!   accumulation per source), summed over ordered pairs and scaled by
//!   `1 / ((N - 1)(N - 2))`; 0 when `N <= 2`.
//! - **Closeness**: Wasserman-Faust. With `r` the number of nodes reachable
//!   from `n` along outgoing edges (counting `n`) and `d` the sum of their
//!   distances, `((r - 1) / d) * ((r - 1) / (N - 1))`; 0 when `n` reaches
//!   nothing.
//!
//! Betweenness and closeness are quadratic-or-worse and check a
//! [`CancellationToken`] once per source node; they return `None` when
//! cancelled.

use super::cancel::CancellationToken;
use super::types::{CentralityTable, CentralityTables};
use crate::graph::Graph;
use std::collections::VecDeque;

/// Compute all three centrality tables, keyed by caller id
pub fn centralities(graph: &Graph, cancel: &CancellationToken) -> Option<CentralityTables> {
    Some(CentralityTables {
        degree_centrality: keyed(graph, degree_centrality(graph)),
        betweenness_centrality: keyed(graph, betweenness_centrality(graph, cancel)?),
        closeness_centrality: keyed(graph, closeness_centrality(graph, cancel)?),
    })
}

fn keyed(graph: &Graph, scores: Vec<f64>) -> CentralityTable {
    CentralityTable::new(graph.keys().cloned().zip(scores).collect())
}

/// Degree centrality by node position
pub fn degree_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    graph
        .nodes()
        .map(|v| graph.degree(v) as f64 * scale)
        .collect()
}

/// Normalized betweenness centrality by node position (Brandes)
pub fn betweenness_centrality(graph: &Graph, cancel: &CancellationToken) -> Option<Vec<f64>> {
    let n = graph.node_count();
    let mut scores = vec![0.0; n];
    if n <= 2 {
        return Some(scores);
    }

    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![usize::MAX; n];
    let mut delta = vec![0.0f64; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in graph.nodes() {
        if cancel.is_cancelled() {
            return None;
        }
        stack.clear();
        preds.iter_mut().for_each(Vec::clear);
        sigma.iter_mut().for_each(|x| *x = 0.0);
        dist.iter_mut().for_each(|x| *x = usize::MAX);
        delta.iter_mut().for_each(|x| *x = 0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        // Shortest-path counts
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for w in graph.successors(v) {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        // Dependency accumulation, farthest nodes first
        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                scores[w] += delta[w];
            }
        }
    }

    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    scores.iter_mut().for_each(|x| *x *= scale);
    Some(scores)
}

/// Wasserman-Faust closeness centrality by node position
pub fn closeness_centrality(graph: &Graph, cancel: &CancellationToken) -> Option<Vec<f64>> {
    let n = graph.node_count();
    let mut scores = vec![0.0; n];
    if n <= 1 {
        return Some(scores);
    }

    let mut dist = vec![usize::MAX; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in graph.nodes() {
        if cancel.is_cancelled() {
            return None;
        }
        dist.iter_mut().for_each(|x| *x = usize::MAX);
        dist[s] = 0;
        queue.push_back(s);

        let mut reached = 0usize;
        let mut total = 0usize;
        while let Some(v) = queue.pop_front() {
            reached += 1;
            total += dist[v];
            for w in graph.successors(v) {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
            }
        }

        if total > 0 {
            let others = (reached - 1) as f64;
            scores[s] = (others / total as f64) * (others / (n - 1) as f64);
        }
    }

    Some(scores)
}
