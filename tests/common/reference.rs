//! Brute-force reference algorithms
//!
//! Deliberately naive: all-pairs BFS tables and exhaustive enumeration.
//! Only suitable for small graphs.

use graphlens::Graph;
use std::collections::VecDeque;

/// Shortest distances and shortest-path counts between every ordered pair
pub struct Distances {
    pub dist: Vec<Vec<Option<usize>>>,
    pub sigma: Vec<Vec<f64>>,
}

pub fn all_pairs_distances(graph: &Graph) -> Distances {
    let n = graph.node_count();
    let mut dist = vec![vec![None; n]; n];
    let mut sigma = vec![vec![0.0; n]; n];

    for s in graph.nodes() {
        dist[s][s] = Some(0);
        sigma[s][s] = 1.0;
        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            let dv = dist[s][v].unwrap_or(0);
            for w in graph.successors(v) {
                match dist[s][w] {
                    None => {
                        dist[s][w] = Some(dv + 1);
                        sigma[s][w] = sigma[s][v];
                        queue.push_back(w);
                    }
                    Some(dw) if dw == dv + 1 => sigma[s][w] += sigma[s][v],
                    _ => {}
                }
            }
        }
    }

    Distances { dist, sigma }
}

/// Betweenness by summing pair dependencies directly
pub fn betweenness_reference(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 2 {
        return vec![0.0; n];
    }
    let d = all_pairs_distances(graph);
    let mut scores = vec![0.0; n];

    for s in 0..n {
        for t in 0..n {
            if s == t {
                continue;
            }
            let Some(st) = d.dist[s][t] else { continue };
            for v in 0..n {
                if v == s || v == t {
                    continue;
                }
                if let (Some(sv), Some(vt)) = (d.dist[s][v], d.dist[v][t]) {
                    if sv + vt == st {
                        scores[v] += d.sigma[s][v] * d.sigma[v][t] / d.sigma[s][t];
                    }
                }
            }
        }
    }

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    scores.iter().map(|s| s * scale).collect()
}

/// Wasserman-Faust closeness from the distance table
pub fn closeness_reference(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    let d = all_pairs_distances(graph);
    (0..n)
        .map(|s| {
            let reached: Vec<usize> = d.dist[s].iter().flatten().copied().collect();
            let others = reached.len() - 1;
            let total: usize = reached.iter().sum();
            if others == 0 || total == 0 {
                return 0.0;
            }
            (others as f64 / total as f64) * (others as f64 / (n - 1) as f64)
        })
        .collect()
}

/// Strong components as classes of mutual reachability
pub fn scc_count_reference(graph: &Graph) -> usize {
    let n = graph.node_count();
    let d = all_pairs_distances(graph);
    let mut assigned = vec![false; n];
    let mut count = 0;
    for s in 0..n {
        if assigned[s] {
            continue;
        }
        count += 1;
        for t in s..n {
            if d.dist[s][t].is_some() && d.dist[t][s].is_some() {
                assigned[t] = true;
            }
        }
    }
    count
}

/// Exhaustive search over every path of an acyclic graph
///
/// Returns the longest one, ties broken by the lexicographically smallest
/// sequence of node positions.
pub fn longest_path_reference(graph: &Graph) -> Vec<usize> {
    fn extend(graph: &Graph, path: &mut Vec<usize>, best: &mut Vec<usize>) {
        if path.len() > best.len() || (path.len() == best.len() && *path < *best) {
            *best = path.clone();
        }
        let last = path[path.len() - 1];
        for w in graph.successors(last) {
            path.push(w);
            extend(graph, path, best);
            path.pop();
        }
    }

    let mut best = Vec::new();
    for start in graph.nodes() {
        let mut path = vec![start];
        extend(graph, &mut path, &mut best);
    }
    best
}
