//! Fixture graphs
//!
//! Node `i` always has id `i` and label `n{i}`, so labels map back to
//! input positions.

use graphlens::{Graph, GraphSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn with_nodes(n: usize) -> GraphSpec {
    (0..n).fold(GraphSpec::default(), |spec, i| {
        spec.with_node(i as i64, format!("n{}", i))
    })
}

/// 0 -> 1 -> ... -> n-1
pub fn chain(n: usize) -> GraphSpec {
    (1..n).fold(with_nodes(n), |spec, i| {
        spec.with_edge((i - 1) as i64, i as i64)
    })
}

/// chain(n) plus the closing edge n-1 -> 0
pub fn cycle(n: usize) -> GraphSpec {
    let spec = chain(n);
    if n == 0 {
        return spec;
    }
    spec.with_edge((n - 1) as i64, 0)
}

/// Every ordered pair of distinct nodes connected
pub fn complete(n: usize) -> GraphSpec {
    let mut spec = with_nodes(n);
    for a in 0..n {
        for b in 0..n {
            if a != b {
                spec = spec.with_edge(a as i64, b as i64);
            }
        }
    }
    spec
}

/// Hub 0 with an edge out to every other node
pub fn star(n: usize) -> GraphSpec {
    (1..n).fold(with_nodes(n), |spec, i| spec.with_edge(0, i as i64))
}

/// The three-node chain A -> B -> C with integer ids 1..=3
pub fn scenario_a() -> GraphSpec {
    GraphSpec::default()
        .with_node(1, "A")
        .with_node(2, "B")
        .with_node(3, "C")
        .with_edge(1, 2)
        .with_edge(2, 3)
}

/// Random digraph with each ordered pair (self-loops included) present
/// with probability `p`. When `acyclic` is set only forward edges
/// (lower to higher position) are kept.
pub fn random_spec(rng: &mut StdRng, n: usize, p: f64, acyclic: bool) -> GraphSpec {
    let mut spec = with_nodes(n);
    for a in 0..n {
        for b in 0..n {
            if acyclic && a >= b {
                continue;
            }
            if rng.gen_bool(p) {
                spec = spec.with_edge(a as i64, b as i64);
            }
        }
    }
    spec
}

/// Built random graph from a fixed seed
pub fn random_graph(seed: u64, n: usize, p: f64, acyclic: bool) -> (GraphSpec, Graph) {
    let mut rng = StdRng::seed_from_u64(seed);
    let spec = random_spec(&mut rng, n, p, acyclic);
    let graph = Graph::from_spec(&spec).expect("fixture graph should build");
    (spec, graph)
}
