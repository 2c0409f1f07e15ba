//! Common test utilities for graphlens integration tests
//!
//! Fixture graphs plus brute-force reference algorithms used to
//! cross-check the analyzers.

#![allow(dead_code)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{chain, complete, cycle, random_graph, random_spec, scenario_a, star};
pub use reference::{
    all_pairs_distances, betweenness_reference, closeness_reference, longest_path_reference,
    scc_count_reference, Distances,
};

/// Absolute tolerance for comparing centrality scores
pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
