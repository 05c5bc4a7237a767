//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so helper functions and
//! Criterion identifiers stay readable.

use std::fmt;

/// Parameters for a generation or estimation benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the generated graph.
    pub nodes: usize,
    /// Edge probability used during generation.
    pub edge_probability: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.nodes, self.edge_probability)
    }
}

/// The grid of graph sizes exercised by the benchmarks, holding the
/// expected degree roughly steady as the node count grows.
#[must_use]
pub fn bench_grid() -> Vec<GraphBenchParams> {
    vec![
        GraphBenchParams {
            nodes: 64,
            edge_probability: 0.3,
        },
        GraphBenchParams {
            nodes: 256,
            edge_probability: 0.08,
        },
        GraphBenchParams {
            nodes: 1024,
            edge_probability: 0.02,
        },
    ]
}
