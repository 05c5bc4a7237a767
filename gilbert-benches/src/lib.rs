//! Benchmark support crate for gilbert.
//!
//! Provides parameter types and graph setup helpers used by the Criterion
//! benchmarks for the two pipeline stages worth measuring: edge sampling
//! and statistics estimation.

pub mod params;

use gilbert_core::{Graph, sample_gilbert};
use rand::{SeedableRng, rngs::SmallRng};

/// Fixed seed so benchmark inputs stay identical across runs.
pub const BENCH_SEED: u64 = 0x9ED_5EED;

/// Generates the benchmark input graph for the given parameters.
///
/// # Panics
/// Panics when the generated graph is disconnected, which the dense
/// benchmark probabilities make practically impossible.
#[must_use]
pub fn bench_graph(nodes: usize, edge_probability: f64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(BENCH_SEED);
    let graph = sample_gilbert(nodes, edge_probability, &mut rng);
    assert!(
        gilbert_core::is_connected(&graph),
        "benchmark graph with {nodes} nodes must be connected"
    );
    graph
}
