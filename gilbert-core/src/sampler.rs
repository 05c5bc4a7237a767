//! Gilbert-model edge sampling.
//!
//! Every unordered node pair is evaluated exactly once against the edge
//! probability. Evaluating both orientations would inflate the effective
//! probability to `1 - (1 - p)^2`, so the loop only visits `left < right`.

use rand::{Rng, distributions::Standard};

use crate::graph::Graph;

/// Samples a Gilbert-model random graph with `nodes` nodes, including each
/// possible edge independently with probability `edge_probability`.
///
/// The generator is injected so trials are reproducible under a fixed seed.
/// `edge_probability = 0.0` yields an edgeless graph and `1.0` a complete
/// one; the caller validates the probability range.
///
/// # Examples
/// ```
/// use gilbert_core::sample_gilbert;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = sample_gilbert(5, 1.0, &mut rng);
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 10);
/// ```
#[must_use]
pub fn sample_gilbert<R: Rng>(nodes: usize, edge_probability: f64, rng: &mut R) -> Graph {
    let mut graph = Graph::with_nodes(nodes);
    for left in 0..nodes {
        for right in (left + 1)..nodes {
            let draw: f64 = rng.sample(Standard);
            if draw < edge_probability {
                graph.insert_edge(left, right);
            }
        }
    }
    graph
}
