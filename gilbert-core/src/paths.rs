//! Average shortest-path estimation over sampled node pairs.
//!
//! Small graphs are measured exhaustively; larger ones over a bounded random
//! sample of distinct unordered pairs, keeping the estimator's cost flat as
//! the graph doubles in size.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::{
    error::{GilbertError, Result},
    graph::Graph,
};

/// Largest node count measured exhaustively. With 14 nodes there are at most
/// 91 unordered pairs; 15 nodes would already give 105, above the sample
/// target.
pub const EXHAUSTIVE_NODE_LIMIT: usize = 14;

/// Number of distinct unordered pairs sampled for graphs above
/// [`EXHAUSTIVE_NODE_LIMIT`].
pub const SAMPLE_PAIR_TARGET: usize = 100;

/// Selects the unordered node pairs to measure.
///
/// Up to [`EXHAUSTIVE_NODE_LIMIT`] nodes every pair is enumerated
/// deterministically; beyond it, uniform random pairs are drawn (rejecting
/// self-pairs and duplicates) until [`SAMPLE_PAIR_TARGET`] distinct pairs
/// have been collected. Each returned pair is normalised to
/// `(lower, higher)` and appears exactly once.
///
/// # Examples
/// ```
/// use gilbert_core::sample_pairs;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// assert_eq!(sample_pairs(5, &mut rng).len(), 10);
/// assert_eq!(sample_pairs(40, &mut rng).len(), 100);
/// ```
#[must_use]
pub fn sample_pairs<R: Rng>(node_count: usize, rng: &mut R) -> Vec<(usize, usize)> {
    if node_count <= EXHAUSTIVE_NODE_LIMIT {
        exhaustive_pairs(node_count)
    } else {
        random_pairs(node_count, rng)
    }
}

fn exhaustive_pairs(node_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(node_count * node_count.saturating_sub(1) / 2);
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            pairs.push((left, right));
        }
    }
    pairs
}

fn random_pairs<R: Rng>(node_count: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut seen = HashSet::with_capacity(SAMPLE_PAIR_TARGET);
    let mut pairs = Vec::with_capacity(SAMPLE_PAIR_TARGET);
    // Terminates: node_count > EXHAUSTIVE_NODE_LIMIT guarantees more than
    // SAMPLE_PAIR_TARGET valid pairs exist, and each accepted draw shrinks
    // the remaining space.
    while pairs.len() < SAMPLE_PAIR_TARGET {
        let first = rng.gen_range(0..node_count);
        let second = rng.gen_range(0..node_count);
        if first == second {
            continue;
        }
        let pair = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        if seen.insert(pair) {
            pairs.push(pair);
        }
    }
    pairs
}

/// Computes the shortest-path length (edge count) between two nodes via
/// breadth-first search, or `None` when `target` is unreachable or either
/// node is unknown.
///
/// # Examples
/// ```
/// use gilbert_core::{Graph, shortest_path_length};
///
/// let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).expect("edges are valid");
/// assert_eq!(shortest_path_length(&path, 0, 4), Some(4));
/// assert_eq!(shortest_path_length(&path, 2, 2), Some(0));
///
/// let split = Graph::from_edges(4, [(0, 1), (2, 3)]).expect("edges are valid");
/// assert_eq!(shortest_path_length(&split, 0, 3), None);
/// ```
#[must_use]
pub fn shortest_path_length(graph: &Graph, source: usize, target: usize) -> Option<usize> {
    let nodes = graph.node_count();
    if source >= nodes || target >= nodes {
        return None;
    }
    if source == target {
        return Some(0);
    }

    let mut distances = vec![usize::MAX; nodes];
    distances[source] = 0;
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        let next = distances[node] + 1;
        for neighbour in graph.neighbours(node) {
            if distances[neighbour] == usize::MAX {
                if neighbour == target {
                    return Some(next);
                }
                distances[neighbour] = next;
                queue.push_back(neighbour);
            }
        }
    }

    None
}

/// Estimates the average shortest-path length of a connected graph over the
/// pairs chosen by [`sample_pairs`].
///
/// # Errors
/// Returns [`GilbertError::InvalidNodeCount`] when the graph has fewer than
/// two nodes (no pairs exist) and [`GilbertError::InvariantViolation`] when
/// a sampled pair has no connecting path, which the connectivity gate rules
/// out for pipeline callers.
///
/// # Examples
/// ```
/// use gilbert_core::{Graph, average_path_length};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).expect("edges are valid");
/// let mut rng = SmallRng::seed_from_u64(0);
/// let average = average_path_length(&path, &mut rng).expect("path graph is connected");
/// assert!((average - 2.0).abs() < f64::EPSILON);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the estimate is the arithmetic mean of integer distances"
)]
pub fn average_path_length<R: Rng>(graph: &Graph, rng: &mut R) -> Result<f64> {
    let pairs = sample_pairs(graph.node_count(), rng);
    if pairs.is_empty() {
        return Err(GilbertError::InvalidNodeCount {
            got: graph.node_count(),
        });
    }

    let mut total = 0_usize;
    for &(source, target) in &pairs {
        let distance =
            shortest_path_length(graph, source, target).ok_or(GilbertError::InvariantViolation {
                context: "measuring a sampled pair on a validated graph",
            })?;
        total += distance;
    }
    Ok(total as f64 / pairs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn complete_graph(nodes: usize) -> Graph {
        let edges = (0..nodes).flat_map(|left| ((left + 1)..nodes).map(move |right| (left, right)));
        Graph::from_edges(nodes, edges).expect("edges are valid")
    }

    #[rstest]
    #[case(2, 1)]
    #[case(5, 10)]
    #[case(14, 91)]
    fn small_graphs_enumerate_every_pair(#[case] node_count: usize, #[case] expected: usize) {
        let mut rng = SmallRng::seed_from_u64(1);
        let pairs = sample_pairs(node_count, &mut rng);
        assert_eq!(pairs.len(), expected);

        let distinct: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(distinct.len(), expected);
        for &(left, right) in &pairs {
            assert!(left < right);
            assert!(right < node_count);
        }
    }

    #[rstest]
    #[case(15)]
    #[case(64)]
    fn large_graphs_collect_exactly_the_sample_target(#[case] node_count: usize) {
        let mut rng = SmallRng::seed_from_u64(2);
        let pairs = sample_pairs(node_count, &mut rng);
        assert_eq!(pairs.len(), SAMPLE_PAIR_TARGET);

        let distinct: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(distinct.len(), SAMPLE_PAIR_TARGET);
        for &(left, right) in &pairs {
            assert!(left < right);
            assert!(right < node_count);
        }
    }

    #[test]
    fn path_graph_distances_match_hand_computation() {
        let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).expect("edges are valid");
        assert_eq!(shortest_path_length(&path, 0, 4), Some(4));
        assert_eq!(shortest_path_length(&path, 1, 3), Some(2));
        assert_eq!(shortest_path_length(&path, 4, 0), Some(4));
        assert_eq!(shortest_path_length(&path, 0, 5), None);
    }

    #[test]
    fn path_graph_average_is_two() {
        // (1+2+3+4 + 1+2+3 + 1+2 + 1) / 10 = 2.0
        let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).expect("edges are valid");
        let mut rng = SmallRng::seed_from_u64(5);
        let average = average_path_length(&path, &mut rng).expect("path graph is connected");
        assert!((average - 2.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(2)]
    #[case(9)]
    #[case(20)]
    fn complete_graph_average_is_one(#[case] nodes: usize) {
        let graph = complete_graph(nodes);
        let mut rng = SmallRng::seed_from_u64(6);
        let average = average_path_length(&graph, &mut rng).expect("complete graph is connected");
        assert!((average - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_node_graph_is_rejected() {
        let graph = Graph::with_nodes(1);
        let mut rng = SmallRng::seed_from_u64(7);
        let err = average_path_length(&graph, &mut rng).expect_err("no pairs exist");
        assert_eq!(err, GilbertError::InvalidNodeCount { got: 1 });
    }

    #[test]
    fn unreachable_pair_surfaces_an_invariant_violation() {
        let split = Graph::from_edges(4, [(0, 1), (2, 3)]).expect("edges are valid");
        let mut rng = SmallRng::seed_from_u64(8);
        let err = average_path_length(&split, &mut rng).expect_err("split graph has no full paths");
        assert_eq!(err.code().as_str(), "GILBERT_INVARIANT_VIOLATION");
    }

    #[test]
    fn estimation_is_deterministic_for_a_fixed_seed() {
        let graph = complete_graph(20);
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);
        let left = average_path_length(&graph, &mut first).expect("connected");
        let right = average_path_length(&graph, &mut second).expect("connected");
        assert!((left - right).abs() < f64::EPSILON);
    }
}
