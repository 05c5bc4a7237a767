//! Local and global clustering-coefficient estimation.
//!
//! A node's coefficient is the fraction of its neighbour pairs that are
//! themselves connected. Nodes with fewer than two neighbours have no
//! neighbour pairs; their coefficient is the `NaN` sentinel rather than an
//! error so one isolated node cannot abort a whole trial. The global
//! coefficient averages the defined node values and is `NaN` only when no
//! node has a defined coefficient.

use crate::graph::Graph;

/// Per-node and global clustering coefficients for one graph snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringCoefficients {
    per_node: Vec<f64>,
    global: f64,
}

impl ClusteringCoefficients {
    /// Returns the coefficient for each node, indexed by node id. Entries
    /// for nodes with degree below two hold `NaN`.
    #[must_use]
    pub fn per_node(&self) -> &[f64] {
        &self.per_node
    }

    /// Returns the mean of the defined per-node coefficients, or `NaN` when
    /// every node's coefficient is undefined.
    #[must_use]
    pub const fn global(&self) -> f64 {
        self.global
    }

    /// Consumes the estimate and returns the per-node vector, ready to be
    /// attached to the graph as metadata.
    #[must_use]
    pub fn into_per_node(self) -> Vec<f64> {
        self.per_node
    }
}

/// Computes the clustering coefficient of a single node.
///
/// Returns `NaN` when the node has fewer than two neighbours (including
/// unknown nodes), since no neighbour pair exists.
///
/// # Examples
/// ```
/// use gilbert_core::{Graph, local_clustering_coefficient};
///
/// // Triangle 0-1-2 with a pendant node 3 hanging off node 2.
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]).expect("edges are valid");
/// assert!((local_clustering_coefficient(&graph, 0) - 1.0).abs() < f64::EPSILON);
/// assert!((local_clustering_coefficient(&graph, 2) - 1.0 / 3.0).abs() < f64::EPSILON);
/// assert!(local_clustering_coefficient(&graph, 3).is_nan());
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the coefficient is a ratio of pair counts"
)]
#[must_use]
pub fn local_clustering_coefficient(graph: &Graph, node: usize) -> f64 {
    let neighbours: Vec<usize> = graph.neighbours(node).collect();
    if neighbours.len() < 2 {
        return f64::NAN;
    }

    let mut connected = 0_usize;
    let mut pairs = 0_usize;
    for (index, &left) in neighbours.iter().enumerate() {
        for &right in &neighbours[index + 1..] {
            pairs += 1;
            if graph.has_edge(left, right) {
                connected += 1;
            }
        }
    }
    connected as f64 / pairs as f64
}

/// Computes per-node coefficients for every node and their global mean.
///
/// Nodes whose coefficient is undefined keep the `NaN` sentinel in the
/// per-node vector but are excluded from the global mean; the mean itself is
/// `NaN` only when no node has a defined coefficient.
///
/// # Examples
/// ```
/// use gilbert_core::{Graph, clustering_coefficients};
///
/// // Star: the centre's neighbours share no edges, the leaves are undefined.
/// let star = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).expect("edges are valid");
/// let estimate = clustering_coefficients(&star);
/// assert!((estimate.global() - 0.0).abs() < f64::EPSILON);
/// assert!(estimate.per_node()[1].is_nan());
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the global coefficient is an arithmetic mean"
)]
#[must_use]
pub fn clustering_coefficients(graph: &Graph) -> ClusteringCoefficients {
    let per_node: Vec<f64> = (0..graph.node_count())
        .map(|node| local_clustering_coefficient(graph, node))
        .collect();

    let mut defined = 0_usize;
    let mut total = 0.0_f64;
    for &coefficient in &per_node {
        if !coefficient.is_nan() {
            defined += 1;
            total += coefficient;
        }
    }

    let global = if defined == 0 {
        f64::NAN
    } else {
        total / defined as f64
    };

    ClusteringCoefficients { per_node, global }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn complete_graph(nodes: usize) -> Graph {
        let edges = (0..nodes).flat_map(|left| ((left + 1)..nodes).map(move |right| (left, right)));
        Graph::from_edges(nodes, edges).expect("edges are valid")
    }

    fn star_graph(nodes: usize) -> Graph {
        Graph::from_edges(nodes, (1..nodes).map(|leaf| (0, leaf))).expect("edges are valid")
    }

    #[rstest]
    #[case(3)]
    #[case(6)]
    fn complete_graphs_have_unit_coefficients(#[case] nodes: usize) {
        let estimate = clustering_coefficients(&complete_graph(nodes));
        assert!((estimate.global() - 1.0).abs() < f64::EPSILON);
        for &coefficient in estimate.per_node() {
            assert!((coefficient - 1.0).abs() < f64::EPSILON);
        }
    }

    #[rstest]
    #[case(3)]
    #[case(8)]
    fn star_leaves_are_undefined_and_centre_is_zero(#[case] nodes: usize) {
        let estimate = clustering_coefficients(&star_graph(nodes));
        assert!((estimate.per_node()[0] - 0.0).abs() < f64::EPSILON);
        for &leaf in &estimate.per_node()[1..] {
            assert!(leaf.is_nan());
        }
        assert!((estimate.global() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn triangle_with_pendant_averages_defined_nodes_only() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]).expect("edges are valid");
        let estimate = clustering_coefficients(&graph);
        // Nodes 0 and 1 close their single neighbour pair, node 2 closes one
        // of three, node 3 is undefined: (1 + 1 + 1/3) / 3.
        let expected = (1.0 + 1.0 + 1.0 / 3.0) / 3.0;
        assert!((estimate.global() - expected).abs() < 1e-12);
        assert!(estimate.per_node()[3].is_nan());
    }

    #[test]
    fn graphs_without_defined_coefficients_average_to_nan() {
        let pair = Graph::from_edges(2, [(0, 1)]).expect("edges are valid");
        let estimate = clustering_coefficients(&pair);
        assert!(estimate.global().is_nan());
    }

    #[test]
    fn estimation_is_idempotent_on_a_fixed_graph() {
        let graph = star_graph(6);
        let first = clustering_coefficients(&graph);
        let second = clustering_coefficients(&graph);
        assert_eq!(first.per_node().len(), second.per_node().len());
        assert!((first.global() - second.global()).abs() < f64::EPSILON);
    }
}
