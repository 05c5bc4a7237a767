//! Undirected simple-graph model shared by the sampler and the estimators.
//!
//! Nodes are dense integer identifiers `0..n`. Edges are unordered, without
//! self-loops or duplicates, held as per-node adjacency sets so neighbour
//! iteration is deterministic. The structure is immutable once generation
//! completes; the per-node clustering coefficients attached afterwards are
//! inspection metadata, not structural mutation.

use std::collections::BTreeSet;

use crate::error::{GilbertError, Result};

/// An undirected simple graph over nodes `0..n`.
///
/// # Examples
/// ```
/// use gilbert_core::Graph;
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("edges are valid");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge(1, 0));
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
    clustering: Option<Vec<f64>>,
}

impl Graph {
    /// Creates an edgeless graph with `nodes` nodes.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::Graph;
    ///
    /// let graph = Graph::with_nodes(4);
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); nodes],
            edge_count: 0,
            clustering: None,
        }
    }

    /// Builds a graph from explicit unordered edges.
    ///
    /// Duplicate edges (in either orientation) are collapsed.
    ///
    /// # Errors
    /// Returns [`GilbertError::InvalidEdge`] when an edge is a self-loop or
    /// references a node outside `0..nodes`.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).expect("edges are valid");
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// let err = Graph::from_edges(3, [(1, 1)]).expect_err("self-loops are rejected");
    /// assert_eq!(err.code().as_str(), "GILBERT_INVALID_EDGE");
    /// ```
    pub fn from_edges<I>(nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::with_nodes(nodes);
        for (left, right) in edges {
            if left == right || left >= nodes || right >= nodes {
                return Err(GilbertError::InvalidEdge { left, right, nodes });
            }
            graph.insert_edge(left, right);
        }
        Ok(graph)
    }

    /// Records an edge between two distinct in-range nodes, returning whether
    /// it was newly inserted. Callers validate the endpoints.
    pub(crate) fn insert_edge(&mut self, left: usize, right: usize) -> bool {
        let inserted = self.adjacency[left].insert(right);
        if inserted {
            self.adjacency[right].insert(left);
            self.edge_count += 1;
        }
        inserted
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of unordered edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the degree of `node`, or `None` for an unknown node.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1), (0, 2)]).expect("edges are valid");
    /// assert_eq!(graph.degree(0), Some(2));
    /// assert_eq!(graph.degree(3), None);
    /// ```
    #[must_use]
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.adjacency.get(node).map(BTreeSet::len)
    }

    /// Iterates over the neighbours of `node` in ascending order. Unknown
    /// nodes yield an empty iterator.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(node).into_iter().flatten().copied()
    }

    /// Reports whether an edge connects `left` and `right` in either
    /// orientation.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        self.adjacency
            .get(left)
            .is_some_and(|neighbours| neighbours.contains(&right))
    }

    /// Iterates over all unordered edges as `(left, right)` with
    /// `left < right`.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(2, 0), (0, 1)]).expect("edges are valid");
    /// let edges: Vec<_> = graph.edges().collect();
    /// assert_eq!(edges, vec![(0, 1), (0, 2)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(left, neighbours)| {
                neighbours
                    .iter()
                    .copied()
                    .filter(move |&right| left < right)
                    .map(move |right| (left, right))
            })
    }

    /// Returns the average node degree, `2·|E| / n`.
    ///
    /// Undefined (`NaN`) for the empty graph, which the generator's
    /// preconditions rule out.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).expect("edges are valid");
    /// assert!((graph.average_degree() - 1.5).abs() < f64::EPSILON);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "average degree is a floating-point summary statistic"
    )]
    #[must_use]
    pub fn average_degree(&self) -> f64 {
        (2 * self.edge_count) as f64 / self.adjacency.len() as f64
    }

    /// Attaches the per-node clustering coefficients computed by the
    /// estimator. The vector is indexed by node id; entries for nodes with
    /// fewer than two neighbours hold the `NaN` sentinel.
    ///
    /// # Errors
    /// Returns [`GilbertError::InvariantViolation`] when the vector length
    /// does not match the node count.
    pub fn annotate_clustering(&mut self, coefficients: Vec<f64>) -> Result<()> {
        if coefficients.len() != self.adjacency.len() {
            return Err(GilbertError::InvariantViolation {
                context: "attaching per-node clustering metadata",
            });
        }
        self.clustering = Some(coefficients);
        Ok(())
    }

    /// Returns the recorded clustering coefficient for `node`, or `None`
    /// before annotation or for an unknown node. A `NaN` value marks a node
    /// whose coefficient is undefined (degree below two).
    #[must_use]
    pub fn node_clustering_coefficient(&self, node: usize) -> Option<f64> {
        self.clustering
            .as_deref()
            .and_then(|coefficients| coefficients.get(node).copied())
    }

    /// Returns the full per-node coefficient mapping once annotated.
    #[must_use]
    pub fn clustering_coefficients(&self) -> Option<&[f64]> {
        self.clustering.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::self_loop(3, (1, 1))]
    #[case::left_out_of_range(3, (3, 0))]
    #[case::right_out_of_range(3, (0, 7))]
    fn from_edges_rejects_invalid_edges(#[case] nodes: usize, #[case] edge: (usize, usize)) {
        let err = Graph::from_edges(nodes, [edge]).expect_err("edge must be rejected");
        assert_eq!(
            err,
            GilbertError::InvalidEdge {
                left: edge.0,
                right: edge.1,
                nodes,
            }
        );
    }

    #[test]
    fn duplicate_edges_collapse() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 0), (0, 1)]).expect("edges are valid");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), Some(1));
        assert_eq!(graph.degree(1), Some(1));
    }

    #[test]
    fn neighbours_are_sorted_and_symmetric() {
        let graph = Graph::from_edges(4, [(2, 0), (2, 3), (2, 1)]).expect("edges are valid");
        let neighbours: Vec<_> = graph.neighbours(2).collect();
        assert_eq!(neighbours, vec![0, 1, 3]);
        assert!(graph.has_edge(3, 2));
        assert_eq!(graph.neighbours(9).count(), 0);
    }

    #[test]
    fn average_degree_of_complete_graph_is_nodes_minus_one() {
        let nodes = 6;
        let edges = (0..nodes).flat_map(|left| ((left + 1)..nodes).map(move |right| (left, right)));
        let graph = Graph::from_edges(nodes, edges).expect("edges are valid");
        assert!((graph.average_degree() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn annotation_requires_matching_length() {
        let mut graph = Graph::with_nodes(3);
        let err = graph
            .annotate_clustering(vec![0.0; 2])
            .expect_err("length mismatch must be rejected");
        assert_eq!(err.code().as_str(), "GILBERT_INVARIANT_VIOLATION");

        graph
            .annotate_clustering(vec![0.5, f64::NAN, 1.0])
            .expect("matching length must be accepted");
        assert_eq!(graph.node_clustering_coefficient(0), Some(0.5));
        assert!(
            graph
                .node_clustering_coefficient(1)
                .is_some_and(f64::is_nan)
        );
        assert_eq!(graph.node_clustering_coefficient(3), None);
    }
}
