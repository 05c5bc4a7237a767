//! Result types for experiment trials.

/// Scalar statistics computed from one generated graph.
///
/// Owned by the experiment driver for logging and plotting; never mutated
/// after computation.
///
/// # Examples
/// ```
/// use gilbert_core::TrialResult;
///
/// let result = TrialResult::new(32, 149, 1.83, 0.31, 9.3);
/// assert_eq!(result.nodes(), 32);
/// assert!((result.average_degree() - 9.3).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    nodes: usize,
    edges: usize,
    average_path_length: f64,
    clustering_coefficient: f64,
    average_degree: f64,
}

impl TrialResult {
    /// Bundles the statistics of one trial.
    #[must_use]
    pub const fn new(
        nodes: usize,
        edges: usize,
        average_path_length: f64,
        clustering_coefficient: f64,
        average_degree: f64,
    ) -> Self {
        Self {
            nodes,
            edges,
            average_path_length,
            clustering_coefficient,
            average_degree,
        }
    }

    /// Number of nodes in the measured graph.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Number of unordered edges in the measured graph.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.edges
    }

    /// Mean shortest-path length over the sampled node pairs.
    #[must_use]
    pub const fn average_path_length(&self) -> f64 {
        self.average_path_length
    }

    /// Global clustering coefficient; `NaN` when no node had a defined
    /// local coefficient.
    #[must_use]
    pub const fn clustering_coefficient(&self) -> f64 {
        self.clustering_coefficient
    }

    /// Mean node degree.
    #[must_use]
    pub const fn average_degree(&self) -> f64 {
        self.average_degree
    }
}
