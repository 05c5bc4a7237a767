//! Builder utilities for configuring experiment trials.
//!
//! Validates structural preconditions (node count, edge probability) before
//! any sampling begins, so a misconfigured trial never reaches the sampler.

use crate::{Result, error::GilbertError, gilbert::Gilbert};

const DEFAULT_NODES: usize = 32;
const DEFAULT_EDGE_PROBABILITY: f64 = 0.3;

/// Configures and constructs [`Gilbert`] instances.
///
/// # Examples
/// ```
/// use gilbert_core::GilbertBuilder;
///
/// let gilbert = GilbertBuilder::new()
///     .with_nodes(64)
///     .with_edge_probability(0.2)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(gilbert.nodes(), 64);
/// assert_eq!(gilbert.seed(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct GilbertBuilder {
    nodes: usize,
    edge_probability: f64,
    seed: Option<u64>,
}

impl Default for GilbertBuilder {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: None,
        }
    }
}

impl GilbertBuilder {
    /// Creates a builder populated with the reference experiment's defaults
    /// (32 nodes, edge probability 0.3, entropy-derived seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node count.
    #[must_use]
    pub const fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Overrides the edge probability.
    #[must_use]
    pub const fn with_edge_probability(mut self, edge_probability: f64) -> Self {
        self.edge_probability = edge_probability;
        self
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Fixes the seed of the random generator so the trial is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Gilbert`] instance.
    ///
    /// # Errors
    /// Returns [`GilbertError::InvalidNodeCount`] for fewer than two nodes
    /// and [`GilbertError::InvalidEdgeProbability`] when the probability is
    /// not a finite value in `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use gilbert_core::GilbertBuilder;
    ///
    /// let err = GilbertBuilder::new()
    ///     .with_nodes(1)
    ///     .build()
    ///     .expect_err("a single node admits no node pairs");
    /// assert_eq!(err.code().as_str(), "GILBERT_INVALID_NODE_COUNT");
    /// ```
    pub fn build(self) -> Result<Gilbert> {
        if self.nodes < 2 {
            return Err(GilbertError::InvalidNodeCount { got: self.nodes });
        }
        if !self.edge_probability.is_finite() || !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GilbertError::InvalidEdgeProbability {
                got: self.edge_probability,
            });
        }

        Ok(Gilbert::new(self.nodes, self.edge_probability, self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn defaults_match_the_reference_experiment() {
        let builder = GilbertBuilder::new();
        assert_eq!(builder.nodes(), 32);
        assert!((builder.edge_probability() - 0.3).abs() < f64::EPSILON);
        assert_eq!(builder.seed(), None);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn too_few_nodes_are_rejected(#[case] nodes: usize) {
        let err = GilbertBuilder::new()
            .with_nodes(nodes)
            .build()
            .expect_err("node counts below 2 must fail");
        assert_eq!(err, GilbertError::InvalidNodeCount { got: nodes });
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn out_of_range_probabilities_are_rejected(#[case] edge_probability: f64) {
        let err = GilbertBuilder::new()
            .with_edge_probability(edge_probability)
            .build()
            .expect_err("probability outside [0, 1] must fail");
        assert_eq!(err.code().as_str(), "GILBERT_INVALID_EDGE_PROBABILITY");
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn boundary_probabilities_are_accepted(#[case] edge_probability: f64) {
        let gilbert = GilbertBuilder::new()
            .with_edge_probability(edge_probability)
            .build()
            .expect("boundary probabilities are valid");
        assert!((gilbert.edge_probability() - edge_probability).abs() < f64::EPSILON);
    }
}
