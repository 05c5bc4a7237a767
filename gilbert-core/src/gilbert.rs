//! Trial orchestration for the gilbert core library.
//!
//! Wires the pipeline together: sample a graph, gate on connectivity, then
//! compute path-length, clustering, and degree statistics from the same
//! immutable snapshot.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::{
    Result,
    clustering::clustering_coefficients,
    connectivity::is_connected,
    error::GilbertError,
    graph::Graph,
    paths::average_path_length,
    result::TrialResult,
    sampler::sample_gilbert,
};

/// Entry point for running one graph-generation and statistics trial.
///
/// # Examples
/// ```
/// use gilbert_core::GilbertBuilder;
///
/// let gilbert = GilbertBuilder::new()
///     .with_nodes(8)
///     .with_edge_probability(1.0)
///     .with_seed(17)
///     .build()
///     .expect("builder configuration is valid");
/// let trial = gilbert.run().expect("complete graphs are connected");
/// assert!((trial.result().average_path_length() - 1.0).abs() < f64::EPSILON);
/// assert!((trial.result().average_degree() - 7.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Gilbert {
    nodes: usize,
    edge_probability: f64,
    seed: Option<u64>,
}

impl Gilbert {
    pub(crate) const fn new(nodes: usize, edge_probability: f64, seed: Option<u64>) -> Self {
        Self {
            nodes,
            edge_probability,
            seed,
        }
    }

    /// Returns the node count configured for this instance.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Executes one trial with a generator derived from the configured seed
    /// (or from entropy when no seed was fixed).
    ///
    /// # Errors
    /// Returns [`GilbertError::Disconnected`] when the generated graph is
    /// not a single connected component. The core performs no retry; that
    /// policy belongs to the caller.
    pub fn run(&self) -> Result<Trial> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Executes one trial against an injected random generator.
    ///
    /// Both the edge sampler and the pair sampler draw from `rng`, so two
    /// runs with identically seeded generators produce identical trials.
    ///
    /// # Errors
    /// Returns [`GilbertError::Disconnected`] when the generated graph is
    /// not a single connected component.
    #[instrument(
        name = "core.run",
        err,
        skip(self, rng),
        fields(
            nodes = self.nodes,
            edge_probability = self.edge_probability,
            seed = self.seed,
        ),
    )]
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Trial> {
        let mut graph = sample_gilbert(self.nodes, self.edge_probability, rng);
        if !is_connected(&graph) {
            warn!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "generated graph is not connected"
            );
            return Err(GilbertError::Disconnected {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
            });
        }

        let average_path_length = average_path_length(&graph, rng)?;
        let estimate = clustering_coefficients(&graph);
        let result = TrialResult::new(
            graph.node_count(),
            graph.edge_count(),
            average_path_length,
            estimate.global(),
            graph.average_degree(),
        );
        graph.annotate_clustering(estimate.into_per_node())?;

        info!(
            edges = result.edges(),
            average_path_length = result.average_path_length(),
            clustering_coefficient = result.clustering_coefficient(),
            average_degree = result.average_degree(),
            "trial completed"
        );
        Ok(Trial { graph, result })
    }
}

/// A completed trial: the generated graph (annotated with per-node
/// clustering coefficients) and its scalar statistics.
#[derive(Debug, Clone)]
pub struct Trial {
    graph: Graph,
    result: TrialResult,
}

impl Trial {
    /// The generated graph snapshot, available for downstream inspection.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The scalar statistics computed from the graph.
    #[must_use]
    pub const fn result(&self) -> &TrialResult {
        &self.result
    }

    /// Splits the trial into its graph and result.
    #[must_use]
    pub fn into_parts(self) -> (Graph, TrialResult) {
        (self.graph, self.result)
    }
}
