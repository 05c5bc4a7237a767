//! Gilbert core library.
//!
//! Generates Gilbert-model random graphs (every unordered node pair carries
//! an edge independently with probability `p`) and estimates structural
//! statistics over them: average shortest-path length over sampled pairs,
//! local and global clustering coefficients, and average degree.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod clustering;
mod connectivity;
mod error;
mod gilbert;
mod graph;
mod paths;
mod result;
mod sampler;

pub use crate::{
    builder::GilbertBuilder,
    clustering::{ClusteringCoefficients, clustering_coefficients, local_clustering_coefficient},
    connectivity::is_connected,
    error::{GilbertError, GilbertErrorCode, Result},
    gilbert::{Gilbert, Trial},
    graph::Graph,
    paths::{
        EXHAUSTIVE_NODE_LIMIT, SAMPLE_PAIR_TARGET, average_path_length, sample_pairs,
        shortest_path_length,
    },
    result::TrialResult,
    sampler::sample_gilbert,
};
