//! Stable error-code contract for the public API.

use gilbert_core::{GilbertBuilder, GilbertError, GilbertErrorCode, Graph};
use rstest::rstest;

#[rstest]
#[case(GilbertErrorCode::InvalidNodeCount, "GILBERT_INVALID_NODE_COUNT")]
#[case(
    GilbertErrorCode::InvalidEdgeProbability,
    "GILBERT_INVALID_EDGE_PROBABILITY"
)]
#[case(GilbertErrorCode::InvalidEdge, "GILBERT_INVALID_EDGE")]
#[case(GilbertErrorCode::Disconnected, "GILBERT_DISCONNECTED")]
#[case(GilbertErrorCode::InvariantViolation, "GILBERT_INVARIANT_VIOLATION")]
fn error_codes_are_stable(#[case] code: GilbertErrorCode, #[case] expected: &str) {
    assert_eq!(code.as_str(), expected);
    assert_eq!(code.to_string(), expected);
}

#[test]
fn builder_errors_map_to_their_codes() {
    let node_err = GilbertBuilder::new()
        .with_nodes(0)
        .build()
        .expect_err("zero nodes must fail");
    assert_eq!(node_err.code(), GilbertErrorCode::InvalidNodeCount);

    let probability_err = GilbertBuilder::new()
        .with_edge_probability(2.0)
        .build()
        .expect_err("probability above one must fail");
    assert_eq!(
        probability_err.code(),
        GilbertErrorCode::InvalidEdgeProbability
    );
}

#[test]
fn graph_and_pipeline_errors_map_to_their_codes() {
    let edge_err = Graph::from_edges(2, [(0, 0)]).expect_err("self-loops must fail");
    assert_eq!(edge_err.code(), GilbertErrorCode::InvalidEdge);

    let disconnected = GilbertError::Disconnected { nodes: 4, edges: 0 };
    assert_eq!(disconnected.code(), GilbertErrorCode::Disconnected);
    assert!(disconnected.to_string().contains("not connected"));
}

#[test]
fn error_display_names_the_offending_values() {
    let err = GilbertError::InvalidEdge {
        left: 3,
        right: 7,
        nodes: 4,
    };
    assert_eq!(
        err.to_string(),
        "edge (3, 7) is invalid for a graph of 4 nodes"
    );
}
