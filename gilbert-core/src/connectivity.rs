//! Connectivity gate for generated graphs.
//!
//! Downstream estimators require every node pair to have a finite distance,
//! so the pipeline validates that a generated graph forms a single connected
//! component before any statistic is computed.

use std::collections::VecDeque;

use crate::graph::Graph;

/// Reports whether `graph` is a single connected component.
///
/// Breadth-first search from node `0`; the empty graph is vacuously
/// connected.
///
/// # Examples
/// ```
/// use gilbert_core::{Graph, is_connected};
///
/// let path = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("edges are valid");
/// assert!(is_connected(&path));
///
/// let split = Graph::from_edges(4, [(0, 1), (2, 3)]).expect("edges are valid");
/// assert!(!is_connected(&split));
/// ```
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    let nodes = graph.node_count();
    if nodes == 0 {
        return true;
    }

    let mut visited = vec![false; nodes];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;
    let mut reached = 1;

    while let Some(node) = queue.pop_front() {
        for neighbour in graph.neighbours(node) {
            if !visited[neighbour] {
                visited[neighbour] = true;
                reached += 1;
                queue.push_back(neighbour);
            }
        }
    }

    reached == nodes
}
