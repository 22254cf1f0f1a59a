//! Shared fixtures for unit tests.

use crate::graph::{Graph, NodeId};

pub(crate) fn n(id: usize) -> NodeId {
    NodeId(id)
}

/// Nine-node instance with a known optimum of 8 for terminals {1, 2, 3, 4}:
/// edges 1-9, 9-5, 5-6, 6-2, 5-3, 5-4.
pub(crate) fn nine_node_graph() -> Graph {
    Graph::with_edges(&[
        (1, 2, 10.0),
        (1, 9, 1.0),
        (2, 6, 1.0),
        (2, 3, 8.0),
        (3, 4, 9.0),
        (3, 5, 2.0),
        (4, 5, 2.0),
        (5, 6, 1.0),
        (5, 9, 1.0),
        (6, 7, 1.0),
        (7, 8, 0.5),
        (8, 9, 0.5),
    ])
    .expect("fixture edges are valid")
}

pub(crate) fn nine_node_terminals() -> Vec<NodeId> {
    vec![n(1), n(2), n(3), n(4)]
}
