//! Error types for graph mutation and Steiner tree solving.
//!
//! Every failing mutation leaves the structure untouched, so callers may
//! recover and continue with the same graph or tree.

use thiserror::Error;

use crate::graph::NodeId;

/// A malformed mutation on a [`Graph`](crate::graph::Graph),
/// [`Tree`](crate::graph::Tree) or [`SteinerTree`](crate::graph::SteinerTree).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The node is not part of the structure.
    #[error("node {0} not in graph")]
    NodeNotFound(NodeId),

    /// No edge joins the two nodes.
    #[error("edge ({0}, {1}) not in graph")]
    EdgeNotFound(NodeId, NodeId),

    /// An edge would connect a node to itself.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    /// Edge weights must be finite and non-negative.
    #[error("invalid weight {weight} on edge ({u}, {v})")]
    InvalidWeight {
        /// First endpoint.
        u: NodeId,
        /// Second endpoint.
        v: NodeId,
        /// Rejected weight.
        weight: f64,
    },

    /// The endpoints are already joined by an edge of another weight.
    #[error("edge ({u}, {v}) already present with weight {existing}, refusing weight {requested}")]
    ConflictingEdge {
        /// First endpoint.
        u: NodeId,
        /// Second endpoint.
        v: NodeId,
        /// Weight of the stored edge.
        existing: f64,
        /// Weight of the rejected edge.
        requested: f64,
    },

    /// Adjacency lists and the edge map disagree about `{u, v}`.
    #[error("inconsistent adjacency between {0} and {1}")]
    InconsistentAdjacency(NodeId, NodeId),

    /// Trees only delete leaves or isolated nodes.
    #[error("cannot delete {node}: degree {degree}, only leaves may be deleted")]
    NotALeaf {
        /// The node that was asked to go.
        node: NodeId,
        /// Its current degree.
        degree: usize,
    },

    /// Terminals are protected from deletion.
    #[error("cannot delete terminal node {0}")]
    TerminalNode(NodeId),

    /// The node was never marked as terminal.
    #[error("{0} is not a terminal node")]
    NotATerminal(NodeId),
}

/// Invalid annealing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(pub String);

/// Failure of a full Steiner tree computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteinerError {
    /// A structural mutation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The annealing parameters were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The terminal set is empty.
    #[error("at least one terminal node is required")]
    NoTerminals,

    /// A terminal does not belong to the input graph.
    #[error("terminal {0} is not a node of the graph")]
    UnknownTerminal(NodeId),

    /// Two terminals lie in different connected components.
    #[error("no path between terminals {0} and {1}; the graph must be connected")]
    Unreachable(NodeId, NodeId),
}

/// Result alias for solver operations.
pub type SteinerResult<T> = Result<T, SteinerError>;
