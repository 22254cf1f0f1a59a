//! Node identities and weighted undirected edges.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::GraphError;

/// Opaque node identity.
///
/// The wrapped number doubles as the node's display label; algorithms
/// only compare and hash it. The same `NodeId` names the same node in a
/// graph and in every tree carved out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

/// Normalised `(min, max)` endpoint pair used as the edge map key.
pub(crate) type EdgeKey = (NodeId, NodeId);

pub(crate) fn edge_key(u: NodeId, v: NodeId) -> EdgeKey {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// An undirected weighted edge.
///
/// Identity is the unordered endpoint pair: `{u, v}` equals `{v, u}`
/// regardless of weight.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint.
    pub u: NodeId,
    /// Second endpoint.
    pub v: NodeId,
    /// Non-negative finite weight.
    pub weight: f64,
}

impl Edge {
    /// Creates an edge, rejecting self-loops and negative or non-finite
    /// weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_steiner::graph::{Edge, NodeId};
    ///
    /// let e = Edge::new(NodeId(1), NodeId(2), 3.5).unwrap();
    /// assert_eq!(e, Edge::new(NodeId(2), NodeId(1), 0.0).unwrap());
    /// assert!(Edge::new(NodeId(1), NodeId(1), 1.0).is_err());
    /// ```
    pub fn new(u: NodeId, v: NodeId, weight: f64) -> Result<Self, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { u, v, weight });
        }
        Ok(Self { u, v, weight })
    }

    /// Normalised endpoint pair.
    pub(crate) fn key(&self) -> EdgeKey {
        edge_key(self.u, self.v)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.u {
            Some(self.v)
        } else if node == self.v {
            Some(self.u)
        } else {
            None
        }
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        node == self.u || node == self.v
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}; {})", self.u, self.v, self.weight)
    }
}
