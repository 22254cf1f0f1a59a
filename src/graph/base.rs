//! Undirected simple graph with weighted edges.

use std::collections::BTreeMap;

use super::types::{edge_key, Edge, EdgeKey, NodeId};
use crate::collections::UnionFind;
use crate::error::GraphError;

/// Undirected simple weighted graph.
///
/// Every node owns a neighbor list without duplicates; every edge is
/// stored once under its normalised endpoint pair and resolves the same
/// way for `(u, v)` and `(v, u)`. Both maps are ordered so iteration, and
/// therefore every seeded computation built on top, is deterministic.
///
/// # Invariants
///
/// - `v ∈ neighbors(u)` ⇔ `u ∈ neighbors(v)` ⇔ an edge `{u, v}` is stored.
/// - Removing an edge drops any endpoint left without edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
    edges: BTreeMap<EdgeKey, Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a sequence of edges.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_steiner::graph::{Graph, NodeId};
    ///
    /// let g = Graph::with_edges(&[(1, 2, 1.0), (2, 3, 2.0)]).unwrap();
    /// assert_eq!(g.node_count(), 3);
    /// assert_eq!(g.order(NodeId(2)), 2);
    /// ```
    pub fn with_edges(triples: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for &(u, v, w) in triples {
            graph.add_edge(Edge::new(NodeId(u), NodeId(v), w)?)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `node` belongs to the graph.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterates over the nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over the edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Neighbors of `node`; empty if the node is absent.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Degree of `node` (0 if absent).
    pub fn order(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// The edge joining `u` and `v`, in either orientation.
    pub fn get_edge(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.edges.get(&edge_key(u, v))
    }

    /// Returns `true` if `u` and `v` are adjacent.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.get_edge(u, v).is_some()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.values().map(|e| e.weight).sum()
    }

    /// Adds an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Adds an edge, inserting missing endpoints.
    ///
    /// Returns `Ok(false)` when the identical edge is already present.
    ///
    /// # Errors
    ///
    /// - [`GraphError::ConflictingEdge`] if the endpoints are joined by an
    ///   edge of a different weight.
    /// - [`GraphError::InconsistentAdjacency`] if the endpoints are only
    ///   half-linked.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        let (u, v) = (edge.u, edge.v);
        let forward = self.neighbors(u).contains(&v);
        let backward = self.neighbors(v).contains(&u);

        match (forward, backward, self.edges.get(&edge.key())) {
            (true, true, Some(stored)) => {
                if stored.weight == edge.weight {
                    Ok(false)
                } else {
                    Err(GraphError::ConflictingEdge {
                        u,
                        v,
                        existing: stored.weight,
                        requested: edge.weight,
                    })
                }
            }
            (false, false, None) => {
                self.adjacency.entry(u).or_default().push(v);
                self.adjacency.entry(v).or_default().push(u);
                self.edges.insert(edge.key(), edge);
                Ok(true)
            }
            _ => Err(GraphError::InconsistentAdjacency(u, v)),
        }
    }

    /// Removes `node` together with all its incident edges.
    ///
    /// Neighbors left without edges are dropped as well (see
    /// [`del_edge`](Self::del_edge)).
    pub fn del_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        let neighbors = match self.adjacency.get(&node) {
            Some(n) => n.clone(),
            None => return Err(GraphError::NodeNotFound(node)),
        };
        for other in neighbors {
            self.del_edge(node, other)?;
        }
        self.adjacency.remove(&node);
        Ok(())
    }

    /// Removes the edge `{u, v}` and returns it.
    ///
    /// Endpoints that end up with no incident edge are removed from the
    /// graph; callers that need them must add them back.
    pub fn del_edge(&mut self, u: NodeId, v: NodeId) -> Result<Edge, GraphError> {
        let forward = self.neighbors(u).contains(&v);
        let backward = self.neighbors(v).contains(&u);
        if !forward || !backward {
            return Err(GraphError::EdgeNotFound(u, v));
        }

        let removed = self
            .edges
            .remove(&edge_key(u, v))
            .ok_or(GraphError::InconsistentAdjacency(u, v))?;
        for (from, to) in [(u, v), (v, u)] {
            let isolated = match self.adjacency.get_mut(&from) {
                Some(list) => {
                    list.retain(|&n| n != to);
                    list.is_empty()
                }
                None => false,
            };
            if isolated {
                self.adjacency.remove(&from);
            }
        }
        Ok(removed)
    }

    /// Edges of a minimum spanning forest, by Kruskal's algorithm.
    ///
    /// Edges are visited in ascending weight (ties keep endpoint order)
    /// and yielded lazily whenever they join two different components.
    /// The union-find forest lives inside the iterator and is discarded
    /// with it.
    pub fn mst_kruskal(&self) -> impl Iterator<Item = Edge> {
        let mut sorted: Vec<Edge> = self.edges.values().copied().collect();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut forest = UnionFind::new();
        sorted.into_iter().filter(move |e| forest.union(e.u, e.v))
    }
}
