//! Acyclic connected graphs with leaf-only node deletion.

use std::collections::BTreeSet;
use std::ops::Deref;

use super::base::Graph;
use super::types::{Edge, NodeId};
use crate::error::GraphError;

/// A [`Graph`] meant to stay acyclic and connected.
///
/// The structure does not re-verify acyclicity on every mutation; callers
/// keep it a tree. Node deletion is limited to leaves and isolated nodes so
/// a deletion can never split the tree. Read-only graph queries are
/// available through `Deref<Target = Graph>`.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    graph: Graph,
}

impl Deref for Tree {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.graph
    }
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from edges the caller knows to be acyclic.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Result<Self, GraphError> {
        Ok(Self {
            graph: Graph::from_edges(edges)?,
        })
    }

    /// Borrow the underlying graph.
    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    /// See [`Graph::add_node`].
    pub fn add_node(&mut self, node: NodeId) -> bool {
        self.graph.add_node(node)
    }

    /// See [`Graph::add_edge`].
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        self.graph.add_edge(edge)
    }

    /// See [`Graph::del_edge`].
    pub fn del_edge(&mut self, u: NodeId, v: NodeId) -> Result<Edge, GraphError> {
        self.graph.del_edge(u, v)
    }

    /// Deletes a leaf or an isolated node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotALeaf`] for inner nodes, [`GraphError::NodeNotFound`]
    /// for absent ones.
    pub fn del_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if !self.graph.contains(node) {
            return Err(GraphError::NodeNotFound(node));
        }
        let degree = self.graph.order(node);
        if degree > 1 {
            return Err(GraphError::NotALeaf { node, degree });
        }
        self.graph.del_node(node)
    }

    /// Returns `true` if `node` has exactly one neighbor.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.graph.order(node) == 1
    }

    /// Lazily yields the leaves in ascending node order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes().filter(move |&n| self.is_leaf(n))
    }

    /// Every node reachable from `root`, by iterative depth-first search.
    ///
    /// Returns an empty list if `root` is absent.
    pub fn component(&self, root: NodeId) -> Vec<NodeId> {
        if !self.graph.contains(root) {
            return Vec::new();
        }
        let mut seen = BTreeSet::new();
        let mut stack = vec![root];
        let mut out = Vec::new();
        while let Some(node) = stack.pop() {
            if !seen.insert(node) {
                continue;
            }
            out.push(node);
            for &next in self.graph.neighbors(node) {
                if !seen.contains(&next) {
                    stack.push(next);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId(id)
    }

    fn path_tree() -> Tree {
        // 1 - 2 - 3 - 4, plus 2 - 5
        let edges = [(1, 2), (2, 3), (3, 4), (2, 5)]
            .iter()
            .map(|&(u, v)| Edge::new(n(u), n(v), 1.0).unwrap());
        Tree::from_edges(edges).unwrap()
    }

    #[test]
    fn test_leaves() {
        let t = path_tree();
        let leaves: Vec<NodeId> = t.leaves().collect();
        assert_eq!(leaves, vec![n(1), n(4), n(5)]);
        assert!(t.is_leaf(n(4)));
        assert!(!t.is_leaf(n(2)));
    }

    #[test]
    fn test_del_leaf() {
        let mut t = path_tree();
        t.del_node(n(4)).unwrap();
        assert!(!t.contains(n(4)));
        assert!(t.is_leaf(n(3)));
        assert_eq!(t.edge_count(), 3);
    }

    #[test]
    fn test_del_inner_node_rejected() {
        let mut t = path_tree();
        assert_eq!(
            t.del_node(n(2)),
            Err(GraphError::NotALeaf {
                node: n(2),
                degree: 3
            })
        );
        assert_eq!(t.edge_count(), 4);
    }

    #[test]
    fn test_del_isolated_node() {
        let mut t = Tree::new();
        t.add_node(n(7));
        t.del_node(n(7)).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.del_node(n(7)), Err(GraphError::NodeNotFound(n(7))));
    }

    #[test]
    fn test_component_after_split() {
        let mut t = path_tree();
        t.del_edge(n(2), n(3)).unwrap();
        let mut left = t.component(n(2));
        left.sort();
        assert_eq!(left, vec![n(1), n(2), n(5)]);
        let mut right = t.component(n(3));
        right.sort();
        assert_eq!(right, vec![n(3), n(4)]);
        assert!(t.component(n(42)).is_empty());
    }
}
