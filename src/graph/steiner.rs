//! Steiner trees: trees with protected terminal nodes and a running cost.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Deref;

use super::base::Graph;
use super::tree::Tree;
use super::types::{Edge, NodeId};
use crate::error::GraphError;

/// A [`Tree`] spanning a set of terminal nodes.
///
/// Non-terminal nodes in the tree are Steiner nodes. The total cost is
/// updated on every edge insertion and removal instead of being
/// recomputed.
///
/// # Invariants
///
/// - `cost() == sum of edge weights` (up to floating-point rounding).
/// - Every terminal is a node of the tree.
#[derive(Debug, Clone, Default)]
pub struct SteinerTree {
    tree: Tree,
    terminals: BTreeSet<NodeId>,
    cost: f64,
}

impl Deref for SteinerTree {
    type Target = Tree;

    fn deref(&self) -> &Tree {
        &self.tree
    }
}

impl SteinerTree {
    /// Creates an empty Steiner tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree holding only the given terminals, as isolated nodes.
    pub fn with_terminals<I: IntoIterator<Item = NodeId>>(terminals: I) -> Self {
        let mut st = Self::new();
        for t in terminals {
            st.add_terminal(t);
        }
        st
    }

    /// Wraps the minimum spanning forest of `graph` as a Steiner tree over
    /// `terminals`.
    ///
    /// This collapses any cyclic union of paths back into a tree.
    pub fn from_kruskal<I: IntoIterator<Item = NodeId>>(
        graph: &Graph,
        terminals: I,
    ) -> Result<Self, GraphError> {
        let mut st = Self::with_terminals(terminals);
        for edge in graph.mst_kruskal() {
            st.add_edge(edge)?;
        }
        Ok(st)
    }

    /// Total weight of the tree's edges.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Terminal nodes in ascending order.
    pub fn terminals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.terminals.iter().copied()
    }

    /// Number of terminals.
    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Returns `true` if `node` is a terminal.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.terminals.contains(&node)
    }

    /// Borrow the underlying tree.
    pub fn as_tree(&self) -> &Tree {
        &self.tree
    }

    /// See [`Graph::add_node`].
    pub fn add_node(&mut self, node: NodeId) -> bool {
        self.tree.add_node(node)
    }

    /// Marks `node` as terminal, adding it first if needed.
    pub fn add_terminal(&mut self, node: NodeId) {
        self.tree.add_node(node);
        self.terminals.insert(node);
    }

    /// Unmarks a terminal. The node itself stays in the tree.
    pub fn del_terminal(&mut self, node: NodeId) -> Result<(), GraphError> {
        if self.terminals.remove(&node) {
            Ok(())
        } else {
            Err(GraphError::NotATerminal(node))
        }
    }

    /// Adds an edge and charges its weight when it is new.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        let added = self.tree.add_edge(edge)?;
        if added {
            self.cost += edge.weight;
        }
        Ok(added)
    }

    /// Removes an edge and refunds its weight.
    ///
    /// Non-terminal endpoints left isolated disappear as in
    /// [`Graph::del_edge`]; terminal endpoints are kept.
    pub fn del_edge(&mut self, u: NodeId, v: NodeId) -> Result<Edge, GraphError> {
        let removed = self.tree.del_edge(u, v)?;
        self.cost -= removed.weight;
        for end in [u, v] {
            if self.terminals.contains(&end) {
                self.tree.add_node(end);
            }
        }
        Ok(removed)
    }

    /// Deletes a non-terminal leaf or isolated node.
    ///
    /// # Errors
    ///
    /// [`GraphError::TerminalNode`] for terminals, [`GraphError::NotALeaf`]
    /// for inner nodes, [`GraphError::NodeNotFound`] for absent ones.
    pub fn del_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if !self.tree.contains(node) {
            return Err(GraphError::NodeNotFound(node));
        }
        if self.terminals.contains(&node) {
            return Err(GraphError::TerminalNode(node));
        }
        match self.tree.order(node) {
            0 => self.tree.del_node(node),
            1 => {
                let neighbor = self.tree.neighbors(node)[0];
                self.del_edge(node, neighbor)?;
                if self.tree.contains(node) {
                    self.tree.del_node(node)?;
                }
                Ok(())
            }
            degree => Err(GraphError::NotALeaf { node, degree }),
        }
    }

    /// Prunes Steiner nodes that do not connect anything.
    ///
    /// Non-terminal leaves (and isolated non-terminals) are removed, in
    /// ascending-degree order, until every leaf is a terminal and every
    /// Steiner node has degree two or more. Returns the number of nodes
    /// removed; a second call returns 0.
    pub fn del_useless_edges(&mut self) -> Result<usize, GraphError> {
        let mut order: Vec<NodeId> = self.tree.nodes().collect();
        order.sort_by_key(|&n| self.tree.order(n));
        let mut queue: VecDeque<NodeId> = order.into();

        let mut removed = 0;
        while let Some(node) = queue.pop_front() {
            if self.terminals.contains(&node) || !self.tree.contains(node) {
                continue;
            }
            let neighbor = match self.tree.neighbors(node) {
                [] => None,
                &[only] => Some(only),
                _ => continue,
            };
            self.del_node(node)?;
            removed += 1;
            if let Some(next) = neighbor {
                queue.push_back(next);
            }
        }
        Ok(removed)
    }
}
