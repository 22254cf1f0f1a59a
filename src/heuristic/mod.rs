//! Distance-network heuristic for an initial Steiner tree.
//!
//! # Algorithm
//!
//! 1. Build the complete graph over the terminals, weighting each pair by
//!    its shortest-path cost in the input graph.
//! 2. Take a minimum spanning tree of that complete graph.
//! 3. Replace every MST edge by the shortest path it stands for; paths may
//!    overlap.
//! 4. Run Kruskal again over the union of paths to drop cycles.
//! 5. Prune non-terminal leaves.
//!
//! The result costs at most `2 (1 - 1/l)` times the optimum, where `l` is
//! the number of leaves of an optimal Steiner tree.
//!
//! # Reference
//!
//! Kou, L., Markowsky, G. & Berman, L. (1981). "A fast algorithm for
//! Steiner trees", *Acta Informatica* 15, 141-145.

use crate::error::{GraphError, SteinerError, SteinerResult};
use crate::graph::{Edge, Graph, NodeId, SteinerTree};
use crate::paths::ShortestPaths;

/// Builds an initial Steiner tree from precomputed shortest paths.
pub struct HAlgorithm<'a> {
    graph: &'a Graph,
    terminals: &'a [NodeId],
    paths: &'a ShortestPaths,
}

impl<'a> HAlgorithm<'a> {
    /// Prepares the heuristic for `terminals` on `graph`.
    ///
    /// `paths` must have been computed on the same graph.
    pub fn new(graph: &'a Graph, terminals: &'a [NodeId], paths: &'a ShortestPaths) -> Self {
        Self {
            graph,
            terminals,
            paths,
        }
    }

    /// Runs the heuristic.
    ///
    /// # Errors
    ///
    /// - [`SteinerError::NoTerminals`] for an empty terminal set.
    /// - [`SteinerError::UnknownTerminal`] if a terminal is not in the graph.
    /// - [`SteinerError::Unreachable`] if two terminals are disconnected.
    pub fn steiner_tree(&self) -> SteinerResult<SteinerTree> {
        if self.terminals.is_empty() {
            return Err(SteinerError::NoTerminals);
        }
        if let Some(&t) = self.terminals.iter().find(|&&t| !self.graph.contains(t)) {
            return Err(SteinerError::UnknownTerminal(t));
        }

        let complete = self.complete_terminal_graph()?;
        let union = self.substitute_shortest_paths(&complete)?;
        let mut tree = SteinerTree::from_kruskal(&union, self.terminals.iter().copied())?;
        let pruned = tree.del_useless_edges()?;
        tracing::debug!(
            terminals = self.terminals.len(),
            path_edges = union.edge_count(),
            pruned,
            cost = tree.cost(),
            "built heuristic tree"
        );
        Ok(tree)
    }

    fn complete_terminal_graph(&self) -> SteinerResult<Graph> {
        let mut complete = Graph::new();
        for &t in self.terminals {
            complete.add_node(t);
        }
        for (i, &u) in self.terminals.iter().enumerate() {
            for &v in &self.terminals[i + 1..] {
                if u == v {
                    continue;
                }
                let cost = self
                    .paths
                    .distance(u, v)
                    .ok_or(SteinerError::Unreachable(u, v))?;
                complete.add_edge(Edge::new(u, v, cost)?)?;
            }
        }
        Ok(complete)
    }

    fn substitute_shortest_paths(&self, complete: &Graph) -> SteinerResult<Graph> {
        let mut union = Graph::new();
        for mst_edge in complete.mst_kruskal() {
            let path = self
                .paths
                .min_path(mst_edge.u, mst_edge.v)
                .ok_or(SteinerError::Unreachable(mst_edge.u, mst_edge.v))?;
            for edge in path_edges(self.graph, &path) {
                union.add_edge(edge?)?;
            }
        }
        Ok(union)
    }
}

/// The graph edges along a node path.
pub(crate) fn path_edges<'g>(
    graph: &'g Graph,
    path: &'g [NodeId],
) -> impl Iterator<Item = Result<Edge, GraphError>> + 'g {
    path.windows(2).map(move |hop| {
        graph
            .get_edge(hop[0], hop[1])
            .copied()
            .ok_or(GraphError::EdgeNotFound(hop[0], hop[1]))
    })
}
