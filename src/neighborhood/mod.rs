//! Edge-exchange neighborhood for Steiner trees.
//!
//! A move removes one random tree edge, reconnects the two halves with the
//! cheapest shortest path between them, then collapses the result back
//! into a pruned tree:
//!
//! 1. Copy the tree and delete a uniformly random edge `{a, b}`.
//! 2. Scan every pair `(u, v)` with `u` on `a`'s side and `v` on `b`'s
//!    side, except `(a, b)` itself, for the cheapest shortest path. Only
//!    paths cheaper than the current tree's total cost qualify.
//! 3. Insert that path, re-run Kruskal over the union and prune
//!    non-terminal leaves.
//!
//! When no pair qualifies the current tree is returned unchanged.

use rand::Rng;

use crate::error::GraphError;
use crate::graph::{Graph, NodeId, SteinerTree};
use crate::heuristic::path_edges;
use crate::paths::ShortestPaths;

/// Generates random neighbors of a Steiner tree.
///
/// Holds no search state: each call works on its own copy of the tree and
/// draws only from the caller's random source.
pub struct Neighborhood<'a> {
    graph: &'a Graph,
    paths: &'a ShortestPaths,
}

impl<'a> Neighborhood<'a> {
    /// Creates a generator over `graph`; `paths` must come from the same
    /// graph.
    pub fn new(graph: &'a Graph, paths: &'a ShortestPaths) -> Self {
        Self { graph, paths }
    }

    /// Produces one neighbor of `tree`.
    ///
    /// A tree without edges is returned as is.
    pub fn generate<R: Rng>(
        &self,
        tree: &SteinerTree,
        rng: &mut R,
    ) -> Result<SteinerTree, GraphError> {
        let edge_count = tree.edge_count();
        if edge_count == 0 {
            return Ok(tree.clone());
        }
        let pick = rng.random_range(0..edge_count);
        let removed = match tree.edges().nth(pick) {
            Some(edge) => *edge,
            None => return Ok(tree.clone()),
        };

        let mut work = tree.clone();
        work.del_edge(removed.u, removed.v)?;
        work.add_node(removed.u);
        work.add_node(removed.v);

        let Some(path) = self.cheapest_reconnection(&work, removed.u, removed.v, tree.cost())
        else {
            tracing::trace!(
                edge = %removed,
                "no reconnecting path beats the current cost, keeping tree"
            );
            return Ok(tree.clone());
        };

        for edge in path_edges(self.graph, &path) {
            work.add_edge(edge?)?;
        }

        let mut neighbor = SteinerTree::from_kruskal(work.as_graph(), work.terminals())?;
        neighbor.del_useless_edges()?;
        Ok(neighbor)
    }

    /// Cheapest shortest path joining the component of `a` to that of `b`.
    fn cheapest_reconnection(
        &self,
        split: &SteinerTree,
        a: NodeId,
        b: NodeId,
        bound: f64,
    ) -> Option<Vec<NodeId>> {
        let side_a = split.component(a);
        let side_b = split.component(b);

        let mut best_cost = bound;
        let mut best_pair = None;
        for &u in &side_a {
            for &v in &side_b {
                if u == a && v == b {
                    continue;
                }
                if let Some(cost) = self.paths.distance(u, v) {
                    if cost < best_cost {
                        best_cost = cost;
                        best_pair = Some((u, v));
                    }
                }
            }
        }

        let (u, v) = best_pair?;
        self.paths.min_path(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::heuristic::HAlgorithm;
    use crate::random::create_rng;
    use crate::test_utils::{n, nine_node_graph, nine_node_terminals};

    fn initial(g: &Graph, sp: &ShortestPaths) -> SteinerTree {
        let terminals = nine_node_terminals();
        HAlgorithm::new(g, &terminals, sp).steiner_tree().unwrap()
    }

    #[test]
    fn test_neighbor_is_valid_steiner_tree() {
        let g = nine_node_graph();
        let sp = ShortestPaths::new(&g);
        let start = initial(&g, &sp);
        let hood = Neighborhood::new(&g, &sp);
        let mut rng = create_rng(42);

        let mut current = start;
        for _ in 0..50 {
            let next = hood.generate(&current, &mut rng).unwrap();
            for t in nine_node_terminals() {
                assert!(next.contains(t), "terminal {t} lost");
                assert!(next.is_terminal(t));
            }
            assert!(next.leaves().all(|l| next.is_terminal(l)));
            assert_eq!(next.edge_count(), next.node_count() - 1);
            assert!((next.cost() - next.total_weight()).abs() < 1e-9);
            for e in next.edges() {
                assert!(g.has_edge(e.u, e.v));
            }
            current = next;
        }
    }

    #[test]
    fn test_neighbor_leaves_input_untouched() {
        let g = nine_node_graph();
        let sp = ShortestPaths::new(&g);
        let start = initial(&g, &sp);
        let before: Vec<Edge> = start.edges().copied().collect();
        let cost = start.cost();

        let hood = Neighborhood::new(&g, &sp);
        let mut rng = create_rng(7);
        let _ = hood.generate(&start, &mut rng).unwrap();

        let after: Vec<Edge> = start.edges().copied().collect();
        assert_eq!(before, after);
        assert_eq!(start.cost(), cost);
    }

    #[test]
    fn test_single_edge_tree_falls_back_to_copy() {
        let g = Graph::with_edges(&[(1, 2, 3.0), (2, 3, 1.0), (1, 3, 1.0)]).unwrap();
        let sp = ShortestPaths::new(&g);
        let mut tree = SteinerTree::with_terminals([n(1), n(2)]);
        tree.add_edge(*g.get_edge(n(1), n(2)).unwrap()).unwrap();

        let hood = Neighborhood::new(&g, &sp);
        let mut rng = create_rng(1);
        let next = hood.generate(&tree, &mut rng).unwrap();
        assert_eq!(next.cost(), tree.cost());
        assert!(next.has_edge(n(1), n(2)));
    }

    #[test]
    fn test_edgeless_tree_is_returned() {
        let g = nine_node_graph();
        let sp = ShortestPaths::new(&g);
        let tree = SteinerTree::with_terminals([n(3)]);
        let hood = Neighborhood::new(&g, &sp);
        let mut rng = create_rng(3);
        let next = hood.generate(&tree, &mut rng).unwrap();
        assert_eq!(next.node_count(), 1);
        assert_eq!(next.cost(), 0.0);
    }

    #[test]
    fn test_reconnection_finds_cheaper_path() {
        // Terminals 1 and 4 joined through a heavy detour 1-5-6-4; a light
        // path 2-3 connects the halves once 5-6 is removed.
        let g = Graph::with_edges(&[
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (1, 5, 1.0),
            (5, 6, 10.0),
            (6, 4, 1.0),
        ])
        .unwrap();
        let sp = ShortestPaths::new(&g);
        let mut tree = SteinerTree::with_terminals([n(1), n(4)]);
        for (u, v) in [(1, 5), (5, 6), (6, 4)] {
            tree.add_edge(*g.get_edge(n(u), n(v)).unwrap()).unwrap();
        }
        assert_eq!(tree.cost(), 12.0);

        let hood = Neighborhood::new(&g, &sp);
        let mut rng = create_rng(11);
        let mut best = tree.cost();
        for _ in 0..20 {
            let next = hood.generate(&tree, &mut rng).unwrap();
            best = best.min(next.cost());
        }
        assert_eq!(best, 3.0);
    }
}
