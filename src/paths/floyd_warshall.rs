//! Floyd–Warshall all-pairs shortest paths.

use std::collections::HashMap;

use crate::graph::{Graph, NodeId};

/// Dense distance and predecessor tables for every ordered node pair.
///
/// Built once per graph and read-only afterwards, so a single instance can
/// be shared by the construction heuristic, every neighborhood move, and
/// independent annealing chains on other threads.
///
/// Time: O(V^3), Memory: O(V^2).
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    /// Row-major `n × n`; `f64::INFINITY` marks an unreachable pair.
    dist: Vec<f64>,
    /// `pred[i * n + j]` is the node before `j` on the best `i → j` path.
    pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Runs Floyd–Warshall over `graph`.
    pub fn new(graph: &Graph) -> Self {
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let n = nodes.len();
        let index: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let mut dist = vec![f64::INFINITY; n * n];
        let mut pred = vec![None; n * n];

        for i in 0..n {
            dist[i * n + i] = 0.0;
        }
        for edge in graph.edges() {
            let (i, j) = (index[&edge.u], index[&edge.v]);
            dist[i * n + j] = edge.weight;
            dist[j * n + i] = edge.weight;
            pred[i * n + j] = Some(i);
            pred[j * n + i] = Some(j);
        }

        // D[i,j] = min(D[i,j], D[i,k] + D[k,j])
        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = d_ik + dist[k * n + j];
                    if through_k < dist[i * n + j] {
                        dist[i * n + j] = through_k;
                        pred[i * n + j] = pred[k * n + j];
                    }
                }
            }
        }

        Self {
            nodes,
            index,
            dist,
            pred,
        }
    }

    /// Number of nodes covered by the tables.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Shortest-path cost from `u` to `v`.
    ///
    /// `None` if either node is unknown or no path exists; a zero-cost
    /// path is `Some(0.0)`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Option<f64> {
        let (i, j) = self.indices(u, v)?;
        let d = self.dist[i * self.nodes.len() + j];
        d.is_finite().then_some(d)
    }

    /// The node sequence of a shortest path from `u` to `v`, both
    /// included.
    ///
    /// Reconstructed iteratively by walking predecessors back from `v`.
    /// `None` if no path exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_steiner::graph::{Graph, NodeId};
    /// use u_steiner::paths::ShortestPaths;
    ///
    /// let g = Graph::with_edges(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]).unwrap();
    /// let sp = ShortestPaths::new(&g);
    /// assert_eq!(sp.distance(NodeId(1), NodeId(3)), Some(2.0));
    /// assert_eq!(
    ///     sp.min_path(NodeId(1), NodeId(3)),
    ///     Some(vec![NodeId(1), NodeId(2), NodeId(3)])
    /// );
    /// ```
    pub fn min_path(&self, u: NodeId, v: NodeId) -> Option<Vec<NodeId>> {
        let (i, j) = self.indices(u, v)?;
        let n = self.nodes.len();
        if self.dist[i * n + j].is_infinite() {
            return None;
        }

        let mut path = vec![self.nodes[j]];
        let mut cur = j;
        while cur != i {
            cur = self.pred[i * n + cur]?;
            path.push(self.nodes[cur]);
            if path.len() > n {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    fn indices(&self, u: NodeId, v: NodeId) -> Option<(usize, usize)> {
        Some((*self.index.get(&u)?, *self.index.get(&v)?))
    }
}

/// Sum of the graph's edge weights along `path`.
///
/// `None` if two consecutive nodes are not adjacent. A single-node path
/// costs 0.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<f64> {
    path.windows(2)
        .map(|hop| graph.get_edge(hop[0], hop[1]).map(|e| e.weight))
        .sum()
}
