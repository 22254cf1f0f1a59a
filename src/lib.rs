//! Steiner tree approximation on weighted undirected graphs.
//!
//! Given a graph and a set of terminal nodes, finds a low-cost tree that
//! spans every terminal, optionally passing through other (Steiner) nodes.
//!
//! - **Graph model**: [`Graph`], [`Tree`] and [`SteinerTree`] with
//!   structural guards and incrementally maintained cost.
//! - **Shortest paths**: all-pairs Floyd–Warshall with path reconstruction.
//! - **H-algorithm**: distance-network heuristic that builds the initial
//!   tree from an MST over the terminals' metric closure.
//! - **Neighborhood**: remove one tree edge and reconnect the two halves
//!   through the cheapest shortest path.
//! - **Simulated Annealing (SA)**: staged geometric cooling with
//!   stagnation stopping, driving the neighborhood from the heuristic tree.
//!
//! # Examples
//!
//! ```
//! use u_steiner::{Graph, NodeId, SaConfig, SteinerSolver};
//!
//! let g = Graph::with_edges(&[(1, 2, 2.0), (2, 3, 2.0), (1, 3, 5.0)]).unwrap();
//! let result = SteinerSolver::solve(&g, &[NodeId(1), NodeId(3)], &SaConfig::default()).unwrap();
//! assert_eq!(result.best_cost, 4.0);
//! ```

pub mod collections;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod neighborhood;
pub mod paths;
pub mod random;
pub mod sa;
pub mod solver;

#[cfg(test)]
mod test_utils;

pub use error::{ConfigError, GraphError, SteinerError, SteinerResult};
pub use graph::{Edge, Graph, NodeId, SteinerTree, Tree};
pub use sa::{SaConfig, SaResult, StopReason};
pub use solver::SteinerSolver;
