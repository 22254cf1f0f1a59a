//! All-pairs shortest paths.
//!
//! Computed once per input graph and reused read-only by the construction
//! heuristic and every local-search move.

mod floyd_warshall;

pub use floyd_warshall::{path_cost, ShortestPaths};
