//! Weighted undirected graph model.
//!
//! Three layers share one storage scheme:
//!
//! - [`Graph`]: simple undirected graph, ordered adjacency lists and a
//!   single edge map keyed by the normalised endpoint pair.
//! - [`Tree`]: a graph kept acyclic by its callers; only leaves may be
//!   deleted.
//! - [`SteinerTree`]: a tree with protected terminal nodes and an
//!   incrementally maintained total cost.
//!
//! Trees are values: they are rebuilt from edge lists (for example from
//! [`Graph::mst_kruskal`]) rather than aliased.

mod base;
mod steiner;
mod tree;
mod types;

pub use base::Graph;
pub use steiner::SteinerTree;
pub use tree::Tree;
pub use types::{Edge, NodeId};
