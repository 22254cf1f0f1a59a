//! Disjoint-set forest keyed by arbitrary hashable elements.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest with path compression and union by rank.
///
/// Elements are registered lazily: [`find`](Self::find) on an unseen
/// element makes it a singleton set. Amortized cost per operation is
/// O(α(n)), the inverse Ackermann function.
///
/// A forest is built for a single MST computation and dropped afterwards.
///
/// # Examples
///
/// ```
/// use u_steiner::collections::UnionFind;
///
/// let mut uf = UnionFind::new();
/// assert!(uf.union(1, 2));
/// assert!(!uf.union(2, 1));
/// assert_eq!(uf.find(1), uf.find(2));
/// assert_ne!(uf.find(1), uf.find(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnionFind<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u8>,
}

impl<T: Copy + Eq + Hash> UnionFind<T> {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// Number of elements seen so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no element has been registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`,
    /// registering `x` as a singleton if it was unseen.
    pub fn find(&mut self, x: T) -> T {
        let mut root = match self.parent.get(&x) {
            Some(&p) => p,
            None => {
                self.parent.insert(x, x);
                self.rank.insert(x, 0);
                return x;
            }
        };
        while let Some(&p) = self.parent.get(&root) {
            if p == root {
                break;
            }
            root = p;
        }

        // Point every node on the walked path straight at the root.
        let mut node = x;
        while node != root {
            let next = self.parent[&node];
            self.parent.insert(node, root);
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The lower-rank root is attached below the higher-rank one; rank
    /// grows only on ties. Returns `false` if both were already in the
    /// same set.
    pub fn union(&mut self, x: T, y: T) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }

        let x_rank = self.rank[&x_root];
        let y_rank = self.rank[&y_root];
        if x_rank > y_rank {
            self.parent.insert(y_root, x_root);
        } else if x_rank < y_rank {
            self.parent.insert(x_root, y_root);
        } else {
            self.parent.insert(y_root, x_root);
            self.rank.insert(x_root, x_rank.saturating_add(1));
        }
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: T, y: T) -> bool {
        self.find(x) == self.find(y)
    }
}
