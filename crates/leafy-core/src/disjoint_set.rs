//! Disjoint-set (union-find) over node ids
//!
//! Union by size plus path compression keeps `find` and `union` at
//! near-constant amortized cost. Both the extender and the randomized
//! heuristic call them once per edge they look at.

use crate::model::NodeId;

/// A partition of node ids into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Every node of `universe` starts in its own singleton set.
    ///
    /// Ids below the largest member that are not in `universe` get slots too
    /// but are not counted by [`set_count`](Self::set_count).
    pub fn new<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let members: Vec<NodeId> = universe.into_iter().collect();
        let len = members.iter().map(|n| n.index() + 1).max().unwrap_or(0);
        let mut sets = vec![false; len];
        for node in &members {
            sets[node.index()] = true;
        }
        DisjointSet {
            parent: (0..len).collect(),
            size: vec![1; len],
            sets: sets.into_iter().filter(|&member| member).count(),
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    /// Panics if `x` lies beyond the universe.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x.index();
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        NodeId(root)
    }

    /// Merge the sets of `x` and `y`. Returns `false` when they already
    /// shared a set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let (mut a, mut b) = (self.find(x).index(), self.find(y).index());
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets among the universe members.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Size of the set containing `x`.
    pub fn set_size(&mut self, x: NodeId) -> usize {
        let root = self.find(x).index();
        self.size[root]
    }
}
