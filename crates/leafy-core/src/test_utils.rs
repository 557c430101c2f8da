//! Test fixtures for Leafy

use crate::{Edge, Graph};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Node bound used by the named fixtures.
pub const TEST_BOUND: usize = 16;

pub fn edge(u: usize, v: usize) -> Edge {
    Edge::new(u, v, TEST_BOUND).unwrap()
}

/// Build a graph with node bound `max_nodes` from raw pairs.
pub fn graph(max_nodes: usize, pairs: &[(usize, usize)]) -> Graph {
    let edges: Vec<Edge> = pairs
        .iter()
        .map(|&(u, v)| Edge::new(u, v, max_nodes).unwrap())
        .collect();
    Graph::from_edges(&edges, max_nodes).unwrap()
}

/// Center 0 joined to 1..n.
pub fn star(n: usize) -> Graph {
    let pairs: Vec<_> = (1..n).map(|i| (0, i)).collect();
    graph(TEST_BOUND, &pairs)
}

/// 0-1-2-...-(n-1).
pub fn path(n: usize) -> Graph {
    let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    graph(TEST_BOUND, &pairs)
}

pub fn complete(n: usize) -> Graph {
    let mut pairs = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            pairs.push((u, v));
        }
    }
    graph(TEST_BOUND, &pairs)
}

/// Triangles {0,1,2} and {3,4,5}, no edge between them.
pub fn two_triangles() -> Graph {
    graph(TEST_BOUND, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)])
}

/// Arbitrary duplicate-free edge sets, connected or not.
pub fn edge_sets(max_nodes: usize) -> impl Strategy<Value = BTreeSet<Edge>> {
    prop::collection::vec((0..max_nodes, 0..max_nodes), 0..60).prop_map(move |pairs| {
        pairs
            .into_iter()
            .filter_map(|(u, v)| Edge::new(u, v, max_nodes).ok())
            .collect()
    })
}

/// Connected graphs: a random spanning tree over `0..n` plus extra edges.
pub fn connected_graphs(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (2..=max_nodes)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(any::<prop::sample::Index>(), n - 1),
                prop::collection::vec((0..n, 0..n), 0..3 * n),
            )
        })
        .prop_map(move |(parents, extra)| {
            let mut edges = BTreeSet::new();
            for (i, parent) in parents.iter().enumerate() {
                let child = i + 1;
                edges.insert(Edge::new(child, parent.index(child), max_nodes).unwrap());
            }
            for (u, v) in extra {
                if let Ok(e) = Edge::new(u, v, max_nodes) {
                    edges.insert(e);
                }
            }
            Graph::from_edges(&edges, max_nodes).unwrap()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        assert_eq!(star(5).edge_count(), 4);
        assert_eq!(path(5).leaves().len(), 2);
        assert_eq!(complete(4).edge_count(), 6);
        assert_eq!(two_triangles().analyze().num_components, 2);
    }
}
