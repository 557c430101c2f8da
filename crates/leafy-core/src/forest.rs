//! Greedy maximally-leafy forest (Lu-Ravi style)
//!
//! Nodes are visited once, in ascending id order. A node becomes a branching
//! point of the forest only if joining it to its neighbors would give it
//! forest degree three or more; otherwise it contributes no edges.

use crate::disjoint_set::DisjointSet;
use crate::error::Result;
use crate::graph::Graph;
use crate::model::{Edge, NodeId};

/// Forest degree a node must reach before it is worth turning it into an
/// internal node.
pub const BRANCH_THRESHOLD: usize = 3;

/// Build an acyclic forest whose edges are a subset of `graph`'s edges.
pub fn leafy_forest(graph: &Graph) -> Result<Graph> {
    let mut forest = Graph::new(graph.max_nodes());
    let mut components = DisjointSet::new(graph.nodes());
    let mut degree = vec![0usize; graph.max_nodes()];

    // (neighbor, representative of its component) pairs picked for `v`
    let mut picked: Vec<(NodeId, NodeId)> = Vec::new();

    for v in graph.nodes() {
        picked.clear();
        let own = components.find(v);
        for &u in graph.neighbors(v) {
            let root = components.find(u);
            if root != own && picked.iter().all(|&(_, seen)| seen != root) {
                picked.push((u, root));
            }
        }

        if degree[v.index()] + picked.len() < BRANCH_THRESHOLD {
            continue;
        }

        for &(u, _) in &picked {
            forest.add_edge(Edge::new(u.index(), v.index(), graph.max_nodes())?)?;
            components.union(u, v);
            degree[u.index()] += 1;
            degree[v.index()] += 1;
        }
        tracing::trace!(node = %v, joined = picked.len(), "branched");
    }

    tracing::debug!(edges = forest.edge_count(), leaves = forest.leaves().len(), "leafy forest built");
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_star_is_taken_whole() {
        let graph = star(5);
        let forest = leafy_forest(&graph).unwrap();
        assert_eq!(forest.edges(), graph.edges());
    }

    #[test]
    fn test_path_has_no_branch_point() {
        let forest = leafy_forest(&path(5)).unwrap();
        assert_eq!(forest.edge_count(), 0);
    }

    #[test]
    fn test_complete_graph_yields_star() {
        let forest = leafy_forest(&complete(4)).unwrap();
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(forest.degree(NodeId(0)), 3);
        assert_eq!(forest.leaves().len(), 3);
    }

    #[test]
    fn test_existing_degree_counts_toward_threshold() {
        // 0 joins {1,2,3}; afterwards 1 has forest degree 1 and two fresh
        // neighbors 4 and 5, which is enough to branch again.
        let graph = graph(8, &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5)]);
        let forest = leafy_forest(&graph).unwrap();
        assert_eq!(forest.edges(), graph.edges());
        assert_eq!(forest.degree(NodeId(1)), 3);
    }

    #[test]
    fn test_one_edge_per_component() {
        // 2 and 3 already share a component when 4 is visited, so 4 only
        // takes one of them and falls below the threshold.
        let graph = graph(8, &[(0, 1), (0, 2), (0, 3), (2, 4), (3, 4), (4, 5)]);
        let forest = leafy_forest(&graph).unwrap();
        assert!(!forest.contains_edge(&edge(4, 5)));
        assert!(!forest.analyze().has_cycle);
    }
}
