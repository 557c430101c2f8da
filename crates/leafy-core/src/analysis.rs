//! Structural analysis of a graph or candidate tree

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::model::NodeId;

/// Summary computed by one traversal of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Analysis {
    /// Nodes with degree >= 1.
    pub num_nodes: usize,
    /// Nodes with degree == 1.
    pub num_leaves: usize,
    pub num_components: usize,
    pub has_cycle: bool,
}

impl Analysis {
    pub fn is_connected(&self) -> bool {
        self.num_components == 1
    }

    /// Holds exactly when the graph is a spanning tree of its own node set.
    pub fn is_spanning_tree(&self) -> bool {
        self.is_connected() && !self.has_cycle
    }
}

/// Walk every component of `graph` once.
///
/// The depth-first search keeps an explicit stack of `(node, parent)` pairs.
/// Reaching an already visited neighbor other than the parent means the
/// component has a cycle.
pub fn analyze(graph: &Graph) -> Analysis {
    let mut summary = Analysis::default();
    let mut visited = vec![false; graph.max_nodes()];
    let mut stack: Vec<(NodeId, Option<NodeId>)> = Vec::new();

    for start in graph.nodes() {
        summary.num_nodes += 1;
        if graph.is_leaf(start) {
            summary.num_leaves += 1;
        }
        if visited[start.index()] {
            continue;
        }

        summary.num_components += 1;
        visited[start.index()] = true;
        stack.push((start, None));

        while let Some((node, parent)) = stack.pop() {
            for &next in graph.neighbors(node) {
                if Some(next) == parent {
                    continue;
                }
                if visited[next.index()] {
                    summary.has_cycle = true;
                } else {
                    visited[next.index()] = true;
                    stack.push((next, Some(node)));
                }
            }
        }
    }

    summary
}
