//! Undirected adjacency-list graph over a bounded node-id space

use std::collections::BTreeSet;

use crate::analysis::{self, Analysis};
use crate::error::Result;
use crate::model::{Edge, NodeId};

/// A simple undirected graph. Every id in `[0, max_nodes)` owns an ordered
/// neighbor list; most of them stay empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    neighbors: Vec<Vec<NodeId>>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("max_nodes", &self.neighbors.len())
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

impl Graph {
    /// An edgeless graph with room for `max_nodes` ids.
    pub fn new(max_nodes: usize) -> Self {
        Graph {
            neighbors: vec![Vec::new(); max_nodes],
        }
    }

    /// Build a graph from an edge set. The set is expected to be free of
    /// duplicates; nothing is deduplicated here.
    pub fn from_edges<'a, I>(edges: I, max_nodes: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Graph::new(max_nodes);
        for edge in edges {
            graph.add_edge(*edge)?;
        }
        Ok(graph)
    }

    /// Append both directed halves of `edge`.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        edge.check(self.max_nodes())?;
        let (u, v) = edge.ends();
        self.neighbors[u.index()].push(v);
        self.neighbors[v.index()].push(u);
        Ok(())
    }

    /// Size of the node-id space.
    pub fn max_nodes(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node` in insertion order. Out-of-range ids have none.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.neighbors.get(node.index()) {
            Some(adjacent) => adjacent,
            None => &[],
        }
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.degree(node) == 1
    }

    /// Every edge, rebuilt from the adjacency lists on each call.
    pub fn edges(&self) -> BTreeSet<Edge> {
        let mut edges = BTreeSet::new();
        for (index, adjacent) in self.neighbors.iter().enumerate() {
            for &other in adjacent {
                if index < other.index() {
                    edges.insert(Edge::from_ordered(NodeId(index), other));
                }
            }
        }
        edges
    }

    /// Nodes with at least one incident edge.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.active().collect()
    }

    /// Nodes of degree one, ascending.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.active().filter(|&node| self.is_leaf(node)).collect()
    }

    pub fn node_count(&self) -> usize {
        self.active().count()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        let (u, v) = edge.ends();
        self.neighbors(u).contains(&v)
    }

    /// Recompute the structural summary of this graph.
    pub fn analyze(&self) -> Analysis {
        analysis::analyze(self)
    }

    fn active(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .filter(|(_, adjacent)| !adjacent.is_empty())
            .map(|(index, _)| NodeId(index))
    }
}
