//! Grow a leafy forest into a spanning tree
//!
//! Residual edges are tried in three tiers so that edges touching forest
//! leaves are consumed last: internal-internal, then internal-leaf, then
//! leaf-leaf. Nodes outside the forest count as leaves.

use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::model::{Edge, NodeId};

/// Priority bucket of a residual edge, lowest tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    InternalInternal,
    InternalLeaf,
    LeafLeaf,
}

impl Tier {
    /// Classify `edge` by the forest degree of its endpoints.
    pub fn of(edge: &Edge, forest: &Graph) -> Tier {
        let internal = |node: NodeId| forest.degree(node) >= 2;
        match (internal(edge.u()), internal(edge.v())) {
            (true, true) => Tier::InternalInternal,
            (false, false) => Tier::LeafLeaf,
            _ => Tier::InternalLeaf,
        }
    }
}

/// Order `residual` by tier, keeping input order inside a tier.
pub fn tiered<I>(residual: I, forest: &Graph) -> Vec<Edge>
where
    I: IntoIterator<Item = Edge>,
{
    let mut edges: Vec<Edge> = residual.into_iter().collect();
    // sort_by_key is stable
    edges.sort_by_key(|edge| Tier::of(edge, forest));
    edges
}

/// Extend `forest` with edges of `graph` until it spans every node of
/// `graph`.
///
/// Fails with [`Error::PreconditionViolation`] if `graph` is not connected,
/// since no choice of residual edges can then join all components.
pub fn extend_forest(forest: Graph, graph: &Graph) -> Result<Graph> {
    let nodes = graph.nodes();
    let mut components = DisjointSet::new(nodes.iter().copied());
    for edge in forest.edges() {
        components.union(edge.u(), edge.v());
    }

    let forest_edges = forest.edges();
    let residual = graph.edges().into_iter().filter(|e| !forest_edges.contains(e));
    let candidates = tiered(residual, &forest);

    let mut tree = forest;
    for edge in candidates {
        if components.set_count() <= 1 {
            break;
        }
        if components.union(edge.u(), edge.v()) {
            tree.add_edge(edge)?;
        }
    }

    if components.set_count() != 1 {
        tracing::warn!(components = components.set_count(), "forest cannot be joined into one tree");
        return Err(Error::PreconditionViolation(format!(
            "graph splits into {} components, a spanning tree needs exactly one",
            components.set_count()
        )));
    }

    debug_assert_eq!(tree.edge_count(), nodes.len() - 1);
    Ok(tree)
}
