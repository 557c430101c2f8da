//! Random instance generation
//!
//! `leafy_instance` plants a spanning tree with many leaves and hides it
//! under extra random edges, so the best answer is known to be at least the
//! planted leaf count.

use std::collections::BTreeSet;

use leafy_core::{Edge, Graph};
use rand::Rng;
use rand::seq::SliceRandom;

/// Children per internal node when [`Branching::Constant`] is used.
pub const BRANCH_FACTOR: usize = 4;
pub const MINIMUM_DEGREE: usize = 2;
pub const MAXIMUM_DEGREE: usize = 10;

/// How many children each internal node of the planted tree receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branching {
    Constant(usize),
    /// Uniform in `[min, max]` per node.
    Random { min: usize, max: usize },
}

impl Default for Branching {
    fn default() -> Self {
        Branching::Constant(BRANCH_FACTOR)
    }
}

impl Branching {
    fn children<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        match self {
            Branching::Constant(n) => n.max(1),
            Branching::Random { min, max } => rng.gen_range(min.max(1)..=max.max(min).max(1)),
        }
    }
}

/// A generated instance and the tree planted in it.
#[derive(Debug, Clone)]
pub struct Instance {
    pub graph: Graph,
    pub planted: Graph,
}

/// Random simple graph on `0..nodes` with `edges` edges, clamped to
/// `nodes * (nodes - 1) / 2`. It may be disconnected.
pub fn sample_graph<R: Rng + ?Sized>(
    nodes: usize,
    edges: usize,
    max_nodes: usize,
    rng: &mut R,
) -> leafy_core::Result<Graph> {
    let mut unused = Vec::new();
    for u in 0..nodes {
        for v in u + 1..nodes {
            unused.push(Edge::new(u, v, max_nodes)?);
        }
    }
    unused.shuffle(rng);
    unused.truncate(edges);
    Graph::from_edges(&unused, max_nodes)
}

/// Random tree on `0..nodes`, grown breadth-first from a random root.
pub fn leafy_tree<R: Rng + ?Sized>(
    nodes: usize,
    branching: Branching,
    max_nodes: usize,
    rng: &mut R,
) -> leafy_core::Result<Graph> {
    let mut order: Vec<usize> = (0..nodes).collect();
    order.shuffle(rng);

    let mut tree = Graph::new(max_nodes);
    let mut next = 1;
    for position in 0..nodes {
        if next >= nodes {
            break;
        }
        let parent = order[position];
        for _ in 0..branching.children(rng) {
            if next >= nodes {
                break;
            }
            tree.add_edge(Edge::new(parent, order[next], max_nodes)?)?;
            next += 1;
        }
    }
    Ok(tree)
}

/// Plant a leafy tree on `0..nodes` and add up to `extra_edges` random edges
/// on top of it. The result is always connected.
pub fn leafy_instance<R: Rng + ?Sized>(
    nodes: usize,
    extra_edges: usize,
    branching: Branching,
    max_nodes: usize,
    rng: &mut R,
) -> leafy_core::Result<Instance> {
    let planted = leafy_tree(nodes, branching, max_nodes, rng)?;
    let mut edges: BTreeSet<Edge> = planted.edges();

    let mut candidates = Vec::new();
    for u in 0..nodes {
        for v in u + 1..nodes {
            let edge = Edge::new(u, v, max_nodes)?;
            if !edges.contains(&edge) {
                candidates.push(edge);
            }
        }
    }
    candidates.shuffle(rng);
    edges.extend(candidates.into_iter().take(extra_edges));

    let graph = Graph::from_edges(&edges, max_nodes)?;
    tracing::debug!(
        nodes,
        edges = graph.edge_count(),
        planted_leaves = planted.leaves().len(),
        "generated instance"
    );
    Ok(Instance { graph, planted })
}
