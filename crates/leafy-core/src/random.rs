//! Monte-Carlo spanning trees: shuffled Kruskal passes, best one wins

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::model::Edge;

/// Settings for one run of the randomized heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomizedParams {
    pub trials: usize,
    pub seed: u64,
    pub parallel: bool,
}

/// Outcome of a single trial.
#[derive(Debug, Clone)]
struct Trial {
    index: usize,
    leaves: usize,
    tree: Graph,
}

impl Trial {
    /// More leaves wins; on a tie the earlier trial wins.
    fn better(self, other: Trial) -> Trial {
        if other.leaves > self.leaves || (other.leaves == self.leaves && other.index < self.index) {
            other
        } else {
            self
        }
    }
}

/// Seed for trial `index`. Depends only on the base seed and the index, so a
/// run with more trials replays every trial of a shorter run.
pub fn trial_seed(seed: u64, index: usize) -> u64 {
    // splitmix64 step
    let mut z = seed.wrapping_add((index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// One shuffled Kruskal pass over `edges`.
pub fn random_spanning_tree(graph: &Graph, edges: &[Edge], rng: &mut StdRng) -> Result<Graph> {
    let nodes = graph.nodes();
    let target = nodes.len().saturating_sub(1);

    let mut order = edges.to_vec();
    order.shuffle(rng);

    let mut components = DisjointSet::new(nodes);
    let mut tree = Graph::new(graph.max_nodes());
    let mut added = 0;
    for edge in order {
        if added == target {
            break;
        }
        if components.union(edge.u(), edge.v()) {
            tree.add_edge(edge)?;
            added += 1;
        }
    }

    if added != target || components.set_count() != 1 {
        return Err(Error::PreconditionViolation(format!(
            "random pass reached {added} of {target} tree edges, graph is not connected"
        )));
    }
    Ok(tree)
}

/// Run `params.trials` independent passes and keep the leafiest tree.
pub fn randomized_tree(graph: &Graph, params: RandomizedParams) -> Result<Graph> {
    if params.trials == 0 {
        return Err(Error::PreconditionViolation("randomized heuristic needs at least one trial".into()));
    }

    let edges: Vec<Edge> = graph.edges().into_iter().collect();
    let run = |index: usize| -> Result<Trial> {
        let mut rng = StdRng::seed_from_u64(trial_seed(params.seed, index));
        let tree = random_spanning_tree(graph, &edges, &mut rng)?;
        let leaves = tree.leaves().len();
        Ok(Trial { index, leaves, tree })
    };

    let best = if params.parallel {
        (0..params.trials)
            .into_par_iter()
            .map(run)
            .try_reduce_with(|a: Trial, b: Trial| Ok(a.better(b)))
    } else {
        let mut best: Option<Trial> = None;
        for index in 0..params.trials {
            let trial = run(index)?;
            best = Some(match best {
                Some(current) => current.better(trial),
                None => trial,
            });
        }
        best.map(Ok)
    };

    let best = best
        .transpose()?
        .ok_or_else(|| Error::PreconditionViolation("no randomized trial completed".into()))?;

    tracing::debug!(trial = best.index, leaves = best.leaves, trials = params.trials, "randomized best");
    Ok(best.tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn params(trials: usize) -> RandomizedParams {
        RandomizedParams {
            trials,
            seed: 7,
            parallel: false,
        }
    }

    #[test]
    fn test_path_has_one_tree() {
        let graph = path(5);
        let tree = randomized_tree(&graph, params(10)).unwrap();
        assert_eq!(tree.edges(), graph.edges());
        assert_eq!(tree.leaves().len(), 2);
    }

    #[test]
    fn test_trees_span() {
        let graph = complete(6);
        let tree = randomized_tree(&graph, params(25)).unwrap();
        let summary = tree.analyze();
        assert!(summary.is_spanning_tree());
        assert_eq!(summary.num_nodes, 6);
        assert_eq!(tree.edge_count(), 5);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = complete(7);
        let sequential = randomized_tree(&graph, params(40)).unwrap();
        let parallel = randomized_tree(
            &graph,
            RandomizedParams {
                parallel: true,
                ..params(40)
            },
        )
        .unwrap();
        assert_eq!(sequential.edges(), parallel.edges());
    }

    #[test]
    fn test_disconnected_graph_is_rejected() {
        let result = randomized_tree(&two_triangles(), params(3));
        assert!(matches!(result, Err(Error::PreconditionViolation(_))));
    }

    #[test]
    fn test_zero_trials_is_rejected() {
        assert!(randomized_tree(&star(4), params(0)).is_err());
    }

    #[test]
    fn test_trial_seeds_differ() {
        assert_ne!(trial_seed(0, 0), trial_seed(0, 1));
        assert_eq!(trial_seed(3, 9), trial_seed(3, 9));
    }
}
