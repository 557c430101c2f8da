//! Algorithm registry and the orchestrator that keeps the leafiest tree

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::extend::extend_forest;
use crate::forest::leafy_forest;
use crate::graph::Graph;
use crate::random::randomized_tree;

/// Every spanning-tree heuristic the solver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Greedy leafy forest, then tiered extension to a tree.
    LeafyForest,
    /// Best of many shuffled Kruskal passes.
    Randomized,
}

impl Algorithm {
    /// Default registry, in tie-break order.
    pub const ALL: [Algorithm; 2] = [Algorithm::LeafyForest, Algorithm::Randomized];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LeafyForest => "leafy-forest",
            Algorithm::Randomized => "randomized",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.name() == name)
    }

    /// Produce a spanning tree of `graph`. The input is never modified.
    pub fn solve(self, graph: &Graph, config: &SolverConfig) -> Result<Graph> {
        match self {
            Algorithm::LeafyForest => extend_forest(leafy_forest(graph)?, graph),
            Algorithm::Randomized => randomized_tree(graph, config.randomized()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best tree found for one graph.
#[derive(Debug, Clone)]
pub struct Solution {
    pub tree: Graph,
    pub analysis: Analysis,
    pub algorithm: Algorithm,
}

impl Solution {
    pub fn num_leaves(&self) -> usize {
        self.analysis.num_leaves
    }
}

/// Runs the registered algorithms and keeps the strictly leafiest tree.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    algorithms: Vec<Algorithm>,
}

impl Solver {
    /// Solver with the default registry.
    pub fn new(config: SolverConfig) -> Self {
        Solver {
            config,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Solver with a custom registry. Earlier entries win ties.
    pub fn with_algorithms(config: SolverConfig, algorithms: Vec<Algorithm>) -> Result<Self> {
        if algorithms.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(Solver { config, algorithms })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Solve one connected graph.
    pub fn solve(&self, graph: &Graph) -> Result<Solution> {
        let input = graph.analyze();
        if !input.is_connected() {
            tracing::warn!(components = input.num_components, "input graph is not connected");
            return Err(Error::PreconditionViolation(format!(
                "input graph has {} components, expected 1",
                input.num_components
            )));
        }

        let mut best: Option<Solution> = None;
        for &algorithm in &self.algorithms {
            let tree = algorithm.solve(graph, &self.config)?;
            let analysis = tree.analyze();
            if !analysis.is_spanning_tree() || analysis.num_nodes != input.num_nodes {
                return Err(Error::PreconditionViolation(format!(
                    "{algorithm} returned a graph that is not a spanning tree"
                )));
            }
            tracing::debug!(%algorithm, leaves = analysis.num_leaves, "algorithm finished");

            let improves = best
                .as_ref()
                .is_none_or(|current| analysis.num_leaves > current.analysis.num_leaves);
            if improves {
                best = Some(Solution {
                    tree,
                    analysis,
                    algorithm,
                });
            }
        }

        let best = best.ok_or(Error::EmptyRegistry)?;
        tracing::info!(
            "Best tree found with {} leaves using {} algorithm",
            best.num_leaves(),
            best.algorithm
        );
        Ok(best)
    }

    /// Solve every graph independently; results keep input order.
    pub fn solve_all(&self, graphs: &[Graph]) -> Vec<Result<Solution>> {
        if self.config.parallel {
            graphs.par_iter().map(|graph| self.solve(graph)).collect()
        } else {
            graphs.iter().map(|graph| self.solve(graph)).collect()
        }
    }
}
