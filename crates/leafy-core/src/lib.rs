//! Leafy Core: graph model, union-find, and maximum-leaf spanning tree heuristics

pub mod model;
pub mod graph;
pub mod disjoint_set;
pub mod analysis;
pub mod forest;
pub mod extend;
pub mod random;
pub mod solver;
pub mod config;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, Edge};
pub use graph::Graph;
pub use disjoint_set::DisjointSet;
pub use analysis::{Analysis, analyze};
pub use forest::leafy_forest;
pub use extend::{Tier, extend_forest};
pub use random::{RandomizedParams, randomized_tree};
pub use solver::{Algorithm, Solution, Solver};
pub use config::{SolverConfig, MAXIMUM_NUMBER_OF_NODES, MAXIMUM_NUMBER_OF_EDGES, DEFAULT_TRIALS};
pub use error::{Error, InvalidEdge, ConfigError, Result};
