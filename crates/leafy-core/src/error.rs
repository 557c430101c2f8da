//! Error types for the solving engine

use thiserror::Error;

/// Why an edge cannot exist in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEdge {
    #[error("Node {node} out of range [0--{max}] in edge ({u},{v}).", max = .bound.saturating_sub(1))]
    OutOfRange {
        node: usize,
        bound: usize,
        u: usize,
        v: usize,
    },
    #[error("Self-loop not allowed in edge ({node},{node}).")]
    SelfLoop { node: usize },
}

/// Failures raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidEdge(#[from] InvalidEdge),

    /// The engine was handed a graph it cannot turn into a spanning tree.
    /// This is an integration bug, never a user input error.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("algorithm registry is empty")]
    EmptyRegistry,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading a [`SolverConfig`](crate::SolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
