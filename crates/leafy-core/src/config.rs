//! Solver configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::random::RandomizedParams;

/// Largest node id bound accepted by default.
pub const MAXIMUM_NUMBER_OF_NODES: usize = 100;

/// Largest edge count per graph accepted by default.
pub const MAXIMUM_NUMBER_OF_EDGES: usize = 2000;

/// Default number of randomized trials per graph.
pub const DEFAULT_TRIALS: usize = 200;

/// Configuration handed to the [`Solver`](crate::Solver) at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Node ids must lie in `[0, max_nodes)`.
    pub max_nodes: usize,
    /// Upper bound on edges per input graph.
    pub max_edges: usize,
    /// Trials run by the randomized heuristic.
    pub trials: usize,
    /// Base seed for the randomized heuristic.
    pub seed: u64,
    /// Fan graphs and trials out over the rayon pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: MAXIMUM_NUMBER_OF_NODES,
            max_edges: MAXIMUM_NUMBER_OF_EDGES,
            trials: DEFAULT_TRIALS,
            seed: 0,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded solver config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nodes < 2 {
            return Err(ConfigError::Invalid(format!(
                "max_nodes must be at least 2, got {}",
                self.max_nodes
            )));
        }
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn randomized(&self) -> RandomizedParams {
        RandomizedParams {
            trials: self.trials,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}
