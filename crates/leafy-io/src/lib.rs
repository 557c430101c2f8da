//! Instance files for Leafy: reading, checking, writing and generating

pub mod reader;
pub mod checker;
pub mod writer;
pub mod generator;

pub use reader::{ReaderError, read_input, to_graphs};
pub use checker::read_output;
pub use writer::{format_trees, write_trees, write_trees_to_file};
pub use generator::{Branching, Instance, leafy_instance, leafy_tree, sample_graph};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use leafy_core::{Edge, SolverConfig};
use thiserror::Error;

/// A reader failure tied to the file it came from.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Error reading '{}' ({source})", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("({}) {source}", .path.display())]
    Format {
        path: PathBuf,
        source: ReaderError,
    },
}

/// Read and validate an input file.
pub fn read_input_file(path: &Path, config: &SolverConfig) -> Result<Vec<BTreeSet<Edge>>, FileError> {
    let source = std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_input(&source, config).map_err(|source| FileError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Check an output file against already validated input edge sets.
pub fn read_output_file(
    path: &Path,
    edge_sets: &[BTreeSet<Edge>],
    config: &SolverConfig,
) -> Result<Vec<usize>, FileError> {
    let source = std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_output(&source, edge_sets, config).map_err(|source| FileError::Format {
        path: path.to_path_buf(),
        source,
    })
}
