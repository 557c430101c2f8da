//! CLI command implementations

use anyhow::Context;
use leafy_core::{Graph, Solver, SolverConfig};
use leafy_io::Branching;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::Path;

/// Per-graph line of the `--json` summary.
#[derive(Debug, Serialize)]
struct Summary {
    graph: usize,
    algorithm: &'static str,
    leaves: usize,
    nodes: usize,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<SolverConfig> {
    match path {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SolverConfig::default()),
    }
}

pub fn solve(input: &Path, output: Option<&Path>, config: SolverConfig, json: bool) -> anyhow::Result<()> {
    tracing::info!("Solving graphs in {}", input.display());

    let edge_sets = leafy_io::read_input_file(input, &config)?;
    let graphs = leafy_io::to_graphs(&edge_sets, &config)?;
    tracing::info!("Read {} graphs", graphs.len());

    let solver = Solver::new(config);
    let mut trees: Vec<Graph> = Vec::with_capacity(graphs.len());
    let mut summaries = Vec::with_capacity(graphs.len());
    for (i, result) in solver.solve_all(&graphs).into_iter().enumerate() {
        let solution = result.with_context(|| format!("solving graph #{}", i + 1))?;
        tracing::info!(
            "Graph #{}: {} leaves using {} algorithm",
            i + 1,
            solution.num_leaves(),
            solution.algorithm
        );
        summaries.push(Summary {
            graph: i + 1,
            algorithm: solution.algorithm.name(),
            leaves: solution.num_leaves(),
            nodes: solution.analysis.num_nodes,
        });
        trees.push(solution.tree);
    }

    match output {
        Some(path) => {
            leafy_io::write_trees_to_file(path, &trees)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote {} trees to {}", trees.len(), path.display());
        }
        None => print!("{}", leafy_io::format_trees(&trees)),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }
    Ok(())
}

pub fn check_input(input: &Path, config: &SolverConfig) -> anyhow::Result<()> {
    let edge_sets = leafy_io::read_input_file(input, config)?;
    println!("Input file '{}' has the correct format.", input.display());
    tracing::debug!("{} graphs validated", edge_sets.len());
    Ok(())
}

pub fn check_output(input: &Path, output: &Path, config: &SolverConfig) -> anyhow::Result<()> {
    let edge_sets = leafy_io::read_input_file(input, config)?;
    println!("Input file '{}' has the correct format.", input.display());

    let leaves = leafy_io::read_output_file(output, &edge_sets, config)?;
    println!("Output file '{}' has the correct format.", output.display());
    for (i, count) in leaves.iter().enumerate() {
        println!("Output tree {} has {} leaves.", i + 1, count);
    }
    Ok(())
}

pub fn generate(
    nodes: usize,
    extra_edges: usize,
    count: usize,
    branch_factor: usize,
    seed: u64,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let max_nodes = nodes.max(leafy_core::MAXIMUM_NUMBER_OF_NODES);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut graphs = Vec::with_capacity(count);
    for i in 0..count {
        let instance = leafy_io::leafy_instance(
            nodes,
            extra_edges,
            Branching::Constant(branch_factor),
            max_nodes,
            &mut rng,
        )?;
        tracing::info!(
            "Graph #{}: {} edges, planted tree has {} leaves",
            i + 1,
            instance.graph.edge_count(),
            instance.planted.leaves().len()
        );
        graphs.push(instance.graph);
    }

    // instances share the output format: count, then edge lists
    match output {
        Some(path) => leafy_io::write_trees_to_file(path, &graphs)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", leafy_io::format_trees(&graphs)),
    }
    Ok(())
}
