//! Integration tests for Leafy
//!
//! These tests verify that multiple systems work together correctly.

use leafy_core::{Algorithm, Error, Solver, SolverConfig};
use leafy_io::Branching;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

const SAMPLE_INPUT: &str = "\
3
4
0 1
0 2
0 3
0 4
4
0 1
1 2
2 3
3 4
6
0 1
0 2
0 3
1 2
1 3
2 3
";

fn config() -> SolverConfig {
    SolverConfig {
        trials: 30,
        seed: 5,
        ..SolverConfig::default()
    }
}

/// Read, solve, write and check a small input file end to end.
#[test]
fn test_solve_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("graphs.in");
    let output = dir.path().join("trees.out");
    std::fs::write(&input, SAMPLE_INPUT).unwrap();

    let config = config();
    let edge_sets = leafy_io::read_input_file(&input, &config).unwrap();
    let graphs = leafy_io::to_graphs(&edge_sets, &config).unwrap();

    let solver = Solver::new(config.clone());
    let solutions: Vec<_> = solver
        .solve_all(&graphs)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    let leaves: Vec<usize> = solutions.iter().map(|s| s.num_leaves()).collect();
    // star, path, complete graph on four nodes
    assert_eq!(leaves, vec![4, 2, 3]);

    let trees: Vec<_> = solutions.into_iter().map(|s| s.tree).collect();
    leafy_io::write_trees_to_file(&output, &trees).unwrap();

    let checked = leafy_io::read_output_file(&output, &edge_sets, &config).unwrap();
    assert_eq!(checked, leaves);
}

/// A disconnected graph never reaches the solver through the reader, and
/// the solver refuses it when handed one directly.
#[test]
fn test_disconnected_input() {
    let source = "1\n6\n0 1\n1 2\n0 2\n3 4\n4 5\n3 5\n";
    let err = leafy_io::read_input(source, &config()).unwrap_err();
    assert!(err.message.starts_with("Disconnected graph"));

    let mut graph = leafy_core::Graph::new(10);
    for (u, v) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
        graph.add_edge(leafy_core::Edge::new(u, v, 10).unwrap()).unwrap();
    }
    let result = Solver::new(config()).solve(&graph);
    assert!(matches!(result, Err(Error::PreconditionViolation(_))));
}

/// Generated instances are valid input and their solutions pass the checker.
#[test]
fn test_generated_instances() {
    let mut rng = StdRng::seed_from_u64(17);
    let config = config();
    let graphs: Vec<_> = (0..3)
        .map(|_| {
            leafy_io::leafy_instance(40, 120, Branching::default(), config.max_nodes, &mut rng)
                .unwrap()
                .graph
        })
        .collect();

    let text = leafy_io::format_trees(&graphs);
    let edge_sets = leafy_io::read_input(&text, &config).unwrap();
    assert_eq!(edge_sets.len(), 3);

    let solver = Solver::new(config.clone());
    let trees: Vec<_> = solver
        .solve_all(&graphs)
        .into_iter()
        .map(|r| r.unwrap().tree)
        .collect();
    let checked = leafy_io::read_output(&leafy_io::format_trees(&trees), &edge_sets, &config).unwrap();
    assert!(checked.iter().all(|&leaves| leaves >= 2));
}

/// The winner is never worse than any single registered algorithm.
#[test]
fn test_solver_dominates_registry() {
    let mut rng = StdRng::seed_from_u64(23);
    let config = config();
    let instance = leafy_io::leafy_instance(60, 300, Branching::default(), config.max_nodes, &mut rng).unwrap();

    let best = Solver::new(config.clone()).solve(&instance.graph).unwrap();
    for algorithm in Algorithm::ALL {
        let tree = algorithm.solve(&instance.graph, &config).unwrap();
        assert!(best.num_leaves() >= tree.leaves().len());
    }
}
