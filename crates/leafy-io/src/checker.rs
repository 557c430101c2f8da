//! Output file checker: verifies each tree against its input graph

use std::collections::BTreeSet;

use leafy_core::{Edge, Graph, SolverConfig};

use crate::reader::{LineReader, ReaderError};

/// Check an output file's contents against the input edge sets.
///
/// Returns the leaf count of every tree, in input order.
pub fn read_output(
    source: &str,
    edge_sets: &[BTreeSet<Edge>],
    config: &SolverConfig,
) -> Result<Vec<usize>, ReaderError> {
    let mut reader = LineReader::new(source);
    let num_outputs = reader.read_number("Cannot parse the number of output graphs.")?;
    if num_outputs != edge_sets.len() {
        return Err(reader.error(format!(
            "The number of output graphs ({num_outputs}) should equal the number of input graphs ({}).",
            edge_sets.len()
        )));
    }

    let mut leaves = Vec::with_capacity(edge_sets.len());
    for (i, input) in edge_sets.iter().enumerate() {
        reader.case_num = i + 1;
        leaves.push(read_output_tree(&mut reader, input, config)?);
    }

    reader.expect_eof(edge_sets.len())?;
    Ok(leaves)
}

fn read_output_tree(
    reader: &mut LineReader<'_>,
    input: &BTreeSet<Edge>,
    config: &SolverConfig,
) -> Result<usize, ReaderError> {
    let num_edges = reader.read_number("Cannot parse the number of edges.")?;

    let graph_in = Graph::from_edges(input, config.max_nodes).map_err(|e| reader.error(e.to_string()))?;
    let summary_in = graph_in.analyze();
    let expected = summary_in.num_nodes.saturating_sub(1);
    if num_edges != expected {
        return Err(reader.error(format!(
            "Input graph has {} non-isolated nodes, output graph should have {expected} edges, got {num_edges} instead.",
            summary_in.num_nodes
        )));
    }

    let mut output = BTreeSet::new();
    for _ in 0..num_edges {
        let (u, v) = reader.read_pair("Cannot parse the next edge.")?;
        let edge = Edge::new(u, v, config.max_nodes)
            .ok()
            .filter(|edge| input.contains(edge))
            .ok_or_else(|| {
                reader.error(format!(
                    "Edge ({},{}) in the output graph is absent in the input graph.",
                    u.min(v),
                    u.max(v)
                ))
            })?;
        if !output.insert(edge) {
            return Err(reader.error(format!("Edge {edge} (or its reverse) is duplicated.")));
        }
    }

    let graph_out = Graph::from_edges(&output, config.max_nodes).map_err(|e| reader.error(e.to_string()))?;
    let summary_out = graph_out.analyze();
    if summary_out.num_nodes != summary_in.num_nodes {
        return Err(reader.error(format!(
            "After reading the last edge, the number of non-isolated nodes in the output graph ({}) should equal that of the input graph ({}) to be a spanning tree.",
            summary_out.num_nodes, summary_in.num_nodes
        )));
    }
    if !summary_out.is_connected() {
        return Err(reader.error(
            "Disconnected graph: after reading the last edge, the output graph should be connected to be a spanning tree.",
        ));
    }
    if summary_out.has_cycle {
        return Err(reader.error(
            "Cycle detected: after reading the last edge, the output graph should not have cycles to be a spanning tree.",
        ));
    }

    Ok(summary_out.num_leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_input;

    const INPUT: &str = "1\n4\n0 1\n0 2\n0 3\n1 2\n";

    fn inputs() -> Vec<BTreeSet<Edge>> {
        read_input(INPUT, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_accepts_star() {
        let leaves = read_output("1\n3\n0 1\n2 0\n0 3\n", &inputs(), &SolverConfig::default()).unwrap();
        assert_eq!(leaves, vec![3]);
    }

    #[test]
    fn test_wrong_graph_count() {
        let err = read_output("2\n", &inputs(), &SolverConfig::default()).unwrap_err();
        insta::assert_snapshot!(err, @"Error on line 1: Got '2'. The number of output graphs (2) should equal the number of input graphs (1).");
    }

    #[test]
    fn test_wrong_edge_count() {
        let err = read_output("1\n4\n", &inputs(), &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err.message,
            "Input graph has 4 non-isolated nodes, output graph should have 3 edges, got 4 instead."
        );
    }

    #[test]
    fn test_edge_not_in_input() {
        let err = read_output("1\n3\n0 1\n3 2\n0 2\n", &inputs(), &SolverConfig::default()).unwrap_err();
        assert_eq!(err.line_num, 4);
        assert_eq!(err.message, "Edge (2,3) in the output graph is absent in the input graph.");
    }

    #[test]
    fn test_cycle_and_missing_node() {
        // triangle 0-1-2 leaves node 3 uncovered
        let err = read_output("1\n3\n0 1\n1 2\n0 2\n", &inputs(), &SolverConfig::default()).unwrap_err();
        assert!(err.message.starts_with("After reading the last edge, the number of non-isolated nodes"));
    }

    #[test]
    fn test_duplicate_edge() {
        let err = read_output("1\n3\n0 1\n1 0\n0 3\n", &inputs(), &SolverConfig::default()).unwrap_err();
        assert_eq!(err.message, "Edge (0,1) (or its reverse) is duplicated.");
    }

    #[test]
    fn test_trailing_lines() {
        let err = read_output("1\n3\n0 1\n0 2\n0 3\nextra\n", &inputs(), &SolverConfig::default()).unwrap_err();
        assert_eq!(err.case_num, 2);
        assert_eq!(err.line, "extra");
    }
}
