//! Input file reader with line-numbered diagnostics
//!
//! Format: one line with the number of graphs, then for every graph a line
//! with its edge count followed by one `u v` line per edge.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use leafy_core::{Edge, Graph, SolverConfig};
use regex::Regex;
use thiserror::Error;

static ONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)$").unwrap());
static TWO_NUMBERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+) (\d+)$").unwrap());

const ONE_EXPECTED: &str =
    "Expecting one natural number on a line with no leading or trailing spaces.";
const TWO_EXPECTED: &str = "Expecting two natural numbers separated by a single space on a line with no leading or trailing spaces.";

/// A format violation, located by line and graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line_num}{}: Got '{line}'. {message}", case_info(.case_num))]
pub struct ReaderError {
    pub line_num: usize,
    /// 1-based graph number, 0 while reading the header.
    pub case_num: usize,
    pub line: String,
    pub message: String,
}

fn case_info(case_num: &usize) -> String {
    if *case_num == 0 {
        String::new()
    } else {
        format!(" (Graph #{case_num})")
    }
}

/// Line cursor shared by the input reader and the output checker.
pub(crate) struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line_num: usize,
    pub(crate) case_num: usize,
    line: Option<&'a str>,
}

impl<'a> LineReader<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        LineReader {
            lines: source.lines(),
            line_num: 0,
            case_num: 0,
            line: None,
        }
    }

    fn readline(&mut self) -> Option<&'a str> {
        self.line_num += 1;
        self.line = self.lines.next();
        self.line
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ReaderError {
        ReaderError {
            line_num: self.line_num,
            case_num: self.case_num,
            line: self.line.unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    fn error_with_expected(&self, message: &str, expected: &str) -> ReaderError {
        self.error(format!("{message} {expected}"))
    }

    pub(crate) fn read_number(&mut self, message: &str) -> Result<usize, ReaderError> {
        let line = self.readline().unwrap_or_default();
        let captures = ONE_NUMBER
            .captures(line)
            .ok_or_else(|| self.error_with_expected(message, ONE_EXPECTED))?;
        self.parse(&captures[1], message, ONE_EXPECTED)
    }

    pub(crate) fn read_pair(&mut self, message: &str) -> Result<(usize, usize), ReaderError> {
        let line = self.readline().unwrap_or_default();
        let captures = TWO_NUMBERS
            .captures(line)
            .ok_or_else(|| self.error_with_expected(message, TWO_EXPECTED))?;
        let u = self.parse(&captures[1], message, TWO_EXPECTED)?;
        let v = self.parse(&captures[2], message, TWO_EXPECTED)?;
        Ok((u, v))
    }

    fn parse(&self, digits: &str, message: &str, expected: &str) -> Result<usize, ReaderError> {
        digits
            .parse()
            .map_err(|e| self.error_with_expected(&format!("{message} ({e})"), expected))
    }

    /// Fail unless the cursor sits at the end of the file.
    pub(crate) fn expect_eof(&mut self, num_cases: usize) -> Result<(), ReaderError> {
        self.case_num += 1;
        if self.readline().is_some() {
            return Err(self.error_with_expected(
                &format!(
                    "Extra lines after Graph #{num_cases} (line 1 says the number of graphs is {num_cases})."
                ),
                "Expecting EOF.",
            ));
        }
        Ok(())
    }
}

/// Parse and validate an input file's contents.
///
/// Every returned edge set is duplicate-free, within the node bound, free of
/// self-loops and connected.
pub fn read_input(source: &str, config: &SolverConfig) -> Result<Vec<BTreeSet<Edge>>, ReaderError> {
    let mut reader = LineReader::new(source);
    let num_cases = reader.read_number("Cannot parse the number of input graphs.")?;

    let mut edge_sets = Vec::with_capacity(num_cases.min(1024));
    for case in 1..=num_cases {
        reader.case_num = case;
        let edges = read_input_graph(&mut reader, config)?;

        let graph = Graph::from_edges(&edges, config.max_nodes).map_err(|e| reader.error(e.to_string()))?;
        if !graph.analyze().is_connected() {
            return Err(reader.error(
                "Disconnected graph: after reading the last edge of this graph, the edges are not in the same component.",
            ));
        }
        tracing::debug!(case, edges = edges.len(), "read input graph");
        edge_sets.push(edges);
    }

    reader.expect_eof(num_cases)?;
    Ok(edge_sets)
}

fn read_input_graph(reader: &mut LineReader<'_>, config: &SolverConfig) -> Result<BTreeSet<Edge>, ReaderError> {
    let num_edges = reader.read_number("Cannot parse the number of edges.")?;
    if num_edges > config.max_edges {
        return Err(reader.error(format!("Number of edges cannot exceed {}.", config.max_edges)));
    }

    let mut edges = BTreeSet::new();
    for _ in 0..num_edges {
        let (u, v) = reader.read_pair("Cannot parse the next edge.")?;
        let edge = Edge::new(u, v, config.max_nodes).map_err(|e| reader.error(e.to_string()))?;
        if !edges.insert(edge) {
            return Err(reader.error(format!("Edge {edge} (or its reverse) is duplicated.")));
        }
    }
    Ok(edges)
}

/// Build the graphs described by validated edge sets.
pub fn to_graphs(edge_sets: &[BTreeSet<Edge>], config: &SolverConfig) -> leafy_core::Result<Vec<Graph>> {
    edge_sets
        .iter()
        .map(|edges| Graph::from_edges(edges, config.max_nodes))
        .collect()
}
