//! Node and edge identities

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidEdge;

/// Identifier of a node, an index in `[0, max_nodes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// An undirected edge, stored with its smaller endpoint first so that
/// `{u, v}` and `{v, u}` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: NodeId,
    v: NodeId,
}

impl Edge {
    /// Build a canonical edge, checking both endpoints against `bound`.
    pub fn new(a: usize, b: usize, bound: usize) -> Result<Self, InvalidEdge> {
        let (u, v) = (a.min(b), a.max(b));
        for node in [u, v] {
            if node >= bound {
                return Err(InvalidEdge::OutOfRange { node, bound, u, v });
            }
        }
        if u == v {
            return Err(InvalidEdge::SelfLoop { node: u });
        }
        Ok(Edge {
            u: NodeId(u),
            v: NodeId(v),
        })
    }

    /// Caller guarantees `u < v`; bounds are checked when the edge is added.
    pub(crate) fn from_ordered(u: NodeId, v: NodeId) -> Self {
        debug_assert!(u < v);
        Edge { u, v }
    }

    /// Endpoints, smaller first.
    pub fn ends(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }

    pub fn u(&self) -> NodeId {
        self.u
    }

    pub fn v(&self) -> NodeId {
        self.v
    }

    /// Check the edge still fits a (possibly smaller) node bound.
    pub fn check(&self, bound: usize) -> Result<(), InvalidEdge> {
        if self.v.0 >= bound {
            return Err(InvalidEdge::OutOfRange {
                node: self.v.0,
                bound,
                u: self.u.0,
                v: self.v.0,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.u, self.v)
    }
}
