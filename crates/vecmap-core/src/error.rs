use std::fmt;

use crate::geom::Point;
use crate::graph::NodeId;

/// Errors raised while assembling a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node already occupies this coordinate.
    DuplicateNode(Point),
    /// The handle does not belong to this graph.
    UnknownNode(NodeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(p) => write!(f, "graph: a node already exists at {p}"),
            Self::UnknownNode(id) => write!(f, "graph: unknown node {id}"),
        }
    }
}

impl std::error::Error for GraphError {}
