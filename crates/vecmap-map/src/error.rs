use std::fmt;

use vecmap_core::{GraphError, Point};

/// Errors that can occur while building a [`VectorMap`](crate::VectorMap).
///
/// A failed build never yields a partial map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The input has no rows, or its rows have no cells.
    EmptyGrid,
    /// A row's length differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell label is missing from the terrain table.
    UnknownLabel { label: char, pos: Point },
    /// The graph rejected a node or vector.
    Graph(GraphError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "vector map: cannot convert an empty grid"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "vector map: cannot convert rows with non-standard length \
                 (row {row} has {found} cells, expected {expected})"
            ),
            Self::UnknownLabel { label, pos } => write!(
                f,
                "vector map: unknown label \u{201c}{label}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::Graph(e) => write!(f, "vector map: {e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for BuildError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Errors raised when drawing a path over a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The vector at this index of the path is not an edge of the map.
    ForeignVector { index: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignVector { index } => write!(
                f,
                "render: vector {index} of the path does not belong to this map"
            ),
        }
    }
}

impl std::error::Error for RenderError {}
