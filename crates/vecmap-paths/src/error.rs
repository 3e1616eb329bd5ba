use std::fmt;

use vecmap_core::NodeId;

/// Usage errors reported by [`PathFinder::find_path`](crate::PathFinder::find_path).
///
/// These are raised before any search state exists. A search that simply
/// finds no route is not an error: it returns `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The origin handle does not belong to the searched graph.
    UnknownOrigin(NodeId),
    /// The destination handle does not belong to the searched graph.
    UnknownDestination(NodeId),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrigin(id) => write!(f, "search: origin node {id} is not in the graph"),
            Self::UnknownDestination(id) => {
                write!(f, "search: destination node {id} is not in the graph")
            }
        }
    }
}

impl std::error::Error for SearchError {}
