use std::fmt;
use std::str::FromStr;

use vecmap_core::{Graph, NodeId, Path};

use crate::{BreadthFirst, DepthFirst, Dijkstra, PathFinder, SearchError};

/// Runtime choice between the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::Dijkstra];

    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl PathFinder for Strategy {
    fn find_path(
        &self,
        graph: &Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        match self {
            Self::BreadthFirst => BreadthFirst.find_path(graph, origin, destination),
            Self::DepthFirst => DepthFirst.find_path(graph, origin, destination),
            Self::Dijkstra => Dijkstra.find_path(graph, origin, destination),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strategy name was not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected bfs, dfs or dijkstra)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
