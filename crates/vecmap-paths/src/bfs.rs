use std::collections::VecDeque;

use vecmap_core::{Graph, NodeId, Path};

use crate::search::{Candidate, walk};
use crate::{PathFinder, SearchError};

/// Breadth-first search.
///
/// Expands nodes from shallowest to deepest using a FIFO queue, so the
/// returned path has the fewest vectors of any path between the two nodes.
/// Magnitudes are not consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

impl PathFinder for BreadthFirst {
    fn find_path(
        &self,
        graph: &Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        walk::<VecDeque<Candidate>>("bfs", graph, origin, destination)
    }
}
