use vecmap_core::{Graph, NodeId, Path};

use crate::search::{Candidate, walk};
use crate::{PathFinder, SearchError};

/// Depth-first search.
///
/// Expands nodes from deepest to shallowest using a LIFO stack. The first
/// path found is returned; it depends on the order vectors were attached to
/// each node and is neither the shortest nor the cheapest in general.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst;

impl PathFinder for DepthFirst {
    fn find_path(
        &self,
        graph: &Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        walk::<Vec<Candidate>>("dfs", graph, origin, destination)
    }
}
