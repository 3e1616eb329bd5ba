use vecmap_core::{Graph, NodeId, Path};

use crate::SearchError;

/// A single-pair path search over a [`Graph`].
///
/// Implementors hold no per-search state: every call builds its own
/// history and frontier, so one finder can serve repeated or concurrent
/// searches over the same (unchanging) graph.
pub trait PathFinder {
    /// Search for a path from `origin` to `destination`.
    ///
    /// Returns `Ok(Some(path))` when a path exists (empty when
    /// `origin == destination`), `Ok(None)` when it does not, and an error
    /// if either handle is not part of `graph`.
    fn find_path(
        &self,
        graph: &Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Option<Path>, SearchError>;
}
