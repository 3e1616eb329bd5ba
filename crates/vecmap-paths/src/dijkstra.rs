use vecmap_core::{Graph, NodeId, Path};

use crate::queue::MinPriorityQueue;
use crate::search::{History, Trail, endpoints};
use crate::{PathFinder, SearchError};

/// Dijkstra's shortest-path search.
///
/// Expands nodes in ascending order of cumulative magnitude from the
/// origin, so the returned path has the lowest total magnitude of any path
/// between the two nodes. Among equally cheap candidates the one queued
/// first is expanded first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn find_path(
        &self,
        graph: &Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        let target = endpoints(graph, origin, destination)?;

        let mut history = History::default();
        let mut trail = Trail::default();
        // Keyed by node: the item is the tip of its cheapest known path.
        let mut open: MinPriorityQueue<NodeId, Option<usize>, u64> = MinPriorityQueue::new();
        open.insert_with_priority(origin, None, 0);

        while let Some((node, tip, cost)) = open.pull_min() {
            let Some(current) = graph.node(node) else {
                continue;
            };
            if current == target {
                let path = trail.path(tip);
                log::debug!(
                    "dijkstra: reached {target} at cost {cost} in {} steps, {} nodes expanded",
                    path.len(),
                    history.len()
                );
                return Ok(Some(path));
            }
            if !history.insert(current) {
                continue;
            }
            log::trace!("dijkstra: expanding {current} at cost {cost}");

            for v in current.vectors() {
                let next_id = v.destination();
                let Some(next) = graph.node(next_id) else {
                    continue;
                };
                if history.contains(next) {
                    continue;
                }
                let tentative = cost + u64::from(v.magnitude());
                if open.priority_of(&next_id).is_some_and(|p| p <= tentative) {
                    continue;
                }
                let tip = trail.extend(tip, *v);
                open.insert_with_priority(next_id, Some(tip), tentative);
            }
        }

        log::debug!("dijkstra: no path to {target}, {} nodes expanded", history.len());
        Ok(None)
    }
}
