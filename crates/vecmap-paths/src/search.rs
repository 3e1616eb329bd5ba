//! Run-scoped state shared by every search: visited history, the trail of
//! partial paths, and the unweighted frontier walk used by BFS and DFS.

use std::collections::{HashSet, VecDeque};

use vecmap_core::{Graph, Node, NodeId, Path, Point, Vector};

use crate::SearchError;

/// Check both handles and return the destination node.
pub(crate) fn endpoints<'g>(
    graph: &'g Graph,
    origin: NodeId,
    destination: NodeId,
) -> Result<&'g Node, SearchError> {
    if !graph.contains(origin) {
        return Err(SearchError::UnknownOrigin(origin));
    }
    graph
        .node(destination)
        .ok_or(SearchError::UnknownDestination(destination))
}

/// Nodes already expanded during one search, keyed by coordinate.
#[derive(Debug, Default)]
pub(crate) struct History {
    seen: HashSet<Point>,
}

impl History {
    pub(crate) fn contains(&self, node: &Node) -> bool {
        self.seen.contains(&node.pos())
    }

    /// Mark `node` visited. Returns `false` if it already was.
    pub(crate) fn insert(&mut self, node: &Node) -> bool {
        self.seen.insert(node.pos())
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

#[derive(Debug)]
struct Step {
    vector: Vector,
    parent: Option<usize>,
}

/// Every partial path handed to the frontier, stored as a parent-linked
/// tree. A frontier entry only carries the index of its last step.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    steps: Vec<Step>,
}

impl Trail {
    /// Record the partial path `tip + vector` and return its tip.
    pub(crate) fn extend(&mut self, tip: Option<usize>, vector: Vector) -> usize {
        self.steps.push(Step {
            vector,
            parent: tip,
        });
        self.steps.len() - 1
    }

    /// Materialize the partial path ending at `tip`.
    pub(crate) fn path(&self, mut tip: Option<usize>) -> Path {
        let mut vectors = Vec::new();
        while let Some(i) = tip {
            let step = &self.steps[i];
            vectors.push(step.vector);
            tip = step.parent;
        }
        vectors.reverse();
        Path::from(vectors)
    }
}

/// A node waiting to be expanded, with the partial path that reached it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) node: NodeId,
    pub(crate) tip: Option<usize>,
}

/// Pop order of an unweighted walk.
pub(crate) trait Frontier: Default {
    fn put(&mut self, c: Candidate);
    fn take(&mut self) -> Option<Candidate>;
}

/// First in, first out: breadth-first.
impl Frontier for VecDeque<Candidate> {
    fn put(&mut self, c: Candidate) {
        self.push_back(c);
    }

    fn take(&mut self) -> Option<Candidate> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first.
impl Frontier for Vec<Candidate> {
    fn put(&mut self, c: Candidate) {
        self.push(c);
    }

    fn take(&mut self) -> Option<Candidate> {
        self.pop()
    }
}

/// Expand candidates in the frontier's order until `destination` is popped
/// or the frontier runs dry. Magnitudes are ignored.
pub(crate) fn walk<F: Frontier>(
    name: &str,
    graph: &Graph,
    origin: NodeId,
    destination: NodeId,
) -> Result<Option<Path>, SearchError> {
    let target = endpoints(graph, origin, destination)?;

    let mut history = History::default();
    let mut trail = Trail::default();
    let mut frontier = F::default();
    frontier.put(Candidate {
        node: origin,
        tip: None,
    });

    while let Some(Candidate { node, tip }) = frontier.take() {
        let Some(current) = graph.node(node) else {
            continue;
        };
        if current == target {
            let path = trail.path(tip);
            log::debug!(
                "{name}: reached {target} in {} steps, {} nodes expanded",
                path.len(),
                history.len()
            );
            return Ok(Some(path));
        }
        if !history.insert(current) {
            continue;
        }
        log::trace!("{name}: expanding {current}");

        for v in current.vectors() {
            let Some(next) = graph.node(v.destination()) else {
                continue;
            };
            if history.contains(next) {
                continue;
            }
            let tip = trail.extend(tip, *v);
            frontier.put(Candidate {
                node: v.destination(),
                tip: Some(tip),
            });
        }
    }

    log::debug!("{name}: no path to {target}, {} nodes expanded", history.len());
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_rebuilds_branches_independently() {
        let mut g = Graph::new();
        let a = g.add_node(Point::new(0, 0), '.').unwrap();
        let b = g.add_node(Point::new(1, 0), '.').unwrap();
        let c = g.add_node(Point::new(0, 1), '.').unwrap();
        g.add_directed_vector(a, b, 1).unwrap();
        g.add_directed_vector(a, c, 1).unwrap();
        g.add_directed_vector(b, c, 1).unwrap();
        let ab = g.node(a).unwrap().vectors()[0];
        let ac = g.node(a).unwrap().vectors()[1];
        let bc = g.node(b).unwrap().vectors()[0];

        let mut trail = Trail::default();
        let t_ab = trail.extend(None, ab);
        let t_ac = trail.extend(None, ac);
        let t_abc = trail.extend(Some(t_ab), bc);

        assert_eq!(trail.path(None), Path::new());
        assert_eq!(trail.path(Some(t_ac)).vectors(), &[ac]);
        assert_eq!(trail.path(Some(t_abc)).vectors(), &[ab, bc]);
    }

    #[test]
    fn history_keys_on_coordinates() {
        let mut g1 = Graph::new();
        let a = g1.add_node(Point::new(2, 2), '.').unwrap();
        let mut g2 = Graph::new();
        let a2 = g2.add_node(Point::new(2, 2), '.').unwrap();

        let mut h = History::default();
        assert!(h.insert(g1.node(a).unwrap()));
        assert!(h.contains(g2.node(a2).unwrap()));
        assert!(!h.insert(g2.node(a2).unwrap()));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn endpoints_checks_origin_first() {
        let mut g = Graph::new();
        let a = g.add_node(Point::new(0, 0), '.').unwrap();
        let mut big = Graph::new();
        big.add_node(Point::new(0, 0), '.').unwrap();
        let ghost = big.add_node(Point::new(1, 0), '.').unwrap();

        assert_eq!(
            endpoints(&g, ghost, ghost).unwrap_err(),
            SearchError::UnknownOrigin(ghost)
        );
        assert_eq!(
            endpoints(&g, a, ghost).unwrap_err(),
            SearchError::UnknownDestination(ghost)
        );
        assert_eq!(endpoints(&g, a, a).unwrap().pos(), Point::new(0, 0));
    }
}
