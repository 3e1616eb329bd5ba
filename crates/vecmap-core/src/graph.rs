//! The directed, weighted graph model.
//!
//! A [`Graph`] owns every [`Node`] in a flat arena. Edges ([`Vector`]s) refer
//! to their endpoints through [`NodeId`] handles, so several vectors can point
//! at the same node without copying it.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::GraphError;
use crate::geom::Point;

/// Non-negative traversal cost of a [`Vector`].
pub type Magnitude = u32;

static GRAPH_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

fn next_graph_id() -> u32 {
    GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a [`Node`] inside the [`Graph`] that created it.
///
/// A handle carries its graph's id, so another graph rejects it even where
/// the index is in range. Clones of a graph share the id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    graph: u32,
    index: usize,
}

impl NodeId {
    /// Position of the node in its graph's insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A directed edge from `origin` to `destination`. Immutable once created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    origin: NodeId,
    destination: NodeId,
    magnitude: Magnitude,
}

impl Vector {
    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    #[inline]
    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }
}

/// A graph vertex tied to a grid coordinate and a display label.
///
/// Equality only looks at the coordinate and the label; outgoing vectors are
/// deliberately left out so comparisons never walk the graph.
#[derive(Clone, Debug)]
pub struct Node {
    pos: Point,
    label: char,
    vectors: Vec<Vector>,
}

impl Node {
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn label(&self) -> char {
        self.label
    }

    /// Outgoing vectors, in the order they were attached.
    #[inline]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.label == other.label
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.pos, self.label)
    }
}

/// Arena of nodes with at most one node per coordinate.
#[derive(Clone, Debug)]
pub struct Graph {
    id: u32,
    nodes: Vec<Node>,
    index: HashMap<Point, NodeId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            id: next_graph_id(),
            nodes: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    #[inline]
    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }

    /// Arena slot of `id`, if the handle was issued by this graph.
    #[inline]
    fn slot(&self, id: NodeId) -> Option<usize> {
        (id.graph == self.id && id.index < self.nodes.len()).then_some(id.index)
    }

    /// Add a node without any vectors.
    ///
    /// Fails if a node already occupies `pos`.
    pub fn add_node(&mut self, pos: Point, label: char) -> Result<NodeId, GraphError> {
        if self.index.contains_key(&pos) {
            return Err(GraphError::DuplicateNode(pos));
        }
        let id = self.handle(self.nodes.len());
        self.nodes.push(Node {
            pos,
            label,
            vectors: Vec::new(),
        });
        self.index.insert(pos, id);
        Ok(id)
    }

    /// Append a vector `from -> to` to `from`'s outgoing list.
    pub fn add_directed_vector(
        &mut self,
        from: NodeId,
        to: NodeId,
        magnitude: Magnitude,
    ) -> Result<(), GraphError> {
        let Some(slot) = self.slot(from) else {
            return Err(GraphError::UnknownNode(from));
        };
        if !self.contains(to) {
            return Err(GraphError::UnknownNode(to));
        }
        let node = &mut self.nodes[slot];
        node.vectors.push(Vector {
            origin: from,
            destination: to,
            magnitude,
        });
        Ok(())
    }

    /// Connect `a` and `b` both ways with the same magnitude.
    pub fn add_bidirectional_vector(
        &mut self,
        a: NodeId,
        b: NodeId,
        magnitude: Magnitude,
    ) -> Result<(), GraphError> {
        // Validate both ends first so a failure leaves the graph untouched.
        if !self.contains(a) {
            return Err(GraphError::UnknownNode(a));
        }
        if !self.contains(b) {
            return Err(GraphError::UnknownNode(b));
        }
        self.add_directed_vector(a, b, magnitude)?;
        self.add_directed_vector(b, a, magnitude)
    }

    /// The node behind `id`; `None` for handles issued by another graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slot(id).map(|i| &self.nodes[i])
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Handle of the `index`-th node added, if there is one.
    #[inline]
    pub fn nth(&self, index: usize) -> Option<NodeId> {
        (index < self.nodes.len()).then(|| self.handle(index))
    }

    /// Look a node up by coordinate.
    pub fn find(&self, pos: Point) -> Option<NodeId> {
        self.index.get(&pos).copied()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed vectors.
    pub fn vector_count(&self) -> usize {
        self.nodes.iter().map(|n| n.vectors.len()).sum()
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (self.handle(i), n))
    }

    /// Human-readable form of a vector, e.g. `(0, 0) '.' -[1]-> (1, 0) '.'`.
    ///
    /// Endpoints not in this graph are printed as their raw id.
    pub fn describe(&self, v: &Vector) -> String {
        let end = |id: NodeId| match self.node(id) {
            Some(n) => n.to_string(),
            None => id.to_string(),
        };
        format!("{} -[{}]-> {}", end(v.origin), v.magnitude, end(v.destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Graph, NodeId, NodeId) {
        let mut g = Graph::new();
        let a = g.add_node(Point::new(3, 5), '.').unwrap();
        let b = g.add_node(Point::new(1, 2), 'x').unwrap();
        (g, a, b)
    }

    #[test]
    fn new_node_has_no_vectors() {
        let (g, a, _) = pair();
        let n = g.node(a).unwrap();
        assert_eq!(n.pos(), Point::new(3, 5));
        assert_eq!(n.label(), '.');
        assert!(n.vectors().is_empty());
    }

    #[test]
    fn directed_vector() {
        let (mut g, a, b) = pair();
        g.add_directed_vector(a, b, 3).unwrap();

        let vs = g.node(a).unwrap().vectors();
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].origin(), a);
        assert_eq!(vs[0].destination(), b);
        assert_eq!(vs[0].magnitude(), 3);
        assert!(g.node(b).unwrap().vectors().is_empty());
    }

    #[test]
    fn bidirectional_vector() {
        let (mut g, a, b) = pair();
        g.add_bidirectional_vector(a, b, 3).unwrap();

        let va = g.node(a).unwrap().vectors();
        let vb = g.node(b).unwrap().vectors();
        assert_eq!(va.len(), 1);
        assert_eq!(vb.len(), 1);
        assert_eq!(va[0].destination(), b);
        assert_eq!(vb[0].destination(), a);
        assert_eq!(va[0].magnitude(), vb[0].magnitude());
        assert_eq!(g.vector_count(), 2);
    }

    #[test]
    fn vectors_keep_insertion_order() {
        let mut g = Graph::new();
        let a = g.add_node(Point::new(0, 0), '.').unwrap();
        let b = g.add_node(Point::new(1, 0), '.').unwrap();
        let c = g.add_node(Point::new(0, 1), '.').unwrap();
        g.add_directed_vector(a, c, 1).unwrap();
        g.add_directed_vector(a, b, 2).unwrap();

        let dests: Vec<_> = g.node(a).unwrap().vectors().iter().map(|v| v.destination()).collect();
        assert_eq!(dests, vec![c, b]);
    }

    #[test]
    fn duplicate_coordinate_rejected() {
        let (mut g, _, _) = pair();
        let err = g.add_node(Point::new(3, 5), '#').unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode(Point::new(3, 5)));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn unknown_node_rejected_without_side_effects() {
        let (mut g, a, _) = pair();
        let ghost = NodeId { graph: g.id, index: 99 };
        assert_eq!(
            g.add_bidirectional_vector(a, ghost, 1),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(g.add_directed_vector(ghost, a, 1), Err(GraphError::UnknownNode(ghost)));
        assert_eq!(g.vector_count(), 0);
    }

    #[test]
    fn handles_are_tied_to_their_graph() {
        let (mut g, a, b) = pair();
        let (other, x, y) = pair();
        assert_eq!(x.index(), a.index());
        assert!(other.contains(x));
        assert!(!g.contains(x));
        assert!(g.node(y).is_none());
        assert_eq!(g.add_directed_vector(x, b, 1), Err(GraphError::UnknownNode(x)));
        assert_eq!(g.add_directed_vector(a, y, 1), Err(GraphError::UnknownNode(y)));
        assert_eq!(g.vector_count(), 0);

        let copy = g.clone();
        assert_eq!(copy.node(a), g.node(a));
    }

    #[test]
    fn node_equality_ignores_vectors() {
        let mut g1 = Graph::new();
        let a1 = g1.add_node(Point::new(0, 0), '.').unwrap();
        let b1 = g1.add_node(Point::new(1, 0), '.').unwrap();
        g1.add_bidirectional_vector(a1, b1, 1).unwrap();

        let mut g2 = Graph::new();
        let a2 = g2.add_node(Point::new(0, 0), '.').unwrap();

        assert_eq!(g1.node(a1), g2.node(a2));
        assert_ne!(g1.node(a1), g1.node(b1));
    }

    #[test]
    fn find_and_describe() {
        let (mut g, a, b) = pair();
        g.add_directed_vector(a, b, 4).unwrap();
        assert_eq!(g.find(Point::new(1, 2)), Some(b));
        assert_eq!(g.find(Point::new(9, 9)), None);
        assert_eq!(g.nth(1), Some(b));
        assert_eq!(g.nth(2), None);

        let v = g.node(a).unwrap().vectors()[0];
        assert_eq!(g.describe(&v), "(3, 5) '.' -[4]-> (1, 2) 'x'");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn vector_round_trip() {
        let mut g = Graph::new();
        let a = g.add_node(Point::new(0, 0), '.').unwrap();
        let b = g.add_node(Point::new(0, 1), 'H').unwrap();
        g.add_directed_vector(a, b, 2).unwrap();
        let v = g.node(a).unwrap().vectors()[0];

        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
