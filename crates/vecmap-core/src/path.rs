use crate::graph::{NodeId, Vector};

/// An ordered run of [`Vector`]s produced by a search.
///
/// An empty path means the search started on its destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    vectors: Vec<Vector>,
}

impl Path {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    /// Number of vectors (edges) in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Origin of the first vector, or `None` for an empty path.
    pub fn origin(&self) -> Option<NodeId> {
        self.vectors.first().map(Vector::origin)
    }

    /// Destination of the last vector, or `None` for an empty path.
    pub fn destination(&self) -> Option<NodeId> {
        self.vectors.last().map(Vector::destination)
    }

    /// Sum of all magnitudes.
    pub fn total_magnitude(&self) -> u64 {
        self.vectors.iter().map(|v| u64::from(v.magnitude())).sum()
    }

    /// Whether each vector starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.vectors
            .windows(2)
            .all(|w| w[0].destination() == w[1].origin())
    }

    /// Every node visited along the path, starting with the origin.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.origin()
            .into_iter()
            .chain(self.vectors.iter().map(Vector::destination))
    }
}

impl From<Vec<Vector>> for Path {
    fn from(vectors: Vec<Vector>) -> Self {
        Self { vectors }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}
