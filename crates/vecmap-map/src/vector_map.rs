//! The [`VectorMap`]: a rectangular grid of labelled cells turned into a
//! linked [`Graph`].

use std::fmt;
use std::str::FromStr;

use vecmap_core::{Graph, GraphError, Node, NodeId, Point};

use crate::error::BuildError;
use crate::grid::{dimensions, split_rows};
use crate::terrain::TerrainTable;

/// A graph with one node per grid cell, stored in row-major order.
///
/// Adjacent cells (left/right, up/down) are linked by a directed vector in
/// each direction the terrain table allows. A vector costs the magnitude of
/// the cell it enters.
#[derive(Debug, Clone)]
pub struct VectorMap {
    width: usize,
    height: usize,
    graph: Graph,
    table: TerrainTable,
}

impl VectorMap {
    /// Build a map from rows of cell labels.
    ///
    /// Every row must have the same length and every label must be in
    /// `table`.
    pub fn from_rows<R: AsRef<[char]>>(
        rows: &[R],
        table: &TerrainTable,
    ) -> Result<Self, BuildError> {
        let (width, height) = dimensions(rows)?;
        let mut graph = Graph::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            for (x, &label) in row.as_ref().iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                if table.get(label).is_none() {
                    return Err(BuildError::UnknownLabel { label, pos });
                }
                let id = graph.add_node(pos, label)?;

                // Only the left and upper neighbours exist yet.
                let i = y * width + x;
                let left = if x > 0 { graph.nth(i - 1) } else { None };
                let up = if y > 0 { graph.nth(i - width) } else { None };
                for other in [left, up].into_iter().flatten() {
                    link(&mut graph, table, id, other)?;
                    link(&mut graph, table, other, id)?;
                }
            }
        }

        log::debug!(
            "vector map: built {width}x{height} with {} vectors",
            graph.vector_count()
        );
        Ok(Self {
            width,
            height,
            graph,
            table: table.clone(),
        })
    }

    /// Build a map from newline-delimited text.
    pub fn parse(s: &str, table: &TerrainTable) -> Result<Self, BuildError> {
        Self::from_rows(&split_rows(s), table)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The underlying graph, read-only.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The terrain table the map was built with.
    #[inline]
    pub fn table(&self) -> &TerrainTable {
        &self.table
    }

    /// Handle of the node at column `x`, row `y`; `None` when out of bounds.
    pub fn find_node(&self, x: i32, y: i32) -> Option<NodeId> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.graph.nth(y * self.width + x)
    }

    /// The node at column `x`, row `y`.
    pub fn node_at(&self, x: i32, y: i32) -> Option<&Node> {
        self.find_node(x, y).and_then(|id| self.graph.node(id))
    }

    /// See [`TerrainTable::is_traversable`].
    pub fn is_traversable(&self, from: char, to: char) -> bool {
        self.table.is_traversable(from, to)
    }

    /// The label grid, row by row.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        let labels: Vec<char> = self.graph.iter().map(|(_, n)| n.label()).collect();
        labels.chunks(self.width).map(<[char]>::to_vec).collect()
    }
}

/// Attach `from -> to` when the terrain allows entering `to` from `from`.
fn link(
    graph: &mut Graph,
    table: &TerrainTable,
    from: NodeId,
    to: NodeId,
) -> Result<(), GraphError> {
    let from_label = graph.node(from).ok_or(GraphError::UnknownNode(from))?.label();
    let to_label = graph.node(to).ok_or(GraphError::UnknownNode(to))?.label();
    if !table.is_traversable(from_label, to_label) {
        return Ok(());
    }
    match table.get(to_label) {
        Some(terrain) => graph.add_directed_vector(from, to, terrain.magnitude),
        None => Ok(()),
    }
}

/// Parses with the default [`TerrainTable`].
impl FromStr for VectorMap {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &TerrainTable::default())
    }
}

/// The label grid, rows separated by `'\n'`.
impl fmt::Display for VectorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.to_rows().iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
