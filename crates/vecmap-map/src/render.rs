//! Read-only text overlay of a [`Path`] on a [`VectorMap`].

use vecmap_core::{Path, Point};

use crate::error::RenderError;
use crate::vector_map::VectorMap;

/// Marker drawn on the destination cell.
pub const DESTINATION: char = '*';

/// Draw `path` over the map's labels.
///
/// Each vector's origin cell shows an arrow towards the next cell and the
/// final cell shows [`DESTINATION`]. Every vector must be an edge of `map`.
pub fn render_path(map: &VectorMap, path: &Path) -> Result<String, RenderError> {
    let graph = map.graph();
    let mut rows = map.to_rows();
    let mut put = |p: Point, c: char| {
        if let Some(cell) = rows
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *cell = c;
        }
    };

    for (index, v) in path.vectors().iter().enumerate() {
        let foreign = RenderError::ForeignVector { index };
        let from = graph.node(v.origin()).ok_or(foreign)?;
        let to = graph.node(v.destination()).ok_or(foreign)?;
        if !from.vectors().contains(v) {
            return Err(foreign);
        }
        put(from.pos(), arrow(to.pos() - from.pos()));
    }
    if let Some(last) = path.destination().and_then(|id| graph.node(id)) {
        put(last.pos(), DESTINATION);
    }

    let lines: Vec<String> = rows.into_iter().map(String::from_iter).collect();
    Ok(lines.join("\n"))
}

fn arrow(d: Point) -> char {
    match (d.x.signum(), d.y.signum()) {
        (0, -1) => '↑',
        (1, 0) => '→',
        (0, 1) => '↓',
        (-1, 0) => '←',
        _ => '+',
    }
}
