//! Grid-to-graph construction for *vecmap*.
//!
//! A [`VectorMap`] turns a rectangle of single-character cell labels into a
//! [`Graph`](vecmap_core::Graph) whose vectors follow a swappable
//! [`TerrainTable`]. Maps can be read from newline-delimited text (also via
//! [`FromStr`](std::str::FromStr) with the default table) or from
//! pre-split rows; both go through the same validation.
//!
//! [`render_path`] draws a search result back over the map's labels.

mod error;
pub mod grid;
mod render;
pub mod terrain;
mod vector_map;

pub use error::{BuildError, RenderError};
pub use render::{DESTINATION, render_path};
pub use terrain::{Terrain, TerrainTable};
pub use vector_map::VectorMap;
