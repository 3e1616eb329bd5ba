//! **vecmap-core**: the graph model shared by the *vecmap* crates.
//!
//! This crate provides grid coordinates ([`Point`]), an arena-backed directed
//! weighted [`Graph`] of [`Node`]s linked by [`Vector`]s, and the [`Path`]
//! type returned by searches.

pub mod error;
pub mod geom;
pub mod graph;
pub mod path;

pub use error::GraphError;
pub use geom::Point;
pub use graph::{Graph, Magnitude, Node, NodeId, Vector};
pub use path::Path;
