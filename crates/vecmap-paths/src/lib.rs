//! Single-pair path searches over a *vecmap* [`Graph`](vecmap_core::Graph).
//!
//! Three interchangeable strategies implement [`PathFinder`]:
//!
//! - **Breadth-first** ([`BreadthFirst`]): fewest vectors, magnitudes ignored
//! - **Depth-first** ([`DepthFirst`]): first path found in LIFO order
//! - **Dijkstra** ([`Dijkstra`]): minimum total magnitude
//!
//! [`Strategy`] selects one of them at runtime. Every search owns its
//! history and frontier for the duration of a single call and never mutates
//! the graph, so searches over a shared graph may run concurrently.

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod queue;
mod search;
mod strategy;
mod traits;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use error::SearchError;
pub use queue::MinPriorityQueue;
pub use strategy::{Strategy, UnknownStrategy};
pub use traits::PathFinder;

#[cfg(test)]
pub(crate) mod testutil {
    use vecmap_core::{Graph, NodeId, Point};

    /// Build a 4-connected graph from text rows. `#` is blocked, `.` costs 1
    /// to enter and a digit costs its value.
    pub(crate) fn grid(rows: &[&str]) -> Graph {
        let cost = |c: char| match c {
            '#' => None,
            '.' => Some(1),
            d => d.to_digit(10),
        };
        let mut g = Graph::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, label) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let id = g.add_node(p, label).unwrap();
                let Some(here) = cost(label) else {
                    continue;
                };
                for q in [p.shift(-1, 0), p.shift(0, -1)] {
                    let Some(other) = g.find(q) else {
                        continue;
                    };
                    let Some(there) = g.node(other).and_then(|n| cost(n.label())) else {
                        continue;
                    };
                    g.add_directed_vector(id, other, there).unwrap();
                    g.add_directed_vector(other, id, here).unwrap();
                }
            }
        }
        g
    }

    pub(crate) fn at(g: &Graph, x: i32, y: i32) -> NodeId {
        g.find(Point::new(x, y)).unwrap()
    }

    /// Coordinates visited by `path`, origin first.
    pub(crate) fn trace(g: &Graph, path: &vecmap_core::Path) -> Vec<(i32, i32)> {
        path.nodes()
            .map(|id| {
                let p = g.node(id).unwrap().pos();
                (p.x, p.y)
            })
            .collect()
    }
}
