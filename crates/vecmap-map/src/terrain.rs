//! Terrain configuration: what each cell label costs to enter and which
//! labels it can be entered from.

use std::collections::{BTreeMap, BTreeSet};

use vecmap_core::Magnitude;

/// Open floor.
pub const OPEN: char = '.';
/// Wall. Walls connect to each other and to ladders, but never to open floor.
pub const WALL: char = '#';
/// Ladder. Bridges open floor and walls at a higher cost.
pub const LADDER: char = 'H';

/// Per-label entry rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    /// Cost of entering a cell with this label.
    pub magnitude: Magnitude,
    /// Labels a cell with this label may be entered from.
    pub traversable_from: BTreeSet<char>,
}

impl Terrain {
    pub fn new(magnitude: Magnitude, traversable_from: impl IntoIterator<Item = char>) -> Self {
        Self {
            magnitude,
            traversable_from: traversable_from.into_iter().collect(),
        }
    }
}

/// Mapping from cell label to [`Terrain`].
///
/// The relation is directional: entering `b` from `a` is allowed when `b`'s
/// terrain lists `a` in its `traversable_from` set, regardless of the
/// reverse direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TerrainTable {
    terrains: BTreeMap<char, Terrain>,
}

impl TerrainTable {
    /// An empty table. Every label must be registered with
    /// [`insert`](Self::insert) before a map using it can be built.
    pub fn new() -> Self {
        Self {
            terrains: BTreeMap::new(),
        }
    }

    /// Register (or replace) the terrain for `label`.
    pub fn insert(&mut self, label: char, terrain: Terrain) -> Option<Terrain> {
        self.terrains.insert(label, terrain)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, label: char, terrain: Terrain) -> Self {
        self.insert(label, terrain);
        self
    }

    pub fn get(&self, label: char) -> Option<&Terrain> {
        self.terrains.get(&label)
    }

    /// Whether a cell labelled `to` may be entered from an adjacent cell
    /// labelled `from`. Unregistered labels are never traversable.
    pub fn is_traversable(&self, from: char, to: char) -> bool {
        self.terrains.contains_key(&from)
            && self
                .get(to)
                .is_some_and(|t| t.traversable_from.contains(&from))
    }

    /// Registered labels, in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.terrains.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }
}

/// Open floor, walls and ladders.
///
/// Entering floor costs 1, not 0, so Dijkstra still counts floor steps.
/// Register `OPEN` with magnitude 0 in a custom table for free floor.
impl Default for TerrainTable {
    fn default() -> Self {
        Self::new()
            .with(OPEN, Terrain::new(1, [OPEN, LADDER]))
            .with(WALL, Terrain::new(1, [WALL, LADDER]))
            .with(LADDER, Terrain::new(2, [OPEN, WALL, LADDER]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_traversable_pairs() {
        let t = TerrainTable::default();
        assert!(t.is_traversable(OPEN, OPEN));
        assert!(t.is_traversable(OPEN, LADDER));
        assert!(t.is_traversable(WALL, WALL));
        assert!(t.is_traversable(WALL, LADDER));
        assert!(t.is_traversable(LADDER, LADDER));
        assert!(t.is_traversable(LADDER, OPEN));
    }

    #[test]
    fn default_blocked_pairs() {
        let t = TerrainTable::default();
        assert!(!t.is_traversable(OPEN, WALL));
        assert!(!t.is_traversable(WALL, OPEN));
    }

    #[test]
    fn unlisted_labels() {
        let t = TerrainTable::default();
        assert!(!t.is_traversable(OPEN, '~'));
        assert!(!t.is_traversable('~', OPEN));
        assert!(!t.is_traversable('~', '~'));
    }

    #[test]
    fn asymmetric_rule() {
        // A slide can be entered from the floor, but the floor cannot be
        // re-entered from the slide.
        let t = TerrainTable::new()
            .with('.', Terrain::new(1, ['.']))
            .with('v', Terrain::new(0, ['.', 'v']));
        assert!(t.is_traversable('.', 'v'));
        assert!(!t.is_traversable('v', '.'));
    }

    #[test]
    fn default_magnitudes() {
        let t = TerrainTable::default();
        let cost = |c| t.get(c).map(|n| n.magnitude);
        assert_eq!(cost(OPEN), Some(1));
        assert_eq!(cost(WALL), Some(1));
        assert_eq!(cost(LADDER), Some(2));
    }

    #[test]
    fn insert_replaces() {
        let mut t = TerrainTable::default();
        assert_eq!(t.len(), 3);
        let old = t.insert(LADDER, Terrain::new(5, [LADDER]));
        assert_eq!(old.map(|o| o.magnitude), Some(2));
        assert_eq!(t.get(LADDER).map(|n| n.magnitude), Some(5));
        assert!(!t.is_traversable(OPEN, LADDER));
        assert_eq!(t.labels().collect::<String>(), "#.H");
    }
}
