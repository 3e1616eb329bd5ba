//! Ascending priority queue with decrease-key.
//!
//! Entries live in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are pulled first; ties are broken by insertion order
//! (FIFO). Lowering the priority of a queued key keeps its original
//! insertion order, so it still yields to equal-priority keys queued before
//! it. Superseded heap entries are discarded lazily.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// A heap entry. Only the live one for a key matches its [`Slot`].
#[derive(Debug)]
struct Entry<K, P> {
    key: K,
    priority: P,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<K, P: Ord> PartialEq for Entry<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<K, P: Ord> Eq for Entry<K, P> {}

impl<K, P: Ord> PartialOrd for Entry<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, P: Ord> Ord for Entry<K, P> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller priority first,
        // then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
struct Slot<T, P> {
    item: T,
    priority: P,
    seq: u64,
}

/// A keyed min-priority queue.
///
/// Each key is queued at most once. See
/// [`insert_with_priority`](Self::insert_with_priority) for how repeated
/// inserts of the same key are handled.
#[derive(Debug)]
pub struct MinPriorityQueue<K, T, P> {
    heap: BinaryHeap<Reverse<Entry<K, P>>>,
    slots: HashMap<K, Slot<T, P>>,
    seq: u64,
}

impl<K, T, P> MinPriorityQueue<K, T, P>
where
    K: Copy + Eq + Hash,
    P: Copy + Ord,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            slots: HashMap::new(),
            seq: 0,
        }
    }

    /// Queue `item` under `key` at `priority`.
    ///
    /// If `key` is already queued, its item and priority are replaced only
    /// when `priority` is strictly lower. Returns whether the queue changed.
    pub fn insert_with_priority(&mut self, key: K, item: T, priority: P) -> bool {
        let seq = match self.slots.get_mut(&key) {
            Some(slot) => {
                if priority >= slot.priority {
                    return false;
                }
                slot.item = item;
                slot.priority = priority;
                slot.seq
            }
            None => {
                let seq = self.seq;
                self.seq += 1;
                self.slots.insert(key, Slot { item, priority, seq });
                seq
            }
        };
        self.heap.push(Reverse(Entry { key, priority, seq }));
        self.discard_stale();
        true
    }

    /// Remove and return the lowest-priority entry (ties broken FIFO).
    pub fn pull_min(&mut self) -> Option<(K, T, P)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.is_live(&entry) {
                continue;
            }
            let slot = self.slots.remove(&entry.key)?;
            self.discard_stale();
            return Some((entry.key, slot.item, slot.priority));
        }
        None
    }

    /// The entry [`pull_min`](Self::pull_min) would return next.
    pub fn peek_min(&self) -> Option<(K, &T, P)> {
        let Reverse(entry) = self.heap.peek()?;
        let slot = self.slots.get(&entry.key)?;
        Some((entry.key, &slot.item, slot.priority))
    }

    /// Current priority of `key`, if queued.
    pub fn priority_of(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|s| s.priority)
    }

    /// Whether `key` is queued.
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of queued keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    fn is_live(&self, entry: &Entry<K, P>) -> bool {
        self.slots
            .get(&entry.key)
            .is_some_and(|s| s.seq == entry.seq && s.priority == entry.priority)
    }

    /// Pop superseded entries so the heap top is always live.
    fn discard_stale(&mut self) {
        while let Some(Reverse(top)) = self.heap.peek() {
            if self.is_live(top) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl<K, T, P> Default for MinPriorityQueue<K, T, P>
where
    K: Copy + Eq + Hash,
    P: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
